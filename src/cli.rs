//! Command-line front end
//!
//! One command per invocation; results are printed as pretty JSON.

use crate::api::content::REPURPOSE_TIMEOUT;
use crate::models::auth::RegisterRequest;
use crate::models::content::{GenerateIdeasRequest, HistoryQuery, RepurposeVideoRequest, VideoUpload};
use crate::models::copyright::MonitoringRequest;
use crate::models::monetization::{
    BrandOutreachRequest, DealStatus, RateCalculationRequest, TrackDealRequest,
};
use crate::{Api, SessionManager};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "creatorkit", version, about = "Command-line client for the creator platform API")]
pub struct Cli {
    /// Overrides NEXT_PUBLIC_API_URL for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and store the session token
    Login(LoginArgs),
    /// Create an account
    Register(RegisterArgs),
    /// Sign out and erase the session token
    Logout,
    /// Exchange the session token for a fresh one
    Refresh,
    /// Show the signed-in user
    Me,
    /// Generate content ideas for a topic
    Ideas(IdeasArgs),
    /// Upload a video and repurpose it for other platforms
    Repurpose(RepurposeArgs),
    /// List generated content
    History(HistoryArgs),
    /// Delete a content item
    Delete(IdArgs),
    /// Analytics dashboard
    Dashboard(DashboardArgs),
    /// Performance metrics
    Performance(PerformanceArgs),
    /// Insights for one content item
    Insights(IdArgs),
    /// Compare against a competitor
    Competitors(CompetitorArgs),
    /// List brand deals
    Deals,
    /// Send a brand outreach proposal
    Outreach(OutreachArgs),
    /// Estimate sponsorship rates
    Rates(RatesArgs),
    /// Track a brand deal
    TrackDeal(TrackDealArgs),
    /// Copyright monitoring status
    Monitoring,
    /// Start monitoring a piece of content
    Monitor(MonitorArgs),
    /// List detected copyright violations
    Violations,
    /// File a DMCA notice for a violation
    Dmca(IdArgs),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    pub email: String,
    pub password: String,
    #[arg(long = "name")]
    pub full_name: String,
    #[arg(long)]
    pub niche: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    #[arg(help = "Resource identifier")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct IdeasArgs {
    pub topic: String,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub count: u32,
    #[arg(long)]
    pub niche: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
}

#[derive(Debug, Args)]
pub struct RepurposeArgs {
    #[arg(help = "Path to the video or audio file")]
    pub file: PathBuf,
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<String>,
    #[arg(long)]
    pub tone: Option<String>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(long)]
    pub content_type: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(long, help = "Window such as 7d or 90d (server default 30d)")]
    pub timeframe: Option<String>,
}

#[derive(Debug, Args)]
pub struct PerformanceArgs {
    #[arg(long)]
    pub platform: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompetitorArgs {
    pub competitor: String,
}

#[derive(Debug, Args)]
pub struct OutreachArgs {
    pub brand_name: String,
    pub email: String,
    #[arg(long, default_value = "sponsored_post")]
    pub proposal_type: String,
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Debug, Args)]
pub struct RatesArgs {
    pub platform: String,
    pub followers: u64,
    #[arg(help = "Engagement rate in percent, e.g. 4.2")]
    pub engagement_rate: f64,
    #[arg(long, default_value = "post")]
    pub content_type: String,
}

#[derive(Debug, Args)]
pub struct TrackDealArgs {
    pub brand_name: String,
    pub value: f64,
    #[arg(long, value_enum, default_value_t = DealStatusArg::Pending)]
    pub status: DealStatusArg,
    #[arg(long, help = "Deadline as YYYY-MM-DD")]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct MonitorArgs {
    pub content_url: String,
    #[arg(long, default_value = "video")]
    pub content_type: String,
    #[arg(long, default_value = "daily")]
    pub frequency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DealStatusArg {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl From<DealStatusArg> for DealStatus {
    fn from(value: DealStatusArg) -> Self {
        match value {
            DealStatusArg::Pending => DealStatus::Pending,
            DealStatusArg::Active => DealStatus::Active,
            DealStatusArg::Completed => DealStatus::Completed,
            DealStatusArg::Cancelled => DealStatus::Cancelled,
        }
    }
}

impl From<RegisterArgs> for RegisterRequest {
    fn from(args: RegisterArgs) -> Self {
        Self {
            email: args.email,
            password: args.password,
            full_name: args.full_name,
            niche: args.niche,
        }
    }
}

impl From<IdeasArgs> for GenerateIdeasRequest {
    fn from(args: IdeasArgs) -> Self {
        Self {
            topic: args.topic,
            niche: args.niche,
            audience: args.audience,
            count: args.count,
            platform: args.platform,
        }
    }
}

impl From<HistoryArgs> for HistoryQuery {
    fn from(args: HistoryArgs) -> Self {
        Self {
            content_type: args.content_type,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

impl From<OutreachArgs> for BrandOutreachRequest {
    fn from(args: OutreachArgs) -> Self {
        Self {
            brand_name: args.brand_name,
            email: args.email,
            proposal_type: args.proposal_type,
            custom_message: args.message,
        }
    }
}

impl From<RatesArgs> for RateCalculationRequest {
    fn from(args: RatesArgs) -> Self {
        Self {
            platform: args.platform,
            followers: args.followers,
            engagement_rate: args.engagement_rate,
            content_type: args.content_type,
        }
    }
}

impl From<TrackDealArgs> for TrackDealRequest {
    fn from(args: TrackDealArgs) -> Self {
        Self {
            brand_name: args.brand_name,
            deal_value: args.value,
            status: args.status.into(),
            deadline: args.deadline,
        }
    }
}

impl From<MonitorArgs> for MonitoringRequest {
    fn from(args: MonitorArgs) -> Self {
        Self {
            content_url: args.content_url,
            content_type: args.content_type,
            monitoring_frequency: args.frequency,
        }
    }
}

impl RepurposeArgs {
    /// Read the file and build the upload request
    pub fn into_request(self) -> Result<RepurposeVideoRequest> {
        Ok(RepurposeVideoRequest {
            video: read_upload(&self.file)?,
            title: self.title,
            description: self.description,
            target_platforms: self
                .platforms
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            tone: self.tone,
        })
    }
}

/// Run one parsed command against the API
pub async fn dispatch(command: Command, api: &Api, session: &SessionManager) -> Result<()> {
    match command {
        Command::Login(args) => {
            session.sign_in(&args.email, &args.password).await?;
            println!("Signed in as {}", args.email);
        }
        Command::Register(args) => print_json(&api.auth.register(&args.into()).await?)?,
        Command::Logout => {
            session.sign_out().await?;
            println!("Signed out");
        }
        Command::Refresh => {
            session.refresh().await?;
            println!("Session refreshed");
        }
        Command::Me => print_json(&api.auth.current_user().await?)?,
        Command::Ideas(args) => print_json(&api.content.generate_ideas(&args.into()).await?)?,
        Command::Repurpose(args) => {
            let request = args.into_request()?;
            info!("Processing video, this can take up to {}s", REPURPOSE_TIMEOUT.as_secs());
            print_json(&api.content.repurpose_video(&request).await?)?;
        }
        Command::History(args) => print_json(&api.content.history(&args.into()).await?)?,
        Command::Delete(args) => print_json(&api.content.delete_content(&args.id).await?)?,
        Command::Dashboard(args) => {
            print_json(&api.analytics.dashboard(args.timeframe.as_deref()).await?)?
        }
        Command::Performance(args) => {
            print_json(&api.analytics.performance(args.platform.as_deref()).await?)?
        }
        Command::Insights(args) => print_json(&api.analytics.content_insights(&args.id).await?)?,
        Command::Competitors(args) => {
            print_json(&api.analytics.competitor_analysis(&args.competitor).await?)?
        }
        Command::Deals => print_json(&api.monetization.brand_deals().await?)?,
        Command::Outreach(args) => {
            print_json(&api.monetization.create_brand_outreach(&args.into()).await?)?
        }
        Command::Rates(args) => print_json(&api.monetization.calculate_rates(&args.into()).await?)?,
        Command::TrackDeal(args) => print_json(&api.monetization.track_deal(&args.into()).await?)?,
        Command::Monitoring => print_json(&api.copyright.monitoring_status().await?)?,
        Command::Monitor(args) => print_json(&api.copyright.setup_monitoring(&args.into()).await?)?,
        Command::Violations => print_json(&api.copyright.violations().await?)?,
        Command::Dmca(args) => print_json(&api.copyright.submit_dmca(&args.id).await?)?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_upload(path: &Path) -> Result<VideoUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read video file: {:?}", path))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.mp4")
        .to_string();

    Ok(VideoUpload {
        file_name,
        content_type: guess_mime(path).map(str::to_string),
        bytes,
    })
}

/// MIME type for the media extensions the backend accepts
fn guess_mime(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("mp4") => Some("video/mp4"),
        Some("webm") => Some("video/webm"),
        Some("mp3") => Some("audio/mpeg"),
        Some("wav") => Some("audio/wav"),
        Some("m4a") => Some("audio/mp4"),
        _ => None,
    }
}
