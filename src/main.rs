//! Creator platform command-line client
//!
//! Thin front end over the library: one command per invocation, results
//! printed as JSON, session token kept in the configured session file

use anyhow::{Context, Result};
use clap::Parser;
use creatorkit::cli::{self, Cli};
use creatorkit::config::settings::resolve_base_url;
use creatorkit::session::LoggingNavigator;
use creatorkit::utils::logging::init_logging;
use creatorkit::{Api, ApiClient, FileTokenStore, SessionManager, Settings};
use std::sync::Arc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::new().context("Failed to load settings")?;
    if let Some(url) = cli.api_url {
        settings.client.base_url = resolve_base_url(Some(url));
    }
    init_logging(&settings.logging);

    debug!("{}", creatorkit::version_info());
    info!("API base URL: {}", settings.client.base_url);

    let store = Arc::new(FileTokenStore::new(&settings.session.store_path));
    let client = ApiClient::from_settings(&settings, store.clone(), Arc::new(LoggingNavigator))
        .context("Failed to create API client")?;
    let api = Api::new(Arc::new(client));
    let session = SessionManager::new(api.auth.clone(), store);

    cli::dispatch(cli.command, &api, &session).await
}
