//! Data model module
//!
//! Request payloads and response bodies of the backend API

pub mod auth;
pub mod content;
pub mod copyright;
pub mod monetization;

use serde::{Deserialize, Serialize};

/// Generic `{"message": "..."}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Timestamp parsing tolerant of the backend's naive UTC datetimes
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// Accepts RFC 3339 (`...Z`, `...+00:00`) and naive `YYYY-MM-DDTHH:MM:SS[.f]` as UTC
    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub mod option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
                None => Ok(None),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Datelike, Timelike};

        #[test]
        fn test_parse_formats() {
            let zulu = parse("2024-05-01T10:20:30Z").unwrap();
            let offset = parse("2024-05-01T12:20:30+02:00").unwrap();
            let naive = parse("2024-05-01T10:20:30.123456").unwrap();

            assert_eq!(zulu, offset);
            assert_eq!(naive.year(), 2024);
            assert_eq!(naive.hour(), 10);
            assert!(parse("yesterday").is_none());
        }
    }
}
