use crate::intake::types::{UploadOptions, DEFAULT_BUCKET, DEFAULT_TABLE};
use crate::intake::FormSettings;
use anyhow::{Context, Result};
use std::time::Duration;

/// Runtime settings, read from `LISTING_*` environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, e.g. `https://project.example.co`
    pub api_url: String,
    /// Key sent as `apikey` and bearer token
    pub api_key: String,
    pub bucket: String,
    pub table: String,
    pub cache_control: String,
    pub timeout: Duration,
    /// Signed-in account, if any
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            bucket: DEFAULT_BUCKET.to_string(),
            table: DEFAULT_TABLE.to_string(),
            cache_control: "3600".to_string(),
            timeout: Duration::from_secs(30),
            user_id: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values count as missing
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_url = get("LISTING_API_URL").context("LISTING_API_URL is not set")?;
        let api_key = get("LISTING_API_KEY").context("LISTING_API_KEY is not set")?;
        let timeout = match get("LISTING_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid LISTING_TIMEOUT_SECS: {raw}"))?,
            ),
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            bucket: get("LISTING_BUCKET").unwrap_or(defaults.bucket),
            table: get("LISTING_TABLE").unwrap_or(defaults.table),
            cache_control: get("LISTING_CACHE_CONTROL").unwrap_or(defaults.cache_control),
            timeout,
            user_id: get("LISTING_USER_ID"),
        })
    }

    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            bucket: self.bucket.clone(),
            table: self.table.clone(),
            upload: UploadOptions {
                cache_control: self.cache_control.clone(),
                upsert: false,
            },
        }
    }
}
