//! Bulk endpoint connection config, loaded from env.

use std::env;

use seed_core::{Result, SeedError};

pub const DEFAULT_BULK_ENDPOINT: &str = "http://localhost:9200/people/_bulk";

/// Where to send bulk requests and which basic-auth credentials to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkConfig {
    /// BULK_ENDPOINT; full URL including index and `_bulk` path
    pub endpoint: String,
    /// BULK_USERNAME
    pub username: String,
    /// BULK_PASSWORD
    pub password: String,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BULK_ENDPOINT.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl BulkConfig {
    /// Load from environment variables; missing values fall back to [`BulkConfig::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("BULK_ENDPOINT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            username: env::var("BULK_USERNAME").unwrap_or(defaults.username),
            password: env::var("BULK_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Endpoint must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SeedError::Config(format!(
                "BULK_ENDPOINT is not a valid URL: {} ({})",
                self.endpoint, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SeedError::Config(format!(
                "BULK_ENDPOINT must use http or https: {}",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Password masked for logging.
    pub fn masked_password(&self) -> String {
        mask_secret(&self.password)
    }
}

/// Masks a secret for logging: first 3 chars + "***" + last 2 chars.
/// Secrets of 8 chars or fewer become "***"; an empty secret stays empty so logs show it is unset.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 8 => "***".to_string(),
        n => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[n - 2..].iter().collect();
            format!("{}***{}", head, tail)
        }
    }
}
