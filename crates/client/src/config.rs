//! Configuration for the YNAB client.

use crate::error::{YnabError, YnabResult};
use std::time::Duration;
use url::Url;

/// Default YNAB API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token, sent as a bearer credential on every request.
    pub access_token: String,
    /// Base URL of the YNAB API.
    pub base_url: Url,
    /// Bounded per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(access_token: impl Into<String>) -> YnabResult<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)?;
        Ok(Self {
            access_token: access_token.into(),
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from the process environment.
    ///
    /// `YNAB_TOKEN` is required and must be non-empty. `YNAB_BASE_URL` and
    /// `YNAB_TIMEOUT_SECS` are optional.
    pub fn from_env() -> YnabResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Separated from [`Config::from_env`] so tests can supply values without
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> YnabResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup("YNAB_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                YnabError::Config(
                    "YNAB_TOKEN environment variable is required. \
                     Set it to your YNAB personal access token."
                        .to_string(),
                )
            })?;

        let base_url_str =
            lookup("YNAB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url_str)
            .map_err(|e| YnabError::Config(format!("invalid YNAB_BASE_URL: {}", e)))?;

        let timeout_secs = match lookup("YNAB_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| {
                    YnabError::Config(format!("invalid YNAB_TIMEOUT_SECS: {:?}", raw))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            access_token,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
