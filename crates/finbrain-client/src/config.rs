//! Client configuration.

use crate::retry::RetryConfig;
use finbrain_types::{FinBrainError, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Base URL of the FinBrain v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.finbrain.tech/v1/";

/// Default timeout for a whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "FINBRAIN_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "FINBRAIN_BASE_URL";

/// Environment variable overriding the timeout, in seconds.
pub const TIMEOUT_VAR: &str = "FINBRAIN_TIMEOUT_SECS";

/// Environment variable setting the retry count.
pub const MAX_RETRIES_VAR: &str = "FINBRAIN_MAX_RETRIES";

/// Configuration shared by every request of one client.
///
/// Immutable once a client is built from it.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
    retry: RetryConfig,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with the given API key and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryConfig::default(),
            user_agent: concat!("finbrain-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Create a configuration from the environment.
    ///
    /// This will also load from a `.env` file if present. Reads
    /// `FINBRAIN_API_KEY` (required), `FINBRAIN_BASE_URL`,
    /// `FINBRAIN_TIMEOUT_SECS` and `FINBRAIN_MAX_RETRIES`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or an override is invalid.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(FinBrainError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());

        if let Some(url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&url)?;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let secs = parse_number::<u64>(TIMEOUT_VAR, &secs)?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = lookup(MAX_RETRIES_VAR) {
            config = config.with_max_retries(parse_number(MAX_RETRIES_VAR, &retries)?);
        }

        Ok(config)
    }

    /// Use a different base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::Config`] unless the URL is absolute http(s).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url.trim())
            .map_err(|e| FinBrainError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(FinBrainError::Config(format!(
                "base URL must be an absolute http(s) URL, got '{base_url}'"
            )));
        }
        self.base_url = parsed.to_string();
        Ok(self)
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry transient failures up to `max_retries` times with default backoff.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API token.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The retry policy.
    pub const fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// The `User-Agent` header.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Absolute URL for a relative endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FinBrainError::Config(format!("{var} must be a non-negative integer, got '{value}'")))
}
