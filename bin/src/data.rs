//! Client setup and argument parsing for the FinBrain CLI.

use chrono::NaiveDate;
use finbrain_client::{AsyncClient, ClientConfig};
use finbrain_types::{FinBrainError, Result};
use std::time::Duration;

/// Connection settings given on the command line.
#[derive(Debug, Default)]
pub(crate) struct ConnectOptions {
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Option<u64>,
    pub(crate) retries: Option<u32>,
    pub(crate) base_url: Option<String>,
}

/// Build the client configuration.
///
/// Without `--api-key` the configuration comes from the environment, and
/// command-line flags override it.
pub(crate) fn config(options: &ConnectOptions) -> Result<ClientConfig> {
    let mut config = match &options.api_key {
        Some(key) => ClientConfig::new(key.as_str()),
        None => ClientConfig::from_env()?,
    };
    if let Some(secs) = options.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = options.retries {
        config = config.with_max_retries(retries);
    }
    if let Some(base_url) = &options.base_url {
        config = config.with_base_url(base_url)?;
    }
    tracing::debug!(
        base_url = config.base_url(),
        timeout_secs = config.timeout().as_secs(),
        retries = config.retry().max_retries,
        "Resolved FinBrain client configuration"
    );
    Ok(config)
}

/// Create the async client.
pub(crate) fn connect(options: &ConnectOptions) -> Result<AsyncClient> {
    AsyncClient::with_config(config(options)?)
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| FinBrainError::Validation(format!("Invalid date format: {}", e)))
}
