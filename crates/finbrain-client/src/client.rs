//! FinBrain API clients.
//!
//! [`Client`] blocks the calling thread for each request; [`AsyncClient`]
//! suspends only while waiting on the network. Both resolve requests, apply
//! the retry policy and classify responses through the same pipeline, so a
//! given call produces the same request and the same error in either flavor.

use crate::config::ClientConfig;
use crate::endpoints::{
    AnalystRatings, AppRatings, Available, HouseTrades, InsiderTransactions, LinkedInData,
    Options, Predictions, Sentiments,
};
use crate::pipeline;
use crate::request::{PreparedRequest, Request};
use crate::transport::{AsyncTransport, BlockingReqwestTransport, ReqwestTransport, Transport};
use finbrain_types::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Blocking FinBrain API client.
///
/// Cloning is cheap; clones share the configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct Client<T = BlockingReqwestTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl Client {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client from the environment (see [`ClientConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `FINBRAIN_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = BlockingReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the last attempt.
    pub fn request(&self, request: Request) -> Result<Value> {
        let prepared = pipeline::prepare(&self.config, request);
        let mut attempt = 0;
        loop {
            log_attempt(&prepared, attempt);
            let outcome = self
                .transport
                .execute(&prepared)
                .and_then(pipeline::classify);
            match outcome {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let delay = self.config.retry().next_delay(attempt, &err).ok_or(err)?;
                    log_retry(&prepared, attempt, delay);
                    std::thread::sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

/// Async FinBrain API client.
///
/// Cloning is cheap; clones share the configuration and the connection pool,
/// and may be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct AsyncClient<T = ReqwestTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl AsyncClient {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client from the environment (see [`ClientConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `FINBRAIN_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: AsyncTransport> AsyncClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// Dropping the future cancels the in-flight request.
    ///
    /// # Errors
    ///
    /// Returns the classified error of the last attempt.
    pub async fn request(&self, request: Request) -> Result<Value> {
        let prepared = pipeline::prepare(&self.config, request);
        let mut attempt = 0;
        loop {
            log_attempt(&prepared, attempt);
            let outcome = self
                .transport
                .execute(&prepared)
                .await
                .and_then(pipeline::classify);
            match outcome {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let delay = self.config.retry().next_delay(attempt, &err).ok_or(err)?;
                    log_retry(&prepared, attempt, delay);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Resource handles, identical for both flavors.
macro_rules! resource_accessors {
    ($client:ident) => {
        impl<T> $client<T> {
            /// `/available` catalog endpoints.
            pub const fn available(&self) -> Available<'_, Self> {
                Available::new(self)
            }

            /// `/ticker/.../predictions` and `/market/.../predictions` endpoints.
            pub const fn predictions(&self) -> Predictions<'_, Self> {
                Predictions::new(self)
            }

            /// `/sentiments` endpoint.
            pub const fn sentiments(&self) -> Sentiments<'_, Self> {
                Sentiments::new(self)
            }

            /// `/insidertransactions` endpoint.
            pub const fn insider_transactions(&self) -> InsiderTransactions<'_, Self> {
                InsiderTransactions::new(self)
            }

            /// `/housetrades` endpoint.
            pub const fn house_trades(&self) -> HouseTrades<'_, Self> {
                HouseTrades::new(self)
            }

            /// `/analystratings` endpoint.
            pub const fn analyst_ratings(&self) -> AnalystRatings<'_, Self> {
                AnalystRatings::new(self)
            }

            /// `/appratings` endpoint.
            pub const fn app_ratings(&self) -> AppRatings<'_, Self> {
                AppRatings::new(self)
            }

            /// `/linkedindata` endpoint.
            pub const fn linkedin_data(&self) -> LinkedInData<'_, Self> {
                LinkedInData::new(self)
            }

            /// Options data endpoints (`/putcalldata`).
            pub const fn options(&self) -> Options<'_, Self> {
                Options::new(self)
            }
        }
    };
}

resource_accessors!(Client);
resource_accessors!(AsyncClient);

fn log_attempt(request: &PreparedRequest, attempt: u32) {
    tracing::debug!(
        method = %request.method(),
        path = request.path(),
        params = request.params().len(),
        attempt = attempt + 1,
        "Sending FinBrain request"
    );
}

fn log_retry(request: &PreparedRequest, attempt: u32, delay: Duration) {
    tracing::warn!(
        path = request.path(),
        attempt = attempt + 1,
        delay_ms = delay.as_millis() as u64,
        "Retrying FinBrain request"
    );
}
