//! HTTP client for the [FinBrain](https://finbrain.tech/) API.
//!
//! This crate provides a blocking [`Client`] and an async [`AsyncClient`]
//! with one method per FinBrain endpoint. Both flavors share request
//! construction, error classification and the retry policy.
//!
//! # Usage
//!
//! ```rust,ignore
//! use finbrain_client::{AsyncClient, DateQuery, SentimentQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AsyncClient::from_env()?;
//!
//!     // Markets the account can query
//!     let markets = client.available().markets().await?;
//!
//!     // Ten-day price forecast
//!     let forecast = client.predictions().ticker("AAPL", "daily").await?;
//!
//!     // Sentiment scores for the past 30 days, as a date-indexed table
//!     let query = SentimentQuery::new().days(30).as_table(true);
//!     let sentiment = client.sentiments().ticker("sp500", "AAPL", &query).await?;
//!
//!     // House trades since the start of the year
//!     let query = DateQuery::new().date_from("2024-01-01");
//!     let trades = client.house_trades().ticker("sp500", "AAPL", &query).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FINBRAIN_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FINBRAIN_API_KEY=your_api_key_here
//! ```
//!
//! `FINBRAIN_BASE_URL`, `FINBRAIN_TIMEOUT_SECS` and `FINBRAIN_MAX_RETRIES`
//! override the defaults.

mod client;
mod config;
pub mod endpoints;
mod pipeline;
mod request;
mod retry;
#[cfg(test)]
mod testing;
mod transport;

pub use client::{AsyncClient, Client};
pub use config::{
    API_KEY_VAR, BASE_URL_VAR, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, MAX_RETRIES_VAR,
    TIMEOUT_VAR,
};
pub use endpoints::{
    AnalystRatings, AppRatings, Available, DateQuery, HouseTrades, InsiderTransactions,
    LinkedInData, Options, Payload, Predictions, SentimentQuery, Sentiments,
};
pub use request::{HttpResponse, Method, PreparedRequest, Request, TOKEN_PARAM};
pub use retry::RetryConfig;
pub use transport::{AsyncTransport, BlockingReqwestTransport, ReqwestTransport, Transport};

pub use finbrain_types::{DataTable, Date, DateParam, FinBrainError, PredictionType, Result};
