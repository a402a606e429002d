#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finbrain/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # finbrain
//!
//! Typed client for the FinBrain financial data API.
//!
//! finbrain is an umbrella crate that re-exports the finbrain sub-crates for
//! convenience.
//!
//! ## Crate Organization
//!
//! - [`types`] - Errors, request parameters and date-indexed tables
//! - [`client`] - Blocking and async clients with per-resource endpoints
//!
//! ## Architecture
//!
//! Every endpoint call flows through the same pipeline:
//!
//! 1. **Endpoint wrappers** build a [`Request`] from typed arguments
//! 2. **The pipeline** attaches the credential, sends the request through a
//!    [`Transport`] and classifies the response
//! 3. **Reshaping** optionally turns the JSON into a [`DataTable`]

/// Version information for the finbrain crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Types
// ============================================================================

/// Shared types.
///
/// - [`FinBrainError`] - Error taxonomy for every failure mode
/// - [`DateParam`], [`PredictionType`], [`QueryParams`] - Request parameters
/// - [`DataTable`] - Date-indexed table over a polars DataFrame
pub mod types {
    pub use finbrain_types::*;
}

pub use finbrain_types::{
    DataTable, Date, DateParam, FinBrainError, PredictionType, QueryParams, Result, TableShape,
};

// ============================================================================
// Clients
// ============================================================================

/// FinBrain API clients.
///
/// ## Setup
///
/// 1. Get an API key at <https://finbrain.tech/>
/// 2. Set the `FINBRAIN_API_KEY` environment variable or add it to `.env`
///
/// ## Example
///
/// ```ignore
/// use finbrain::client::{AsyncClient, DateQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AsyncClient::from_env()?;
///
///     let query = DateQuery::new().date_from("2024-01-01").as_table(true);
///     let ratings = client.analyst_ratings().ticker("sp500", "AAPL", &query).await?;
///
///     if let Some(table) = ratings.as_table() {
///         println!("{} rating actions", table.len());
///     }
///     Ok(())
/// }
/// ```
pub mod client {
    pub use finbrain_client::*;
}

pub use finbrain_client::{
    AsyncClient, AsyncTransport, Client, ClientConfig, DateQuery, Payload, Request, RetryConfig,
    SentimentQuery, Transport,
};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use finbrain::prelude::*;
/// ```
///
/// This brings into scope:
/// - Clients: [`Client`], [`AsyncClient`], [`ClientConfig`]
/// - Query options: [`DateQuery`], [`SentimentQuery`], [`PredictionType`]
/// - Results: [`Payload`], [`DataTable`], [`Result`], [`FinBrainError`]
pub mod prelude {
    pub use crate::{
        AsyncClient, Client, ClientConfig, DataTable, Date, DateQuery, FinBrainError, Payload,
        PredictionType, Result, SentimentQuery,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let error = FinBrainError::Validation("test".to_string());
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_prelude_builds_requests() {
        use crate::prelude::*;

        let query = DateQuery::new().date_from(Date::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(!query.as_table);
        assert_eq!("monthly".parse::<PredictionType>().unwrap(), PredictionType::Monthly);

        let payload = Payload::Json(serde_json::json!({"ok": true}));
        assert!(payload.as_table().is_none());
    }
}
