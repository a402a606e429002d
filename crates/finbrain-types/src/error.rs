//! Error types for the FinBrain client.
//!
//! Every failure a caller can observe is one variant of [`FinBrainError`].
//! HTTP failures are classified by status code so callers can match on the
//! kind (for example backing off on [`FinBrainError::RateLimited`]) instead of
//! inspecting message strings.

use std::time::Duration;
use thiserror::Error;

/// Boxed error used as the source of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for FinBrain operations.
#[derive(Debug, Error)]
pub enum FinBrainError {
    /// A caller-supplied argument is outside its allowed set.
    ///
    /// Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The API rejected the request shape (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The credential is missing, invalid or lacks access (HTTP 401/403).
    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication {
        /// HTTP status code, 401 or 403.
        status: u16,
        /// Message returned by the API.
        message: String,
    },

    /// Unknown market, ticker or type combination (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too many requests (HTTP 429).
    #[error("Rate limited (retry after {retry_after:?}): {message}")]
    RateLimited {
        /// Delay requested by the `Retry-After` header, if any.
        retry_after: Option<Duration>,
        /// Message returned by the API.
        message: String,
    },

    /// The API failed to serve the request (HTTP 5xx).
    #[error("Server error (HTTP {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message returned by the API.
        message: String,
    },

    /// Any other non-success status.
    #[error("Unexpected HTTP status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Message returned by the API.
        message: String,
    },

    /// The request never produced a response (connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// A successful response whose body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(String),

    /// The JSON payload does not have the shape required for reshaping.
    #[error("Unexpected data shape: {0}")]
    DataShape(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// No API key was supplied.
    #[error("FINBRAIN_API_KEY environment variable not set")]
    MissingApiKey,

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FinBrainError {
    /// Wrap any error as a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport(err.into())
    }

    /// HTTP status code for errors that came from an upstream response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::NotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Authentication { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure is transient and the request may be retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Server { .. } | Self::RateLimited { .. } | Self::Transport(_)
        )
    }
}

/// A specialized Result type for FinBrain operations.
pub type Result<T> = std::result::Result<T, FinBrainError>;
