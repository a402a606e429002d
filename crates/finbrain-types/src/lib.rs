#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finbrain/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Shared types for the FinBrain API client.

/// The version of the finbrain-types crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod params;
pub mod table;

// Re-exports
pub use error::{BoxError, FinBrainError, Result};
pub use params::{DateParam, PredictionType, QueryParams};
pub use table::{DataTable, TableShape};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;
