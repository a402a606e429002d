//! Per-resource endpoint wrappers.
//!
//! Every resource module defines its request construction and table shape
//! once. The `resource_methods!` macro then generates the method set twice,
//! as blocking methods on handles borrowed from [`Client`](crate::Client)
//! and as async methods on handles borrowed from
//! [`AsyncClient`](crate::AsyncClient).

use finbrain_types::params::{DATE_FROM, DATE_TO, market_segment, symbol_segment};
use finbrain_types::{DataTable, DateParam, QueryParams, Result, TableShape};
use serde_json::Value;

/// Generate the blocking and async method sets of a resource handle.
///
/// Each method is declared as its signature, followed by an expression
/// building the [`Request`](crate::Request) and a closure shaping the JSON
/// result.
macro_rules! resource_methods {
    (
        $resource:ident;
        $(
            $(#[$meta:meta])*
            fn $name:ident(&self $(, $arg:ident: $ty:ty)*) -> $ret:ty
                => $build:expr, $finish:expr;
        )*
    ) => {
        impl<T: $crate::Transport> $resource<'_, $crate::Client<T>> {
            $(
                $(#[$meta])*
                pub fn $name(&self $(, $arg: $ty)*) -> ::finbrain_types::Result<$ret> {
                    let request = $build?;
                    let json = self.client.request(request)?;
                    ($finish)(json)
                }
            )*
        }

        impl<T: $crate::AsyncTransport> $resource<'_, $crate::AsyncClient<T>> {
            $(
                $(#[$meta])*
                pub async fn $name(&self $(, $arg: $ty)*) -> ::finbrain_types::Result<$ret> {
                    let request = $build?;
                    let json = self.client.request(request).await?;
                    ($finish)(json)
                }
            )*
        }
    };
}

mod analyst_ratings;
mod app_ratings;
mod available;
mod house_trades;
mod insider_transactions;
mod linkedin_data;
mod options;
mod predictions;
mod sentiments;

pub use analyst_ratings::AnalystRatings;
pub use app_ratings::AppRatings;
pub use available::Available;
pub use house_trades::HouseTrades;
pub use insider_transactions::InsiderTransactions;
pub use linkedin_data::LinkedInData;
pub use options::Options;
pub use predictions::Predictions;
pub use sentiments::Sentiments;

/// Result of an endpoint that can reshape its payload into a table.
#[derive(Debug, Clone)]
pub enum Payload {
    /// The JSON body exactly as returned.
    Json(Value),
    /// The resource data as a date-indexed table.
    Table(DataTable),
}

impl Payload {
    /// Keep the JSON, or reshape it with `shape` when `as_table` is set.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the payload cannot be reshaped.
    pub fn shaped(json: Value, shape: TableShape, as_table: bool) -> Result<Self> {
        if as_table {
            Ok(Self::Table(shape.apply(&json)?))
        } else {
            Ok(Self::Json(json))
        }
    }

    /// The JSON body, if this is a JSON payload.
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(json) => Some(json),
            Self::Table(_) => None,
        }
    }

    /// The table, if this is a table payload.
    pub const fn as_table(&self) -> Option<&DataTable> {
        match self {
            Self::Table(table) => Some(table),
            Self::Json(_) => None,
        }
    }

    /// Consume into the JSON body, if this is a JSON payload.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(json) => Some(json),
            Self::Table(_) => None,
        }
    }

    /// Consume into the table, if this is a table payload.
    pub fn into_table(self) -> Option<DataTable> {
        match self {
            Self::Table(table) => Some(table),
            Self::Json(_) => None,
        }
    }
}

/// Optional date range and return shape for per-ticker endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateQuery {
    /// Start of the range, inclusive.
    pub date_from: Option<DateParam>,
    /// End of the range, inclusive.
    pub date_to: Option<DateParam>,
    /// Return a [`DataTable`] instead of the JSON body.
    pub as_table: bool,
}

impl DateQuery {
    /// No range, JSON result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start of the range.
    #[must_use]
    pub fn date_from(mut self, date: impl Into<DateParam>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Set the end of the range.
    #[must_use]
    pub fn date_to(mut self, date: impl Into<DateParam>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Select the table (`true`) or JSON (`false`) result.
    #[must_use]
    pub const fn as_table(mut self, as_table: bool) -> Self {
        self.as_table = as_table;
        self
    }

    pub(crate) fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_date(DATE_FROM, self.date_from.as_ref());
        params.insert_date(DATE_TO, self.date_to.as_ref());
        params
    }
}

/// Query for the sentiments endpoint: a date range or a trailing window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentQuery {
    /// Start of the range, inclusive.
    pub date_from: Option<DateParam>,
    /// End of the range, inclusive.
    pub date_to: Option<DateParam>,
    /// Trailing window in days; ignored when either date bound is set.
    pub days: Option<u32>,
    /// Return a [`DataTable`] instead of the JSON body.
    pub as_table: bool,
}

impl SentimentQuery {
    /// No range, JSON result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start of the range.
    #[must_use]
    pub fn date_from(mut self, date: impl Into<DateParam>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Set the end of the range.
    #[must_use]
    pub fn date_to(mut self, date: impl Into<DateParam>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Request the past `days` days.
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    /// Select the table (`true`) or JSON (`false`) result.
    #[must_use]
    pub const fn as_table(mut self, as_table: bool) -> Self {
        self.as_table = as_table;
        self
    }

    pub(crate) fn params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_window(self.date_from.as_ref(), self.date_to.as_ref(), self.days);
        params
    }
}

/// `<prefix>/<SEGMENT>` with the segment percent-encoded.
fn market_segment_path(prefix: &str, segment: &str) -> String {
    format!("{prefix}/{}", market_segment(segment))
}

/// `<resource>/<MARKET>/<TICKER>` with both segments normalized.
fn ticker_path(resource: &str, market: &str, symbol: &str) -> String {
    format!(
        "{resource}/{}/{}",
        market_segment(market),
        symbol_segment(symbol)
    )
}
