//! Request parameter normalization.
//!
//! All endpoint wrappers build their path segments and query strings through
//! this module so the rules are applied identically everywhere:
//!
//! - dates render as `YYYY-MM-DD`, text dates pass through unchanged, and
//!   absent or empty values are omitted from the query entirely;
//! - ticker symbols are upper-cased before they enter the path;
//! - market and type segments are percent-encoded, so names such as
//!   `"S&P 500"` are valid path components.

use crate::{FinBrainError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query key for the start of a date range.
pub const DATE_FROM: &str = "dateFrom";

/// Query key for the end of a date range.
pub const DATE_TO: &str = "dateTo";

/// Query key for a trailing window in days.
pub const DAYS: &str = "days";

/// A date argument given either as a calendar date or as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    /// A calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Text sent exactly as given.
    Text(String),
}

impl DateParam {
    /// Render the value for the query string, or `None` if it should be omitted.
    #[must_use]
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
        }
    }
}

impl From<NaiveDate> for DateParam {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateParam {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateParam {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Forecast horizon of the predictions endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionType {
    /// Ten-day horizon.
    #[default]
    Daily,
    /// Twelve-month horizon.
    Monthly,
}

impl PredictionType {
    /// Get the path segment value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for PredictionType {
    type Err = FinBrainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Self::Daily),
            "monthly" => Ok(Self::Monthly),
            other => Err(FinBrainError::Validation(format!(
                "prediction_type must be 'daily' or 'monthly' (got '{other}')"
            ))),
        }
    }
}

impl AsRef<str> for PredictionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percent-encode a market or type name for use as one path segment.
#[must_use]
pub fn market_segment(market: &str) -> String {
    urlencoding::encode(market).into_owned()
}

/// Upper-case a ticker symbol and encode it as one path segment.
#[must_use]
pub fn symbol_segment(symbol: &str) -> String {
    urlencoding::encode(&symbol.to_uppercase()).into_owned()
}

/// Query parameters of a single request.
///
/// Keys are unique and iterate in sorted order, so two requests built from
/// equivalent arguments produce identical query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    inner: BTreeMap<String, String>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Set a date parameter if it is present and non-empty.
    pub fn insert_date(&mut self, key: &str, value: Option<&DateParam>) {
        if let Some(rendered) = value.and_then(DateParam::to_query_value) {
            self.inner.insert(key.to_string(), rendered);
        }
    }

    /// Apply a date range and an optional day window.
    ///
    /// The window is only sent when neither bound of the range is set.
    pub fn insert_window(
        &mut self,
        date_from: Option<&DateParam>,
        date_to: Option<&DateParam>,
        days: Option<u32>,
    ) {
        self.insert_date(DATE_FROM, date_from);
        self.insert_date(DATE_TO, date_to);
        if let Some(days) = days
            && !self.contains(DATE_FROM)
            && !self.contains(DATE_TO)
        {
            self.inner.insert(DAYS.to_string(), days.to_string());
        }
    }

    /// Get a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Whether the parameter is set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_param_rendering() {
        assert_eq!(
            DateParam::from(date(2024, 1, 5)).to_query_value().as_deref(),
            Some("2024-01-05")
        );
        assert_eq!(
            DateParam::from("2024-01-05").to_query_value().as_deref(),
            Some("2024-01-05")
        );
        assert_eq!(DateParam::from("").to_query_value(), None);
    }

    #[test]
    fn test_text_dates_pass_through() {
        let param = DateParam::from("20240105".to_string());
        assert_eq!(param.to_query_value().as_deref(), Some("20240105"));
    }

    #[test]
    fn test_date_and_text_give_identical_params() {
        let mut from_date = QueryParams::new();
        from_date.insert_window(
            Some(&date(2024, 1, 1).into()),
            Some(&date(2024, 2, 2).into()),
            None,
        );

        let mut from_text = QueryParams::new();
        from_text.insert_window(Some(&"2024-01-01".into()), Some(&"2024-02-02".into()), None);

        assert_eq!(from_date, from_text);
        let pairs: Vec<_> = from_date.iter().collect();
        assert_eq!(pairs, vec![("dateFrom", "2024-01-01"), ("dateTo", "2024-02-02")]);
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let mut params = QueryParams::new();
        params.insert_window(None, Some(&"".into()), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_days_only_without_range() {
        let mut params = QueryParams::new();
        params.insert_window(None, None, Some(30));
        assert_eq!(params.get(DAYS), Some("30"));

        let mut params = QueryParams::new();
        params.insert_window(Some(&"2024-01-01".into()), None, Some(30));
        assert!(!params.contains(DAYS));
        assert_eq!(params.get(DATE_FROM), Some("2024-01-01"));

        let mut params = QueryParams::new();
        params.insert_window(None, Some(&date(2024, 3, 1).into()), Some(30));
        assert!(!params.contains(DAYS));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_prediction_type_parsing() {
        assert_eq!("daily".parse::<PredictionType>().unwrap(), PredictionType::Daily);
        assert_eq!("monthly".parse::<PredictionType>().unwrap(), PredictionType::Monthly);

        let err = "weekly".parse::<PredictionType>().unwrap_err();
        assert!(matches!(err, FinBrainError::Validation(_)));
        assert!(err.to_string().contains("weekly"));
    }

    #[test]
    fn test_prediction_type_default() {
        assert_eq!(PredictionType::default(), PredictionType::Daily);
        assert_eq!(PredictionType::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_market_segment_encoding() {
        let encoded = market_segment("S&P 500");
        assert_eq!(encoded, "S%26P%20500");
        assert!(!encoded.contains(' '));
        assert_eq!(urlencoding::decode(&encoded).unwrap(), "S&P 500");
        assert_eq!(market_segment("sp500"), "sp500");
    }

    #[test]
    fn test_symbol_segment_uppercases() {
        assert_eq!(symbol_segment("amzn"), "AMZN");
        assert_eq!(symbol_segment("brk.b"), "BRK.B");
    }
}
