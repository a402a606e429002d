//! `/available`: the catalog of markets and tickers the account can query.

use super::market_segment_path;
use crate::request::Request;
use finbrain_types::{FinBrainError, Result};
use serde_json::Value;

const MARKETS_KEY: &str = "availableMarkets";

/// Catalog endpoints.
#[derive(Debug)]
pub struct Available<'c, C> {
    client: &'c C,
}

impl<'c, C> Available<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn markets_request() -> Result<Request> {
    Ok(Request::get("available/markets"))
}

fn tickers_request(kind: &str) -> Result<Request> {
    Ok(Request::get(market_segment_path("available/tickers", kind)))
}

/// Market names from the `availableMarkets` field; a missing field means none.
fn market_names(json: Value) -> Result<Vec<String>> {
    match json.get(MARKETS_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    FinBrainError::InvalidResponse(format!(
                        "'{MARKETS_KEY}' should hold strings, found {item}"
                    ))
                })
            })
            .collect(),
        Some(other) => Err(FinBrainError::InvalidResponse(format!(
            "'{MARKETS_KEY}' should be an array, found {other}"
        ))),
    }
}

resource_methods! {
    Available;

    /// Every market index the API supports, e.g. `"S&P 500"`.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::InvalidResponse`] if the market list is malformed.
    fn markets(&self) -> Vec<String>
        => markets_request(), market_names;

    /// All tickers of a market `kind` (e.g. `"sp500"`), as returned.
    ///
    /// # Errors
    ///
    /// Returns the classified request error.
    fn tickers(&self, kind: &str) -> Value
        => tickers_request(kind), Ok;
}
