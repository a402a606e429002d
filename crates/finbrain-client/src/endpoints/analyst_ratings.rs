//! `/analystratings`: broker rating changes and price targets.

use super::{DateQuery, Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "analystratings";
const TABLE: TableShape = TableShape::Records {
    key: "analystRatings",
};

/// Analyst ratings endpoint.
#[derive(Debug)]
pub struct AnalystRatings<'c, C> {
    client: &'c C,
}

impl<'c, C> AnalystRatings<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str, query: &DateQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)).with_params(query.params()))
}

resource_methods! {
    AnalystRatings;

    /// Rating actions on `symbol`, one record per action.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the ratings cannot be tabulated.
    fn ticker(&self, market: &str, symbol: &str, query: &DateQuery) -> Payload
        => ticker_request(market, symbol, query),
        |json| Payload::shaped(json, TABLE, query.as_table);
}
