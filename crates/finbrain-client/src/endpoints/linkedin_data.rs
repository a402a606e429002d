//! `/linkedindata`: employee and follower counts from LinkedIn.

use super::{DateQuery, Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "linkedindata";
const TABLE: TableShape = TableShape::Records { key: "linkedinData" };

/// LinkedIn metrics endpoint.
#[derive(Debug)]
pub struct LinkedInData<'c, C> {
    client: &'c C,
}

impl<'c, C> LinkedInData<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str, query: &DateQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)).with_params(query.params()))
}

resource_methods! {
    LinkedInData;

    /// Daily employee and follower counts for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the metrics cannot be tabulated.
    fn ticker(&self, market: &str, symbol: &str, query: &DateQuery) -> Payload
        => ticker_request(market, symbol, query),
        |json| Payload::shaped(json, TABLE, query.as_table);
}
