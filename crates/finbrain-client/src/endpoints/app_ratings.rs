//! `/appratings`: app-store and play-store ratings of a company's apps.

use super::{DateQuery, Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "appratings";
const TABLE: TableShape = TableShape::Records { key: "appRatings" };

/// App ratings endpoint.
#[derive(Debug)]
pub struct AppRatings<'c, C> {
    client: &'c C,
}

impl<'c, C> AppRatings<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str, query: &DateQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)).with_params(query.params()))
}

resource_methods! {
    AppRatings;

    /// Daily store scores and rating counts for `symbol`.
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
