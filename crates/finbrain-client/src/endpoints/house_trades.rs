//! `/housetrades`: trades disclosed by members of the US House.

use super::{DateQuery, Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "housetrades";
const TABLE: TableShape = TableShape::Records { key: "houseTrades" };

/// House trades endpoint.
#[derive(Debug)]
pub struct HouseTrades<'c, C> {
    client: &'c C,
}

impl<'c, C> HouseTrades<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str, query: &DateQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)).with_params(query.params()))
}

resource_methods! {
    HouseTrades;

    /// House-member trades in `symbol`.
    ///
    /// Each record carries the trade date, the representative, the
    /// transaction type and the reported amount.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the trades cannot be tabulated.
    fn ticker(&self, market: &str, symbol: &str, query: &DateQuery) -> Payload
        => ticker_request(market, symbol, query),
        |json| Payload::shaped(json, TABLE, query.as_table);
}
