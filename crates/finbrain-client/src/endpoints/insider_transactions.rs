//! `/insidertransactions`: Form 4 filings by company insiders.

use super::{Payload, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "insidertransactions";
const TABLE: TableShape = TableShape::Records {
    key: "insiderTransactions",
};

/// Insider transactions endpoint.
///
/// The endpoint takes no date range; it always returns the recent filings.
#[derive(Debug)]
pub struct InsiderTransactions<'c, C> {
    client: &'c C,
}

impl<'c, C> InsiderTransactions<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)))
}

resource_methods! {
    InsiderTransactions;

    /// Recent insider trades in `symbol`, as a table when `as_table` is set.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the trades cannot be tabulated.
    fn ticker(&self, market: &str, symbol: &str, as_table: bool) -> Payload
        => ticker_request(market, symbol),
        |json| Payload::shaped(json, TABLE, as_table);
}
