//! `/sentiments`: daily news-sentiment scores for a ticker.

use super::{Payload, SentimentQuery, ticker_path};
use crate::request::Request;
use finbrain_types::{Result, TableShape};

const RESOURCE: &str = "sentiments";

/// `sentimentAnalysis` maps each date to one score.
const TABLE: TableShape = TableShape::Series {
    key: "sentimentAnalysis",
    column: "sentiment",
};

/// Sentiment endpoint.
#[derive(Debug)]
pub struct Sentiments<'c, C> {
    client: &'c C,
}

impl<'c, C> Sentiments<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(market: &str, symbol: &str, query: &SentimentQuery) -> Result<Request> {
    Ok(Request::get(ticker_path(RESOURCE, market, symbol)).with_params(query.params()))
}

resource_methods! {
    Sentiments;

    /// Sentiment scores of `symbol` in `market`.
    ///
    /// With `query.as_table` the scores come back as a single `sentiment`
    /// column indexed by date.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, or
    /// [`FinBrainError::DataShape`](finbrain_types::FinBrainError::DataShape)
    /// if the scores cannot be tabulated.
    fn ticker(&self, market: &str, symbol: &str, query: &SentimentQuery) -> Payload
        => ticker_request(market, symbol, query),
        |json| Payload::shaped(json, TABLE, query.as_table);
}
