//! `/ticker/.../predictions` and `/market/.../predictions`: price forecasts.

use super::market_segment_path;
use crate::request::Request;
use finbrain_types::params::symbol_segment;
use finbrain_types::{PredictionType, Result};
use serde_json::Value;

/// Price-forecast endpoints.
///
/// The forecast horizon accepts a [`PredictionType`] or its string form;
/// anything other than `"daily"` or `"monthly"` is rejected before a request
/// is sent.
#[derive(Debug)]
pub struct Predictions<'c, C> {
    client: &'c C,
}

impl<'c, C> Predictions<'c, C> {
    pub(crate) const fn new(client: &'c C) -> Self {
        Self { client }
    }
}

fn ticker_request(ticker: &str, prediction_type: &str) -> Result<Request> {
    let prediction_type: PredictionType = prediction_type.parse()?;
    Ok(Request::get(format!(
        "ticker/{}/predictions/{prediction_type}",
        symbol_segment(ticker)
    )))
}

fn market_request(market: &str, prediction_type: &str) -> Result<Request> {
    let prediction_type: PredictionType = prediction_type.parse()?;
    Ok(Request::get(format!(
        "{}/predictions/{prediction_type}",
        market_segment_path("market", market)
    )))
}

resource_methods! {
    Predictions;

    /// Forecast for a single ticker.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::Validation`](finbrain_types::FinBrainError::Validation)
    /// for an unknown `prediction_type`, otherwise the classified request error.
    fn ticker(&self, ticker: &str, prediction_type: impl AsRef<str>) -> Value
        => ticker_request(ticker, prediction_type.as_ref()), Ok;

    /// Forecasts for every ticker of a market, e.g. `"sp500"`.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::Validation`](finbrain_types::FinBrainError::Validation)
    /// for an unknown `prediction_type`, otherwise the classified request error.
    fn market(&self, market: &str, prediction_type: impl AsRef<str>) -> Value
        => market_request(market, prediction_type.as_ref()), Ok;
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::testing::MockTransport;
    use crate::{AsyncClient, Client};
    use finbrain_types::{FinBrainError, PredictionType};
    use serde_json::json;

    #[test]
    fn test_ticker_path() {
        let mock = MockTransport::new()
            .respond(200, json!({"ticker": "AMZN"}))
            .respond(200, json!({"ticker": "AMZN"}));
        let client = Client::with_transport(ClientConfig::new("k"), mock.clone());

        client.predictions().ticker("amzn", PredictionType::Daily).unwrap();
        client.predictions().ticker("AMZN", "monthly").unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].path(), "ticker/AMZN/predictions/daily");
        assert_eq!(sent[1].path(), "ticker/AMZN/predictions/monthly");
        assert!(sent.iter().all(|r| r.params().is_empty()));
    }

    #[test]
    fn test_invalid_type_sends_nothing() {
        let mock = MockTransport::new();
        let client = Client::with_transport(ClientConfig::new("k"), mock.clone());

        let err = client.predictions().ticker("AMZN", "weekly").unwrap_err();
        match err {
            FinBrainError::Validation(message) => assert!(message.contains("weekly")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_market_async() {
        let mock = MockTransport::new().respond(200, json!([{"ticker": "AAPL"}]));
        let client = AsyncClient::with_transport(ClientConfig::new("k"), mock.clone());

        let value = client.predictions().market("S&P 500", "daily").await.unwrap();
        assert_eq!(value[0]["ticker"], "AAPL");
        assert_eq!(mock.requests()[0].path(), "market/S%26P%20500/predictions/daily");

        let err = client.predictions().market("sp500", "hourly").await.unwrap_err();
        assert!(matches!(err, FinBrainError::Validation(_)));
        assert_eq!(mock.requests().len(), 1);
    }
}
