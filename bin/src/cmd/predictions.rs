//! Predictions command implementation.

use crate::output;
use anyhow::Result;
use finbrain_client::AsyncClient;
use finbrain_types::PredictionType;

/// Show the forecast for one ticker.
pub(crate) async fn show_ticker(
    client: &AsyncClient,
    ticker: &str,
    prediction_type: PredictionType,
) -> Result<()> {
    let forecast = client.predictions().ticker(ticker, prediction_type).await?;
    output::print_json(&forecast)
}

/// Show the forecasts for every ticker of a market.
pub(crate) async fn show_market(
    client: &AsyncClient,
    market: &str,
    prediction_type: PredictionType,
) -> Result<()> {
    let forecasts = client.predictions().market(market, prediction_type).await?;
    output::print_json(&forecasts)
}
