//! Per-ticker dataset commands.

use crate::output;
use anyhow::Result;
use chrono::NaiveDate;
use finbrain_client::{AsyncClient, DateQuery, SentimentQuery};

/// Datasets that share the market/symbol/date-range arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dataset {
    HouseTrades,
    AnalystRatings,
    AppRatings,
    LinkedIn,
    PutCall,
}

/// Build a date-range query from command-line arguments.
pub(crate) fn date_query(from: Option<NaiveDate>, to: Option<NaiveDate>, table: bool) -> DateQuery {
    DateQuery {
        date_from: from.map(Into::into),
        date_to: to.map(Into::into),
        as_table: table,
    }
}

/// Build a sentiment query from command-line arguments.
pub(crate) fn sentiment_query(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    days: Option<u32>,
    table: bool,
) -> SentimentQuery {
    SentimentQuery {
        date_from: from.map(Into::into),
        date_to: to.map(Into::into),
        days,
        as_table: table,
    }
}

/// Show sentiment scores.
pub(crate) async fn show_sentiments(
    client: &AsyncClient,
    market: &str,
    symbol: &str,
    query: &SentimentQuery,
) -> Result<()> {
    let payload = client.sentiments().ticker(market, symbol, query).await?;
    output::print_payload(payload)
}

/// Show insider transactions.
pub(crate) async fn show_insider_transactions(
    client: &AsyncClient,
    market: &str,
    symbol: &str,
    table: bool,
) -> Result<()> {
    let payload = client
        .insider_transactions()
        .ticker(market, symbol, table)
        .await?;
    output::print_payload(payload)
}

/// Show one of the date-ranged datasets.
pub(crate) async fn show_dataset(
    client: &AsyncClient,
    dataset: Dataset,
    market: &str,
    symbol: &str,
    query: &DateQuery,
) -> Result<()> {
    let payload = match dataset {
        Dataset::HouseTrades => client.house_trades().ticker(market, symbol, query).await?,
        Dataset::AnalystRatings => client.analyst_ratings().ticker(market, symbol, query).await?,
        Dataset::AppRatings => client.app_ratings().ticker(market, symbol, query).await?,
        Dataset::LinkedIn => client.linkedin_data().ticker(market, symbol, query).await?,
        Dataset::PutCall => client.options().put_call(market, symbol, query).await?,
    };
    output::print_payload(payload)
}
