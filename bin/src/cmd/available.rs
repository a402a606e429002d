//! Markets and tickers command implementations.

use crate::output;
use anyhow::Result;
use finbrain_client::AsyncClient;

/// Print every market the account can query, one per line.
pub(crate) async fn list_markets(client: &AsyncClient) -> Result<()> {
    let markets = client.available().markets().await?;
    if markets.is_empty() {
        eprintln!("No markets available");
    }
    for market in markets {
        println!("{}", market);
    }
    Ok(())
}

/// Print the tickers of a market as JSON.
pub(crate) async fn list_tickers(client: &AsyncClient, kind: &str) -> Result<()> {
    let tickers = client.available().tickers(kind).await?;
    output::print_json(&tickers)
}
