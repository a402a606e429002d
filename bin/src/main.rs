//! FinBrain CLI binary.
//!
//! Provides a command-line interface to the FinBrain API.

mod cmd;
mod data;
mod output;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use finbrain_types::PredictionType;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finbrain")]
#[command(about = "Query the FinBrain financial data API", long_about = None)]
#[command(version)]
struct Cli {
    /// API key (defaults to FINBRAIN_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Retries for transient failures
    #[arg(long, global = true)]
    retries: Option<u32>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available markets
    Markets,

    /// List the tickers of a market
    Tickers {
        /// Market type, e.g. sp500
        kind: String,
    },

    /// Show price predictions
    Predictions {
        /// Predict a single ticker or a whole market
        #[arg(value_enum)]
        scope: Scope,

        /// Ticker symbol or market name
        id: String,

        /// Horizon (daily, monthly)
        #[arg(short = 't', long = "type", default_value = "daily")]
        prediction_type: PredictionType,
    },

    /// Show news sentiment scores
    Sentiments {
        #[command(flatten)]
        range: RangeArgs,

        /// Past number of days (ignored with --from/--to)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Show insider transactions
    Insider {
        #[command(flatten)]
        ticker: TickerArgs,
    },

    /// Show trades by US House members
    HouseTrades {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show analyst ratings
    AnalystRatings {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show app-store ratings
    AppRatings {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show LinkedIn employee and follower counts
    Linkedin {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Show options put/call data
    PutCall {
        #[command(flatten)]
        range: RangeArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    Ticker,
    Market,
}

#[derive(Args)]
struct TickerArgs {
    /// Market, e.g. sp500
    market: String,

    /// Ticker symbol
    symbol: String,

    /// Print a table instead of JSON
    #[arg(long)]
    table: bool,
}

#[derive(Args)]
struct RangeArgs {
    #[command(flatten)]
    ticker: TickerArgs,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_parser = data::parse_date)]
    from: Option<NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long, value_parser = data::parse_date)]
    to: Option<NaiveDate>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = data::connect(&data::ConnectOptions {
        api_key: cli.api_key,
        timeout: cli.timeout,
        retries: cli.retries,
        base_url: cli.base_url,
    })?;

    match cli.command {
        Commands::Markets => cmd::available::list_markets(&client).await?,
        Commands::Tickers { kind } => cmd::available::list_tickers(&client, &kind).await?,
        Commands::Predictions {
            scope,
            id,
            prediction_type,
        } => match scope {
            Scope::Ticker => {
                cmd::predictions::show_ticker(&client, &id, prediction_type).await?;
            }
            Scope::Market => {
                cmd::predictions::show_market(&client, &id, prediction_type).await?;
            }
        },
        Commands::Sentiments { range, days } => {
            let query = cmd::ticker::sentiment_query(range.from, range.to, days, range.ticker.table);
            cmd::ticker::show_sentiments(&client, &range.ticker.market, &range.ticker.symbol, &query)
                .await?;
        }
        Commands::Insider { ticker } => {
            cmd::ticker::show_insider_transactions(
                &client,
                &ticker.market,
                &ticker.symbol,
                ticker.table,
            )
            .await?;
        }
        Commands::HouseTrades { range } => {
            show_dated(&client, cmd::ticker::Dataset::HouseTrades, range).await?;
        }
        Commands::AnalystRatings { range } => {
            show_dated(&client, cmd::ticker::Dataset::AnalystRatings, range).await?;
        }
        Commands::AppRatings { range } => {
            show_dated(&client, cmd::ticker::Dataset::AppRatings, range).await?;
        }
        Commands::Linkedin { range } => {
            show_dated(&client, cmd::ticker::Dataset::LinkedIn, range).await?;
        }
        Commands::PutCall { range } => {
            show_dated(&client, cmd::ticker::Dataset::PutCall, range).await?;
        }
    }

    Ok(())
}

async fn show_dated(
    client: &finbrain_client::AsyncClient,
    dataset: cmd::ticker::Dataset,
    range: RangeArgs,
) -> Result<()> {
    let query = cmd::ticker::date_query(range.from, range.to, range.ticker.table);
    cmd::ticker::show_dataset(
        client,
        dataset,
        &range.ticker.market,
        &range.ticker.symbol,
        &query,
    )
    .await
}
