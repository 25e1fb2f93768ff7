/*
[INPUT]:  Parsed subcommand and a configured REST client
[OUTPUT]: Raw JSON response for the selected endpoint
[POS]:    Command layer - maps CLI subcommands onto endpoint groups
[UPDATE]: When adding subcommands or endpoint methods
*/

use anyhow::{Context, Result};
use blockfacts_adapter::{MoversSort, RestClient};
use clap::{Subcommand, ValueEnum};
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List all assets, or one asset by ticker
    Assets {
        #[arg(long)]
        ticker: Option<String>,
    },
    /// List all exchanges, or one exchange by name
    Exchanges {
        #[arg(long)]
        name: Option<String>,
    },
    /// Pairs currently being normalized
    Pairs,
    /// Current normalized price, or current trades when exchanges are given
    Price {
        #[arg(long, value_delimiter = ',', required = true)]
        assets: Vec<String>,
        #[arg(long, value_delimiter = ',', required = true)]
        denominators: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        exchanges: Vec<String>,
    },
    /// Historical normalized price, or exchange trades when exchanges are given
    Historical {
        #[arg(long)]
        asset: String,
        #[arg(long)]
        denominator: String,
        /// DD.MM.YYYY
        #[arg(long)]
        date: String,
        /// HH:MM:SS UTC
        #[arg(long)]
        time: String,
        #[arg(long)]
        interval: u32,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long, value_delimiter = ',')]
        exchanges: Vec<String>,
    },
    /// Normalized end-of-day data
    Eod {
        #[arg(long)]
        asset: String,
        #[arg(long)]
        denominator: String,
        #[arg(long)]
        length: Option<u32>,
    },
    /// Period movers across normalized data, or on one exchange
    Movers {
        #[arg(long)]
        denominator: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        interval: String,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        #[arg(long)]
        exchange: Option<String>,
    },
    /// Subscribe to the stream and print frames until Ctrl-C
    Stream {
        #[arg(long, default_value = "BLOCKFACTS")]
        channel: String,
        #[arg(long, value_delimiter = ',', required = true)]
        pairs: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortArg {
    Losers,
    Winners,
}

impl From<SortArg> for MoversSort {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Losers => MoversSort::LosersFirst,
            SortArg::Winners => MoversSort::WinnersFirst,
        }
    }
}

/// Run a REST subcommand. `Stream` is handled by the binary.
pub async fn execute(command: &Command, client: &RestClient) -> Result<Value> {
    let value = match command {
        Command::Assets { ticker: Some(ticker) } => {
            client.assets().get_specific_asset(ticker).await
        }
        Command::Assets { ticker: None } => client.assets().list_all_assets().await,
        Command::Exchanges { name: Some(name) } => {
            client.exchanges().get_specific_exchange_data(name).await
        }
        Command::Exchanges { name: None } => client.exchanges().list_all_exchanges().await,
        Command::Pairs => client.blockfacts().get_normalization_pairs().await,
        Command::Price {
            assets,
            denominators,
            exchanges,
        } => {
            if exchanges.is_empty() {
                client.blockfacts().get_current_data(assets, denominators).await
            } else {
                client
                    .exchanges()
                    .get_current_trade_data(assets, denominators, exchanges)
                    .await
            }
        }
        Command::Historical {
            asset,
            denominator,
            date,
            time,
            interval,
            page,
            exchanges,
        } => {
            if exchanges.is_empty() {
                client
                    .blockfacts()
                    .get_historical_data(asset, denominator, date, time, *interval, *page)
                    .await
            } else {
                client
                    .exchanges()
                    .get_historical_trade_data(
                        asset,
                        denominator,
                        exchanges,
                        date,
                        time,
                        *interval,
                        *page,
                    )
                    .await
            }
        }
        Command::Eod {
            asset,
            denominator,
            length,
        } => {
            client
                .blockfacts()
                .get_end_of_day_data(asset, denominator, *length)
                .await
        }
        Command::Movers {
            denominator,
            date,
            interval,
            sort,
            exchange,
        } => {
            let sort = sort.map(MoversSort::from);
            match exchange {
                Some(exchange) => {
                    client
                        .exchanges()
                        .get_period_movers(exchange, denominator, date, interval, sort)
                        .await
                }
                None => {
                    client
                        .blockfacts()
                        .get_period_movers(denominator, date, interval, sort)
                        .await
                }
            }
        }
        Command::Stream { .. } => anyhow::bail!("stream is not a REST command"),
    };

    value.context("blockfacts request failed")
}
