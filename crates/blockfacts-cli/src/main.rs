/*
[INPUT]:  CLI arguments, optional YAML configuration file, Ctrl-C
[OUTPUT]: Pretty-printed JSON responses and stream frames on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or stream shutdown handling
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfacts_adapter::{BlockfactsWebSocket, Channel, SubscriptionMessage};
use blockfacts_cli::{CliConfig, Command, execute};

#[derive(Parser, Debug)]
#[command(name = "blockfacts", version, about = "BlockFacts market data client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long, env = "BLOCKFACTS_KEY", hide_env_values = true)]
    key: Option<String>,
    #[arg(long, env = "BLOCKFACTS_SECRET", hide_env_values = true)]
    secret: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Load and validate configuration, then exit
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::defaults(),
    }
    .with_overrides(args.key.clone(), args.secret.clone());
    info!(base_url = %config.base_url, stream_url = %config.stream_url, "configuration loaded");

    if args.dry_run {
        config.rest_client()?;
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let command = args
        .command
        .ok_or_else(|| anyhow!("no subcommand given, see --help"))?;

    match command {
        Command::Stream { channel, pairs } => run_stream(&config, channel, pairs).await,
        command => {
            let client = config.rest_client()?;
            let value = execute(&command, &client).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

async fn run_stream(config: &CliConfig, channel: String, pairs: Vec<String>) -> Result<()> {
    let ws = BlockfactsWebSocket::with_url(config.stream_url.clone());
    let message = SubscriptionMessage::subscribe(vec![Channel::new(channel, pairs)]);

    ws.subscribe(message, |frame| println!("{frame}"))
        .await
        .context("subscribe")?;
    info!("streaming; press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("install Ctrl-C handler")?;
    info!("received SIGINT");

    ws.close().await;
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
