mod cli;
mod error;
mod output;

use std::io;

use clap::Parser;
use cli::{Cli, Command};
use epirus::{Epirus, EpirusConfig, Network};
use error::CliError;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    let network = cli.network;

    match cli.command {
        Command::Networks => {
            output::write_networks(cli.json, &mut stdout)?;
        }

        Command::Url => {
            let epirus = connect(network)?;
            output::write_value("url", epirus.service_url(), cli.json, &mut stdout)?;
        }

        Command::ClientVersion => {
            let version = connect(network)?.client_version().await?;
            output::write_value("client_version", version, cli.json, &mut stdout)?;
        }

        Command::NetVersion => {
            let version = connect(network)?.net_version().await?;
            output::write_value("net_version", version, cli.json, &mut stdout)?;
        }

        Command::ChainId => {
            let chain_id = connect(network)?.chain_id().await?;
            let expected = network.chain_id();
            if chain_id != expected {
                warn!(%network, expected, chain_id, "gateway chain id differs from network");
            }
            output::write_value("chain_id", chain_id, cli.json, &mut stdout)?;
        }

        Command::BlockNumber => {
            let number = connect(network)?.block_number().await?;
            output::write_value("block_number", number, cli.json, &mut stdout)?;
        }

        Command::Balance(args) => {
            info!(address = %args.address, block = %args.block, "fetching balance");
            let wei = connect(network)?
                .get_balance(&args.address, args.block)
                .await?;
            // Decimal string: balances routinely exceed u64.
            output::write_value("balance_wei", wei.to_string(), cli.json, &mut stdout)?;
        }

        Command::Block(args) => {
            let block = connect(network)?
                .get_block(args.block, args.full)
                .await?
                .ok_or_else(|| CliError::BlockNotFound(args.block.to_string()))?;
            output::write_block(&block, cli.json, &mut stdout)?;
        }
    }

    Ok(())
}

/// Load `.env` and the environment, then build a client for `network`.
fn connect(network: Network) -> Result<Epirus, CliError> {
    let _ = dotenvy::dotenv(); // load .env if present
    let config = EpirusConfig::from_env()?;
    Ok(Epirus::new(&config, network)?)
}
