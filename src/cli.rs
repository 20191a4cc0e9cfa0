use clap::{Parser, Subcommand};
use epirus::{BlockParameter, Network};

/// epirus — query an Epirus-hosted Ethereum JSON-RPC gateway.
///
/// Reads EPIRUS_LOGIN_TOKEN and EPIRUS_APP_URL from the environment (or a
/// `.env` file); the token falls back to the `epirus login` config file.
#[derive(Parser, Debug)]
#[command(name = "epirus", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Target network (mainnet, rinkeby, kovan, goerli, ropsten, sepolia)
    #[arg(long, default_value = "mainnet", global = true)]
    pub network: Network,

    /// Output as JSON instead of plain text / TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved gateway URL
    Url,

    /// Print the node client version (web3_clientVersion)
    ClientVersion,

    /// Print the network id (net_version)
    NetVersion,

    /// Print the chain id (eth_chainId)
    ChainId,

    /// Print the latest block number (eth_blockNumber)
    BlockNumber,

    /// Print an account balance in wei (eth_getBalance)
    Balance(BalanceArgs),

    /// Print a block summary (eth_getBlockByNumber)
    Block(BlockArgs),

    /// List supported networks and their chain ids
    Networks,
}

/// Arguments for the `balance` subcommand.
#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Account address (0x-prefixed)
    pub address: String,

    /// Block tag or number (latest, earliest, pending, 1234, 0x4d2)
    #[arg(long, default_value = "latest")]
    pub block: BlockParameter,
}

/// Arguments for the `block` subcommand.
#[derive(Parser, Debug)]
pub struct BlockArgs {
    /// Block tag or number (latest, earliest, pending, 1234, 0x4d2)
    #[arg(default_value = "latest")]
    pub block: BlockParameter,

    /// Include full transaction objects instead of hashes
    #[arg(long)]
    pub full: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_with_network() {
        let cli = Cli::try_parse_from(["epirus", "--network", "rinkeby", "url"]).unwrap();
        assert_eq!(cli.network, Network::Rinkeby);
        assert!(matches!(cli.command, Command::Url));
    }

    #[test]
    fn test_network_defaults_to_mainnet() {
        let cli = Cli::try_parse_from(["epirus", "client-version"]).unwrap();
        assert_eq!(cli.network, Network::Mainnet);
        assert_eq!(cli.log_level, "info");
        assert!(!cli.json);
    }

    #[test]
    fn test_unknown_network_rejected() {
        assert!(Cli::try_parse_from(["epirus", "--network", "polygon", "url"]).is_err());
    }

    #[test]
    fn test_parse_block_args() {
        let cli = Cli::try_parse_from(["epirus", "block", "0x1b4", "--full", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Block(args) => {
                assert_eq!(args.block, BlockParameter::Number(436));
                assert!(args.full);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_balance_defaults_to_latest() {
        let cli = Cli::try_parse_from(["epirus", "balance", "0xabc"]).unwrap();
        match cli.command {
            Command::Balance(args) => {
                assert_eq!(args.address, "0xabc");
                assert_eq!(args.block, BlockParameter::Latest);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_networks_takes_global_flags() {
        let cli = Cli::try_parse_from(["epirus", "networks", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Networks));
    }
}
