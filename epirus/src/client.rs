use tracing::info;

use crate::config::EpirusConfig;
use crate::error::Result;
use crate::rpc::EpirusHttpClient;
use crate::service::ServiceUrlResolver;
use crate::types::{Block, BlockParameter, Network};

/// Client for one Epirus-hosted network.
#[derive(Debug, Clone)]
pub struct Epirus {
    network: Network,
    /// JSON-RPC client pointed at the resolved gateway URL.
    pub http_client: EpirusHttpClient,
}

impl Epirus {
    /// Resolve the gateway URL for `network` and build a client for it.
    pub fn new(config: &EpirusConfig, network: Network) -> Result<Self> {
        let url = ServiceUrlResolver::new(config.clone()).resolve(network)?;
        let http_client = EpirusHttpClient::new(&url)?;
        info!(%network, "epirus client ready");
        Ok(Self {
            network,
            http_client,
        })
    }

    /// Client for mainnet.
    pub fn build(config: &EpirusConfig) -> Result<Self> {
        Self::new(config, Network::Mainnet)
    }

    /// Read configuration from the environment and build a mainnet client.
    pub fn from_env() -> Result<Self> {
        Self::from_env_for(Network::Mainnet)
    }

    /// Read configuration from the environment and build a client for `network`.
    pub fn from_env_for(network: Network) -> Result<Self> {
        Self::new(&EpirusConfig::from_env()?, network)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The resolved gateway URL. Contains the login token.
    pub fn service_url(&self) -> &str {
        self.http_client.url()
    }

    // --- RPC delegates ---

    pub async fn client_version(&self) -> Result<String> {
        self.http_client.web3_client_version().await
    }

    pub async fn net_version(&self) -> Result<String> {
        self.http_client.net_version().await
    }

    pub async fn chain_id(&self) -> Result<u64> {
        self.http_client.eth_chain_id().await
    }

    pub async fn block_number(&self) -> Result<u64> {
        self.http_client.eth_block_number().await
    }

    /// Balance of `address` in wei.
    pub async fn get_balance(&self, address: &str, block: BlockParameter) -> Result<u128> {
        self.http_client.eth_get_balance(address, block).await
    }

    pub async fn get_block(
        &self,
        block: BlockParameter,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.http_client
            .eth_get_block_by_number(block, full_transactions)
            .await
    }
}
