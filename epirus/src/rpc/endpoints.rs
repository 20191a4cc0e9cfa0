use crate::error::Result;
use crate::rpc::EpirusHttpClient;
use crate::types::{Block, BlockParameter};
use crate::utils::{parse_quantity_u128, parse_quantity_u64};

const NO_PARAMS: [(); 0] = [];

impl EpirusHttpClient {
    // --- web3 / net ---

    /// web3_clientVersion - Node client version string.
    pub async fn web3_client_version(&self) -> Result<String> {
        self.request("web3_clientVersion", NO_PARAMS).await
    }

    /// net_version - Network id as a decimal string.
    pub async fn net_version(&self) -> Result<String> {
        self.request("net_version", NO_PARAMS).await
    }

    // --- eth ---

    /// eth_chainId - EIP-155 chain id.
    pub async fn eth_chain_id(&self) -> Result<u64> {
        let raw: String = self.request("eth_chainId", NO_PARAMS).await?;
        parse_quantity_u64(&raw)
    }

    /// eth_blockNumber - Height of the most recent block.
    pub async fn eth_block_number(&self) -> Result<u64> {
        let raw: String = self.request("eth_blockNumber", NO_PARAMS).await?;
        parse_quantity_u64(&raw)
    }

    /// eth_getBalance - Balance of `address` in wei.
    pub async fn eth_get_balance(&self, address: &str, block: BlockParameter) -> Result<u128> {
        let raw: String = self.request("eth_getBalance", (address, block)).await?;
        parse_quantity_u128(&raw)
    }

    /// eth_getBlockByNumber - `None` if the block does not exist yet.
    pub async fn eth_get_block_by_number(
        &self,
        block: BlockParameter,
        full_transactions: bool,
    ) -> Result<Option<Block>> {
        self.request("eth_getBlockByNumber", (block, full_transactions))
            .await
    }
}
