use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EpirusError;

/// Ethereum networks served by the Epirus RPC gateway.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Rinkeby,
    Kovan,
    Goerli,
    Ropsten,
    Sepolia,
}

impl Network {
    pub const ALL: [Network; 6] = [
        Network::Mainnet,
        Network::Rinkeby,
        Network::Kovan,
        Network::Goerli,
        Network::Ropsten,
        Network::Sepolia,
    ];

    /// Lower-case name used as the network segment of the service URL.
    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Rinkeby => "rinkeby",
            Network::Kovan => "kovan",
            Network::Goerli => "goerli",
            Network::Ropsten => "ropsten",
            Network::Sepolia => "sepolia",
        }
    }

    /// EIP-155 chain id.
    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Rinkeby => 4,
            Network::Kovan => 42,
            Network::Goerli => 5,
            Network::Ropsten => 3,
            Network::Sepolia => 11_155_111,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = EpirusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Network::ALL
            .into_iter()
            .find(|n| n.name() == lower)
            .ok_or_else(|| EpirusError::UnknownNetwork(s.to_string()))
    }
}
