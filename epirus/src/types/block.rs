use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EpirusError, Result};
use crate::utils::{parse_quantity_u64, to_quantity};

/// Block selector accepted by `eth_getBlockByNumber`, `eth_getBalance` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockParameter {
    #[default]
    Latest,
    Earliest,
    Pending,
    Number(u64),
}

impl std::fmt::Display for BlockParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockParameter::Latest => write!(f, "latest"),
            BlockParameter::Earliest => write!(f, "earliest"),
            BlockParameter::Pending => write!(f, "pending"),
            BlockParameter::Number(n) => f.write_str(&to_quantity(*n)),
        }
    }
}

impl Serialize for BlockParameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for BlockParameter {
    type Err = EpirusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(BlockParameter::Latest),
            "earliest" => Ok(BlockParameter::Earliest),
            "pending" => Ok(BlockParameter::Pending),
            other if other.starts_with("0x") => parse_quantity_u64(other)
                .map(BlockParameter::Number)
                .map_err(|_| EpirusError::InvalidBlockParameter(s.to_string())),
            other => other
                .parse::<u64>()
                .map(BlockParameter::Number)
                .map_err(|_| EpirusError::InvalidBlockParameter(s.to_string())),
        }
    }
}

/// Block header plus transactions as returned by `eth_getBlockByNumber`.
///
/// Quantities are kept in their hex wire form; use the accessor methods to
/// decode them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// `None` for pending blocks.
    pub number: Option<String>,
    /// `None` for pending blocks.
    pub hash: Option<String>,
    pub parent_hash: String,
    pub timestamp: String,
    #[serde(default)]
    pub miner: Option<String>,
    pub gas_used: String,
    pub gas_limit: String,
    /// Transaction hashes, or full transaction objects when requested.
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
}

impl Block {
    pub fn number_u64(&self) -> Result<Option<u64>> {
        self.number.as_deref().map(parse_quantity_u64).transpose()
    }

    pub fn gas_used_u64(&self) -> Result<u64> {
        parse_quantity_u64(&self.gas_used)
    }

    pub fn gas_limit_u64(&self) -> Result<u64> {
        parse_quantity_u64(&self.gas_limit)
    }

    pub fn timestamp_utc(&self) -> Result<DateTime<Utc>> {
        let secs = parse_quantity_u64(&self.timestamp)?;
        i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
            .ok_or_else(|| EpirusError::InvalidQuantity(format!("timestamp out of range: {secs}")))
    }
}
