use std::io::Write;

use epirus::{Block, Network};
use serde::Serialize;

use crate::error::CliError;

/// Flattened block view used for both TSV and JSON output.
#[derive(Debug, Serialize)]
struct BlockSummary<'a> {
    number: Option<u64>,
    hash: Option<&'a str>,
    parent_hash: &'a str,
    timestamp: String,
    miner: Option<&'a str>,
    gas_used: u64,
    gas_limit: u64,
    transactions: usize,
}

impl<'a> BlockSummary<'a> {
    fn from_block(block: &'a Block) -> Result<Self, CliError> {
        Ok(Self {
            number: block.number_u64()?,
            hash: block.hash.as_deref(),
            parent_hash: &block.parent_hash,
            timestamp: block.timestamp_utc()?.to_rfc3339(),
            miner: block.miner.as_deref(),
            gas_used: block.gas_used_u64()?,
            gas_limit: block.gas_limit_u64()?,
            transactions: block.transactions.len(),
        })
    }
}

/// Write a block as one TSV line or one JSON object.
///
/// TSV columns: number, hash, parent_hash, timestamp, miner, gas_used,
/// gas_limit, tx_count. Missing values (pending blocks) print as `-`.
pub fn write_block<W: Write>(block: &Block, json_mode: bool, writer: &mut W) -> Result<(), CliError> {
    let summary = BlockSummary::from_block(block)?;

    if json_mode {
        serde_json::to_writer(&mut *writer, &summary)?;
        writeln!(writer)?;
    } else {
        let number = summary
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            number,
            summary.hash.unwrap_or("-"),
            summary.parent_hash,
            summary.timestamp,
            summary.miner.unwrap_or("-"),
            summary.gas_used,
            summary.gas_limit,
            summary.transactions,
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a single named scalar value.
pub fn write_value<W: Write, V: Serialize + std::fmt::Display>(
    name: &str,
    value: V,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        let mut obj = serde_json::Map::new();
        obj.insert(name.to_string(), serde_json::to_value(&value)?);
        serde_json::to_writer(&mut *writer, &obj)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the supported networks, one per line.
pub fn write_networks<W: Write>(json_mode: bool, writer: &mut W) -> Result<(), CliError> {
    if json_mode {
        let list: Vec<_> = Network::ALL
            .iter()
            .map(|n| serde_json::json!({ "network": n.name(), "chain_id": n.chain_id() }))
            .collect();
        serde_json::to_writer(&mut *writer, &list)?;
        writeln!(writer)?;
    } else {
        for n in Network::ALL {
            writeln!(writer, "{}\t{}", n.name(), n.chain_id())?;
        }
    }
    writer.flush()?;
    Ok(())
}
