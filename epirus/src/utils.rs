use crate::error::{EpirusError, Result};

fn strip_quantity_prefix(s: &str) -> Result<&str> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| EpirusError::InvalidQuantity(format!("missing 0x prefix: {s}")))?;
    if digits.is_empty() {
        return Err(EpirusError::InvalidQuantity(format!("no digits: {s}")));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EpirusError::InvalidQuantity(format!("non-hex digits: {s}")));
    }
    Ok(digits)
}

/// Decode a `0x`-prefixed hex quantity into a `u64`.
pub fn parse_quantity_u64(s: &str) -> Result<u64> {
    let digits = strip_quantity_prefix(s)?;
    u64::from_str_radix(digits, 16).map_err(|e| EpirusError::InvalidQuantity(format!("{s}: {e}")))
}

/// Decode a `0x`-prefixed hex quantity into a `u128` (balances in wei).
pub fn parse_quantity_u128(s: &str) -> Result<u128> {
    let digits = strip_quantity_prefix(s)?;
    u128::from_str_radix(digits, 16)
        .map_err(|e| EpirusError::InvalidQuantity(format!("{s}: {e}")))
}

/// Encode a number as a JSON-RPC hex quantity (no leading zeros).
pub fn to_quantity(value: u64) -> String {
    format!("{value:#x}")
}
