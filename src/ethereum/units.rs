use std::str::FromStr;

use alloy::primitives::utils::format_units;
use alloy::primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid hex quantity: {0:?}")]
    InvalidQuantity(String),

    #[error("quantity out of decimal range: {0}")]
    OutOfRange(String),
}

/// Parse a JSON-RPC hex quantity (`0x1a`).
pub fn parse_quantity(raw: &str) -> Result<U256, UnitError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .ok_or_else(|| UnitError::InvalidQuantity(raw.to_string()))?;
    if digits.is_empty() {
        return Err(UnitError::InvalidQuantity(raw.to_string()));
    }
    U256::from_str_radix(digits, 16).map_err(|_| UnitError::InvalidQuantity(raw.to_string()))
}

/// Parse a hex quantity that must fit in a u64 (block numbers).
pub fn parse_u64_quantity(raw: &str) -> Result<u64, UnitError> {
    let value = parse_quantity(raw)?;
    u64::try_from(value).map_err(|_| UnitError::OutOfRange(raw.to_string()))
}

pub fn wei_to_eth(wei: U256) -> Result<Decimal, UnitError> {
    convert(wei, "ether")
}

pub fn wei_to_gwei(wei: U256) -> Result<Decimal, UnitError> {
    convert(wei, "gwei")
}

/// Exact decimal conversion: alloy renders the scaled string, which is then
/// parsed as a `Decimal` without going through floating point.
fn convert(wei: U256, unit: &str) -> Result<Decimal, UnitError> {
    let text = format_units(wei, unit).map_err(|_| UnitError::OutOfRange(wei.to_string()))?;
    Decimal::from_str(&text)
        .map(|d| d.normalize())
        .map_err(|_| UnitError::OutOfRange(text))
}
