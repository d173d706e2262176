use rust_decimal::Decimal;
use thiserror::Error;

use crate::ethereum::units::{self, UnitError};
use crate::ethereum::RpcTransaction;
use crate::models::ClassifiedTransaction;

/// Only the head of each block is shown on the dashboard.
pub const MAX_TRANSACTIONS_PER_BLOCK: usize = 5;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("transaction {tx}: invalid {field}: {source}")]
    InvalidField {
        tx: String,
        field: &'static str,
        #[source]
        source: UnitError,
    },

    #[error("transaction {0}: missing gas price")]
    MissingGasPrice(String),
}

/// Convert a raw RPC transaction into a display record.
///
/// Value is converted wei -> ETH and gas price wei -> gwei, both exactly.
/// A missing recipient becomes the contract-creation label.
pub fn classify_transaction(
    tx: &RpcTransaction,
    observed_at: &str,
) -> Result<ClassifiedTransaction, ClassifyError> {
    let id = tx.hash.clone().unwrap_or_else(|| tx.from.clone());

    let value_eth = convert(&tx.value, "value", &id, units::wei_to_eth)?;
    let raw_gas = tx
        .effective_gas_price()
        .ok_or_else(|| ClassifyError::MissingGasPrice(id.clone()))?;
    let gas_price_gwei = convert(raw_gas, "gasPrice", &id, units::wei_to_gwei)?;

    Ok(ClassifiedTransaction::new(
        observed_at,
        tx.from.clone(),
        tx.to.clone(),
        value_eth,
        gas_price_gwei,
    ))
}

/// Classify the first [`MAX_TRANSACTIONS_PER_BLOCK`] transactions of a block.
///
/// All-or-nothing: one malformed transaction fails the whole batch so a
/// partially classified block never reaches the windows.
pub fn classify_batch(
    txs: &[RpcTransaction],
    observed_at: &str,
) -> Result<Vec<ClassifiedTransaction>, ClassifyError> {
    txs.iter()
        .take(MAX_TRANSACTIONS_PER_BLOCK)
        .map(|tx| classify_transaction(tx, observed_at))
        .collect()
}

fn convert(
    raw: &str,
    field: &'static str,
    tx: &str,
    f: fn(alloy::primitives::U256) -> Result<Decimal, UnitError>,
) -> Result<Decimal, ClassifyError> {
    units::parse_quantity(raw)
        .and_then(f)
        .map_err(|source| ClassifyError::InvalidField {
            tx: tx.to_string(),
            field,
            source,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
