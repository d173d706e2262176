use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Transactions moving more than this many ETH are flagged.
pub const SUSPICIOUS_VALUE_ETH: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Transactions bidding more than this many gwei per gas are flagged.
pub const SUSPICIOUS_GAS_PRICE_GWEI: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Label shown in place of a recipient when the transaction deploys a contract.
pub const CONTRACT_CREATION: &str = "Contract Creation";

// ---------------------------------------------------------------------------
// SuspicionReason
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspicionReason {
    Value,
    GasPrice,
    Both,
}

impl SuspicionReason {
    fn evaluate(value_eth: Decimal, gas_price_gwei: Decimal) -> Option<Self> {
        let by_value = value_eth > SUSPICIOUS_VALUE_ETH;
        let by_gas = gas_price_gwei > SUSPICIOUS_GAS_PRICE_GWEI;
        match (by_value, by_gas) {
            (true, true) => Some(SuspicionReason::Both),
            (true, false) => Some(SuspicionReason::Value),
            (false, true) => Some(SuspicionReason::GasPrice),
            (false, false) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuspicionReason::Value => "value",
            SuspicionReason::GasPrice => "gas_price",
            SuspicionReason::Both => "both",
        }
    }
}

impl fmt::Display for SuspicionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClassifiedTransaction
// ---------------------------------------------------------------------------

/// Fields are private so the `suspicious` flag can never disagree with the
/// value and gas price it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedTransaction {
    observed_at: String,
    from: String,
    to: String,
    value_eth: Decimal,
    gas_price_gwei: Decimal,
    suspicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<SuspicionReason>,
}

impl ClassifiedTransaction {
    pub fn new(
        observed_at: impl Into<String>,
        from: impl Into<String>,
        to: Option<String>,
        value_eth: Decimal,
        gas_price_gwei: Decimal,
    ) -> Self {
        let reason = SuspicionReason::evaluate(value_eth, gas_price_gwei);
        Self {
            observed_at: observed_at.into(),
            from: from.into(),
            to: to.unwrap_or_else(|| CONTRACT_CREATION.to_string()),
            value_eth,
            gas_price_gwei,
            suspicious: reason.is_some(),
            reason,
        }
    }

    pub fn observed_at(&self) -> &str {
        &self.observed_at
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn value_eth(&self) -> Decimal {
        self.value_eth
    }

    pub fn gas_price_gwei(&self) -> Decimal {
        self.gas_price_gwei
    }

    pub fn is_suspicious(&self) -> bool {
        self.suspicious
    }

    pub fn reason(&self) -> Option<SuspicionReason> {
        self.reason
    }
}

impl fmt::Display for ClassifiedTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tx: from={} to={} value={:.4} ETH gas={:.2} gwei {}",
            short_address(&self.from),
            short_address(&self.to),
            self.value_eth,
            self.gas_price_gwei,
            if self.suspicious { "SUSPICIOUS" } else { "normal" },
        )
    }
}

/// `0x1234...abcd` form used in logs and the feed table. Anything that is
/// not a plain ASCII hex-style address is returned unchanged.
pub fn short_address(addr: &str) -> String {
    if !addr.is_ascii() || !addr.starts_with("0x") || addr.len() <= 10 {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

// ---------------------------------------------------------------------------
// ChartPoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub observed_at: String,
    pub gas_price_gwei: Decimal,
    pub value_eth: Decimal,
}

impl From<&ClassifiedTransaction> for ChartPoint {
    fn from(tx: &ClassifiedTransaction) -> Self {
        Self {
            observed_at: tx.observed_at.clone(),
            gas_price_gwei: tx.gas_price_gwei,
            value_eth: tx.value_eth,
        }
    }
}
