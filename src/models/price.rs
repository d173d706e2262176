use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Shown until the first quote arrives.
pub const PRICE_PLACEHOLDER: &str = "0.00";

/// Latest ETH spot price. Replaced wholesale on each successful poll and left
/// untouched when a poll fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub currency: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PriceQuote {
    pub fn placeholder(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            display: PRICE_PLACEHOLDER.to_string(),
            value: None,
            updated_at: None,
        }
    }

    pub fn new(currency: &str, value: Decimal, updated_at: DateTime<Utc>) -> Self {
        Self {
            currency: currency.to_string(),
            display: format_en_in(value),
            value: Some(value),
            updated_at: Some(updated_at),
        }
    }
}

/// Format a number the way the `en-IN` locale does: at most three fraction
/// digits, no trailing zeros, and lakh/crore digit grouping
/// (`12345678.9` -> `1,23,45,678.9`).
pub fn format_en_in(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_indian(int_part);
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
