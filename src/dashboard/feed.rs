use std::collections::VecDeque;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::ClassifiedTransaction;

pub const FEED_CAPACITY: usize = 10;

/// Most recent classified transactions, newest first.
///
/// No deduplication by hash: a transaction observed on two polls appears twice.
#[derive(Debug, Clone)]
pub struct FeedWindow {
    items: VecDeque<ClassifiedTransaction>,
    capacity: usize,
}

impl Default for FeedWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedWindow {
    pub fn new() -> Self {
        Self::with_capacity(FEED_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Result is `batch ++ previous`, truncated to capacity. Order within the
    /// batch and within the retained tail is preserved.
    pub fn insert_batch(&mut self, batch: Vec<ClassifiedTransaction>) {
        if batch.is_empty() {
            return;
        }
        for tx in batch.into_iter().rev() {
            self.items.push_front(tx);
        }
        self.items.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedTransaction> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<ClassifiedTransaction> {
        self.items.iter().cloned().collect()
    }

    pub fn aggregates(&self) -> FeedAggregates {
        let volume: Decimal = self.items.iter().map(|tx| tx.value_eth()).sum();
        let suspicious = self.items.iter().filter(|tx| tx.is_suspicious()).count();
        FeedAggregates {
            volume_eth: volume.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            suspicious,
            normal: self.items.len() - suspicious,
        }
    }
}

/// Summary cards above the feed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedAggregates {
    #[serde(with = "two_places")]
    pub volume_eth: Decimal,
    pub suspicious: usize,
    pub normal: usize,
}

/// Volume always renders with exactly two fraction digits (`3.50`, `0.00`).
mod two_places {
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:.2}"))
    }
}
