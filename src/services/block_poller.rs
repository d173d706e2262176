use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use thiserror::Error;
use tokio::time::{interval, MissedTickBehavior};

use crate::dashboard::DashboardStore;
use crate::ethereum::{EthRpcClient, RpcBlock, RpcError};
use crate::intelligence::{classify_batch, ClassifyError};
use crate::services::clock::time_label;

/// Where blocks come from. Implemented by [`EthRpcClient`]; tests supply fakes.
pub trait BlockSource: Send + Sync {
    fn fetch_block_number(&self) -> impl Future<Output = Result<u64, RpcError>> + Send;

    /// Block `number` with full transaction bodies.
    fn fetch_block(&self, number: u64) -> impl Future<Output = Result<RpcBlock, RpcError>> + Send;
}

impl BlockSource for EthRpcClient {
    async fn fetch_block_number(&self) -> Result<u64, RpcError> {
        self.block_number().await
    }

    async fn fetch_block(&self, number: u64) -> Result<RpcBlock, RpcError> {
        self.block_with_transactions(number).await
    }
}

#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// What one successful poll cycle delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOutcome {
    pub block: u64,
    pub classified: usize,
    pub suspicious: usize,
}

/// Run one poll cycle: latest block number, then that block with full
/// transactions, then classify the head of the block and hand it to the store.
///
/// Any error abandons the cycle before the windows are touched. The latest
/// block number is recorded as soon as it is known.
pub async fn poll_block_once<S: BlockSource>(
    source: &S,
    store: &DashboardStore,
) -> Result<PollOutcome, PollError> {
    let number = source.fetch_block_number().await?;
    store.set_latest_block(number).await;
    metrics::gauge!("latest_block").set(number as f64);

    let block = source.fetch_block(number).await?;

    let observed_at = time_label(Local::now());
    let batch = classify_batch(&block.transactions, &observed_at)?;

    let outcome = PollOutcome {
        block: number,
        classified: batch.len(),
        suspicious: batch.iter().filter(|tx| tx.is_suspicious()).count(),
    };

    for tx in batch.iter().filter(|tx| tx.is_suspicious()) {
        tracing::info!(block = number, reason = ?tx.reason(), "{tx}");
    }

    store.apply_batch(batch).await;

    metrics::counter!("transactions_classified_total").increment(outcome.classified as u64);
    metrics::counter!("suspicious_transactions_total").increment(outcome.suspicious as u64);

    Ok(outcome)
}

/// Poll the node provider every `period`, starting immediately.
///
/// Each cycle is awaited before the next tick is taken, so cycles never
/// overlap; a slow cycle pushes the schedule back instead.
pub async fn run_block_poller<S: BlockSource>(source: S, store: Arc<DashboardStore>, period: Duration) {
    tracing::info!(interval_secs = period.as_secs(), "Block poller started");

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        metrics::counter!("block_polls_total").increment(1);

        match poll_block_once(&source, &store).await {
            Ok(outcome) => {
                tracing::debug!(
                    block = outcome.block,
                    tx_count = outcome.classified,
                    suspicious = outcome.suspicious,
                    "Block poll cycle complete"
                );
            }
            Err(e) => {
                metrics::counter!("block_poll_failures_total").increment(1);
                tracing::warn!(error = %e, "Block poll failed, skipping cycle");
            }
        }
    }
}
