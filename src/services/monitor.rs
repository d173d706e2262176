use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::dashboard::DashboardStore;
use crate::services::block_poller::{run_block_poller, BlockSource};
use crate::services::clock::{run_clock, run_startup_delay};
use crate::services::price_poller::{run_price_poller, QuoteSource};

#[derive(Debug, Clone, Copy)]
pub struct MonitorIntervals {
    pub block_poll: Duration,
    pub price_poll: Duration,
    pub clock: Duration,
    pub startup_delay: Duration,
}

impl Default for MonitorIntervals {
    fn default() -> Self {
        Self {
            block_poll: Duration::from_secs(15),
            price_poll: Duration::from_secs(30),
            clock: Duration::from_secs(1),
            startup_delay: Duration::from_secs(3),
        }
    }
}

/// Owns every background timer task. Dropping the monitor leaves the tasks
/// running; call [`Monitor::shutdown`] to stop them.
pub struct Monitor {
    tasks: Vec<(&'static str, JoinHandle<()>)>,
}

impl Monitor {
    pub fn start<B, Q>(
        blocks: B,
        quotes: Q,
        store: Arc<DashboardStore>,
        intervals: MonitorIntervals,
    ) -> Self
    where
        B: BlockSource + 'static,
        Q: QuoteSource + 'static,
    {
        let tasks = vec![
            (
                "block_poller",
                tokio::spawn(run_block_poller(blocks, store.clone(), intervals.block_poll)),
            ),
            (
                "price_poller",
                tokio::spawn(run_price_poller(quotes, store.clone(), intervals.price_poll)),
            ),
            ("clock", tokio::spawn(run_clock(store.clone(), intervals.clock))),
            (
                "startup_delay",
                tokio::spawn(run_startup_delay(store, intervals.startup_delay)),
            ),
        ];

        tracing::info!(task_count = tasks.len(), "Monitor tasks spawned");
        Self { tasks }
    }

    /// Abort every task. An in-flight request is dropped with its task, so
    /// no late response can reach the store after this returns.
    pub async fn shutdown(self) {
        for (name, handle) in self.tasks {
            handle.abort();
            match handle.await {
                Ok(()) => tracing::debug!(task = name, "Monitor task finished"),
                Err(e) if e.is_cancelled() => tracing::debug!(task = name, "Monitor task cancelled"),
                Err(e) => tracing::error!(task = name, error = %e, "Monitor task panicked"),
            }
        }
        tracing::info!("Monitor stopped");
    }
}
