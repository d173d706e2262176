use std::sync::Mutex;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

static HANDLE: Mutex<Option<PrometheusHandle>> = Mutex::new(None);

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// The recorder is process-global, so later calls return the same handle.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let mut slot = HANDLE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("block_polls_total").absolute(0);
    counter!("block_poll_failures_total").absolute(0);
    counter!("price_polls_total").absolute(0);
    counter!("price_poll_failures_total").absolute(0);
    counter!("transactions_classified_total").absolute(0);
    counter!("suspicious_transactions_total").absolute(0);
    counter!("chat_messages_total").absolute(0);
    counter!("chat_sessions_evicted_total").absolute(0);

    gauge!("latest_block").set(0.0);
    gauge!("feed_window_len").set(0.0);

    *slot = Some(handle.clone());
    Ok(handle)
}
