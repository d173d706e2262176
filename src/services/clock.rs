use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::time::{interval, sleep, MissedTickBehavior};

use crate::dashboard::DashboardStore;

/// Local time rendered like a browser's `toLocaleTimeString()` in en-US,
/// e.g. `3:04:05 PM`.
pub fn time_label<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%-I:%M:%S %p").to_string()
}

pub async fn run_clock(store: Arc<DashboardStore>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        store.tick_clock(time_label(Local::now())).await;
    }
}

/// Flip the dashboard out of its loading state once `delay` has passed.
pub async fn run_startup_delay(store: Arc<DashboardStore>, delay: Duration) {
    sleep(delay).await;
    store.mark_ready().await;
    tracing::info!(delay_ms = delay.as_millis() as u64, "Dashboard ready");
}
