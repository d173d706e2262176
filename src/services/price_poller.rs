use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::time::{interval, MissedTickBehavior};

use crate::dashboard::DashboardStore;
use crate::ethereum::{PriceClient, PriceClientError};
use crate::models::PriceQuote;

/// Spot-price provider. Implemented by [`PriceClient`]; tests supply fakes.
pub trait QuoteSource: Send + Sync {
    fn currency(&self) -> &str;

    fn spot_price(&self) -> impl Future<Output = Result<Decimal, PriceClientError>> + Send;
}

impl QuoteSource for PriceClient {
    fn currency(&self) -> &str {
        PriceClient::currency(self)
    }

    async fn spot_price(&self) -> Result<Decimal, PriceClientError> {
        self.eth_spot_price().await
    }
}

/// Fetch one quote and replace the stored one. On error the previous quote
/// (or the placeholder) stays in place.
pub async fn poll_price_once<Q: QuoteSource>(
    source: &Q,
    store: &DashboardStore,
) -> Result<PriceQuote, PriceClientError> {
    let value = source.spot_price().await?;
    let quote = PriceQuote::new(source.currency(), value, Utc::now());
    store.set_price(quote.clone()).await;
    Ok(quote)
}

pub async fn run_price_poller<Q: QuoteSource>(source: Q, store: Arc<DashboardStore>, period: Duration) {
    tracing::info!(
        interval_secs = period.as_secs(),
        currency = source.currency(),
        "Price poller started"
    );

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        metrics::counter!("price_polls_total").increment(1);

        match poll_price_once(&source, &store).await {
            Ok(quote) => {
                tracing::debug!(price = %quote.display, currency = %quote.currency, "ETH price updated");
            }
            Err(e) => {
                metrics::counter!("price_poll_failures_total").increment(1);
                tracing::warn!(error = %e, "Price poll failed, keeping previous quote");
            }
        }
    }
}
