use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

use crate::api::ws_types::{BlockUpdate, ClockTick, FeedView, WsMessage};
use crate::models::{ChartPoint, ClassifiedTransaction, PriceQuote};

use super::{ChartWindow, FeedWindow};

/// Everything the dashboard displays, in one serialisable value.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub loading: bool,
    pub latest_block: Option<u64>,
    pub time: String,
    pub price: PriceQuote,
    #[serde(flatten)]
    pub feed: FeedView,
    pub chart: Vec<ChartPoint>,
}

impl DashboardSnapshot {
    /// The events a client that connects now would have seen, so a late
    /// subscriber ends up in the same state as one connected from startup.
    pub fn into_replay(self) -> Vec<WsMessage> {
        let mut messages = Vec::with_capacity(6);
        if let Some(number) = self.latest_block {
            messages.push(WsMessage::BlockUpdate(BlockUpdate { number }));
        }
        if !self.time.is_empty() {
            messages.push(WsMessage::ClockTick(ClockTick { time: self.time }));
        }
        messages.push(WsMessage::PriceUpdate(self.price));
        messages.push(WsMessage::TransactionsUpdate(self.feed));
        messages.push(WsMessage::ChartUpdate(self.chart));
        if !self.loading {
            messages.push(WsMessage::Ready);
        }
        messages
    }
}

struct DashboardState {
    ready: bool,
    latest_block: Option<u64>,
    clock: String,
    price: PriceQuote,
    feed: FeedWindow,
    chart: ChartWindow,
}

/// Shared view state. All mutation goes through these methods, and each
/// mutation publishes a [`WsMessage`] so subscribers re-render from events
/// instead of polling.
pub struct DashboardStore {
    state: RwLock<DashboardState>,
    events: broadcast::Sender<WsMessage>,
}

impl DashboardStore {
    pub fn new(currency: &str, events: broadcast::Sender<WsMessage>) -> Self {
        Self {
            state: RwLock::new(DashboardState {
                ready: false,
                latest_block: None,
                clock: String::new(),
                price: PriceQuote::placeholder(currency),
                feed: FeedWindow::new(),
                chart: ChartWindow::new(),
            }),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WsMessage> {
        self.events.subscribe()
    }

    pub fn events(&self) -> &broadcast::Sender<WsMessage> {
        &self.events
    }

    pub async fn set_latest_block(&self, number: u64) {
        self.state.write().await.latest_block = Some(number);
        self.publish(WsMessage::BlockUpdate(BlockUpdate { number }));
    }

    /// Fan a classified batch out to both windows: the whole batch goes to
    /// the feed, only its first item becomes a chart point.
    pub async fn apply_batch(&self, batch: Vec<ClassifiedTransaction>) {
        if batch.is_empty() {
            return;
        }

        let point = ChartPoint::from(&batch[0]);
        let (feed, chart) = {
            let mut state = self.state.write().await;
            state.feed.insert_batch(batch);
            state.chart.append_point(point);
            (FeedView::from(&state.feed), state.chart.to_vec())
        };

        metrics::gauge!("feed_window_len").set(feed.transactions.len() as f64);
        self.publish(WsMessage::TransactionsUpdate(feed));
        self.publish(WsMessage::ChartUpdate(chart));
    }

    pub async fn set_price(&self, quote: PriceQuote) {
        self.state.write().await.price = quote.clone();
        self.publish(WsMessage::PriceUpdate(quote));
    }

    pub async fn tick_clock(&self, label: String) {
        self.state.write().await.clock = label.clone();
        self.publish(WsMessage::ClockTick(ClockTick { time: label }));
    }

    pub async fn mark_ready(&self) {
        self.state.write().await.ready = true;
        self.publish(WsMessage::Ready);
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read().await;
        DashboardSnapshot {
            loading: !state.ready,
            latest_block: state.latest_block,
            time: state.clock.clone(),
            price: state.price.clone(),
            feed: FeedView::from(&state.feed),
            chart: state.chart.to_vec(),
        }
    }

    pub async fn feed(&self) -> FeedView {
        FeedView::from(&self.state.read().await.feed)
    }

    pub async fn chart(&self) -> Vec<ChartPoint> {
        self.state.read().await.chart.to_vec()
    }

    pub async fn price(&self) -> PriceQuote {
        self.state.read().await.price.clone()
    }

    pub async fn latest_block(&self) -> Option<u64> {
        self.state.read().await.latest_block
    }

    fn publish(&self, msg: WsMessage) {
        // Err only means nobody is subscribed right now.
        let _ = self.events.send(msg);
    }
}
