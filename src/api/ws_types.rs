use serde::Serialize;
use uuid::Uuid;

use crate::dashboard::{FeedAggregates, FeedWindow};
use crate::models::{ChartPoint, ChatMessage, ClassifiedTransaction, PriceQuote};

/// Messages broadcast to all connected WebSocket clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum WsMessage {
    #[serde(rename = "block_update")]
    BlockUpdate(BlockUpdate),

    #[serde(rename = "transactions_update")]
    TransactionsUpdate(FeedView),

    #[serde(rename = "chart_update")]
    ChartUpdate(Vec<ChartPoint>),

    #[serde(rename = "price_update")]
    PriceUpdate(PriceQuote),

    #[serde(rename = "clock_tick")]
    ClockTick(ClockTick),

    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "chat_message")]
    ChatMessage(ChatEvent),
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockUpdate {
    pub number: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClockTick {
    pub time: String,
}

/// Feed table plus the summary cards derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct FeedView {
    pub transactions: Vec<ClassifiedTransaction>,
    pub aggregates: FeedAggregates,
}

impl From<&FeedWindow> for FeedView {
    fn from(feed: &FeedWindow) -> Self {
        Self {
            transactions: feed.to_vec(),
            aggregates: feed.aggregates(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatEvent {
    pub session_id: Uuid,
    pub message: ChatMessage,
}
