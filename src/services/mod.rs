pub mod block_poller;
pub mod chat;
pub mod clock;
pub mod monitor;
pub mod price_poller;

pub use block_poller::{poll_block_once, BlockSource, PollError, PollOutcome};
pub use chat::{ChatError, ChatSessions};
pub use monitor::{Monitor, MonitorIntervals};
pub use price_poller::{poll_price_once, QuoteSource};
