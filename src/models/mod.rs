pub mod chat;
pub mod price;
pub mod transaction;

pub use chat::{ChatMessage, Role};
pub use price::PriceQuote;
pub use transaction::{ChartPoint, ClassifiedTransaction, SuspicionReason};
