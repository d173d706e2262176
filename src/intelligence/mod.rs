pub mod chatbot;
pub mod classifier;

pub use chatbot::{match_topic, respond, Topic, GREETING};
pub use classifier::{classify_batch, classify_transaction, ClassifyError, MAX_TRANSACTIONS_PER_BLOCK};
