pub mod chat;
pub mod dashboard;
pub mod feed;
pub mod health;
pub mod info;
pub mod metrics;
pub mod price;
pub mod ws;
