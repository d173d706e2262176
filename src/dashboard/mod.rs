pub mod chart;
pub mod feed;
pub mod store;

pub use chart::ChartWindow;
pub use feed::{FeedAggregates, FeedWindow};
pub use store::{DashboardSnapshot, DashboardStore};
