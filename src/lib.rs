pub mod api;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod ethereum;
pub mod intelligence;
pub mod metrics;
pub mod models;
pub mod services;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::dashboard::DashboardStore;
use crate::services::ChatSessions;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<DashboardStore>,
    pub chat: ChatSessions,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
