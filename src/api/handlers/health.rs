use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::AppState;

/// Liveness only: provider failures are expected and never make the
/// service unhealthy.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "rpc_configured": state.config.eth_rpc_url.is_some(),
        "latest_block": state.store.latest_block().await,
    }))
}
