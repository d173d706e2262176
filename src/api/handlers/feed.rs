use axum::extract::State;
use axum::Json;

use crate::api::ws_types::FeedView;
use crate::models::ChartPoint;
use crate::AppState;

/// Recent transactions, newest first, with volume and status counts.
pub async fn transactions(State(state): State<AppState>) -> Json<FeedView> {
    Json(state.store.feed().await)
}

/// Chart series, oldest first.
pub async fn chart(State(state): State<AppState>) -> Json<Vec<ChartPoint>> {
    Json(state.store.chart().await)
}
