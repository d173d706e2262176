use axum::extract::State;
use axum::Json;

use crate::dashboard::DashboardSnapshot;
use crate::AppState;

pub async fn snapshot(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.store.snapshot().await)
}
