use axum::extract::State;
use axum::Json;

use crate::models::PriceQuote;
use crate::AppState;

pub async fn current(State(state): State<AppState>) -> Json<PriceQuote> {
    Json(state.store.price().await)
}
