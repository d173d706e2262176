use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_auth;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes, no authentication
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Bearer token required when API_TOKEN is set
    let protected = Router::new()
        // Dashboard
        .route("/api/dashboard", get(handlers::dashboard::snapshot))
        .route("/api/transactions", get(handlers::feed::transactions))
        .route("/api/chart", get(handlers::feed::chart))
        .route("/api/price", get(handlers::price::current))
        // Static info page
        .route("/api/ethereum-info", get(handlers::info::ethereum_info))
        // Chat assistant
        .route("/api/chat/sessions", post(handlers::chat::create_session))
        .route("/api/chat/sessions/:id", get(handlers::chat::get_session))
        .route("/api/chat/sessions/:id/messages", post(handlers::chat::send_message))
        // WebSocket
        .route("/ws", get(handlers::ws::handler))
        .layer(middleware::from_fn(require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
