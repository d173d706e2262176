use std::sync::Arc;

use tokio::sync::broadcast;

use eth_monitor::api::router::create_router;
use eth_monitor::api::ws_types::WsMessage;
use eth_monitor::config::AppConfig;
use eth_monitor::dashboard::DashboardStore;
use eth_monitor::ethereum::{EthRpcClient, PriceClient};
use eth_monitor::services::{ChatSessions, Monitor};
use eth_monitor::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);
    let metrics_handle = eth_monitor::metrics::init_metrics()?;

    // --- Shared view state + broadcast channel for dashboard clients ---
    let (ws_tx, _) = broadcast::channel::<WsMessage>(256);
    let store = Arc::new(DashboardStore::new(&config.price_currency, ws_tx.clone()));
    let chat = ChatSessions::new(ws_tx, config.chat_reply_delay());

    // --- External clients ---
    let http = reqwest::Client::new();
    let rpc = EthRpcClient::new(http.clone(), config.eth_rpc_url.clone());
    if !rpc.is_configured() {
        tracing::warn!("ETH_RPC_URL is not set; block polls will fail until it is configured");
    }
    let prices = PriceClient::new(http, config.price_api_base.clone(), config.price_currency.clone());

    // --- Timers: block poll, price poll, clock, startup delay ---
    let monitor = Monitor::start(rpc, prices, store.clone(), config.intervals());

    let state = AppState {
        config,
        store,
        chat,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    monitor.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
