use std::env;
use std::time::Duration;

use crate::ethereum::price_client::PRICE_API_BASE;
use crate::services::MonitorIntervals;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Node provider (optional; without it every block fetch fails and is skipped)
    pub eth_rpc_url: Option<String>,

    // Price quotes
    pub price_api_base: String,
    pub price_currency: String,

    // Cadences
    pub block_poll_interval_secs: u64,
    pub price_poll_interval_secs: u64,
    pub clock_interval_ms: u64,
    pub startup_delay_ms: u64,
    pub chat_reply_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            eth_rpc_url: env::var("ETH_RPC_URL")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),

            price_api_base: env::var("PRICE_API_BASE").unwrap_or_else(|_| PRICE_API_BASE.into()),
            price_currency: env::var("PRICE_CURRENCY").unwrap_or_else(|_| "inr".into()),

            block_poll_interval_secs: parse_var("BLOCK_POLL_INTERVAL_SECS", 15)?,
            price_poll_interval_secs: parse_var("PRICE_POLL_INTERVAL_SECS", 30)?,
            clock_interval_ms: parse_var("CLOCK_INTERVAL_MS", 1_000)?,
            startup_delay_ms: parse_var("STARTUP_DELAY_MS", 3_000)?,
            chat_reply_delay_ms: parse_var("CHAT_REPLY_DELAY_MS", 500)?,
        })
    }

    pub fn intervals(&self) -> MonitorIntervals {
        MonitorIntervals {
            block_poll: Duration::from_secs(self.block_poll_interval_secs),
            price_poll: Duration::from_secs(self.price_poll_interval_secs),
            clock: Duration::from_millis(self.clock_interval_ms),
            startup_delay: Duration::from_millis(self.startup_delay_ms),
        }
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            eth_rpc_url: None,
            price_api_base: PRICE_API_BASE.into(),
            price_currency: "inr".into(),
            block_poll_interval_secs: 15,
            price_poll_interval_secs: 30,
            clock_interval_ms: 1_000,
            startup_delay_ms: 3_000,
            chat_reply_delay_ms: 500,
        }
    }
}

fn parse_var(name: &str, default: u64) -> anyhow::Result<u64> {
    match env::var(name) {
        Ok(raw) => {
            let value: u64 = raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("{name} must be a non-negative integer, got {raw:?}"))?;
            if value == 0 {
                anyhow::bail!("{name} must be greater than zero");
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}
