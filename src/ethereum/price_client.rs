use std::collections::HashMap;

use reqwest::Client;
use rust_decimal::Decimal;
use thiserror::Error;

pub const PRICE_API_BASE: &str = "https://api.coingecko.com/api/v3";

const COIN_ID: &str = "ethereum";

#[derive(Debug, Error)]
pub enum PriceClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote for {coin}/{currency} missing from response")]
    MissingQuote { coin: String, currency: String },
}

/// `{ "ethereum": { "inr": 234567.89 } }`
type SimplePriceResponse = HashMap<String, HashMap<String, Decimal>>;

/// Spot-price client for the CoinGecko `simple/price` endpoint.
#[derive(Debug, Clone)]
pub struct PriceClient {
    http: Client,
    base_url: String,
    currency: String,
}

impl PriceClient {
    pub fn new(http: Client, base_url: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            currency: currency.into().to_lowercase(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Fetch the current ETH price in the configured fiat currency.
    pub async fn eth_spot_price(&self) -> Result<Decimal, PriceClientError> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url, COIN_ID, self.currency
        );
        let resp = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?;

        let body: SimplePriceResponse = resp.json().await?;
        extract_quote(&body, &self.currency)
    }
}

fn extract_quote(body: &SimplePriceResponse, currency: &str) -> Result<Decimal, PriceClientError> {
    body.get(COIN_ID)
        .and_then(|quotes| quotes.get(currency))
        .copied()
        .ok_or_else(|| PriceClientError::MissingQuote {
            coin: COIN_ID.to_string(),
            currency: currency.to_string(),
        })
}
