use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use super::types::{JsonRpcRequest, JsonRpcResponse, RpcBlock};
use super::units::{self, UnitError};

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("node provider URL is not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("block {0} not found")]
    BlockNotFound(u64),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl From<UnitError> for RpcError {
    fn from(e: UnitError) -> Self {
        RpcError::Unexpected(e.to_string())
    }
}

/// Minimal Ethereum JSON-RPC client over HTTP.
///
/// Built even when no endpoint is configured; every call then fails with
/// [`RpcError::NotConfigured`] and the poller treats it like any other
/// transient failure.
#[derive(Debug, Clone)]
pub struct EthRpcClient {
    http: Client,
    url: Option<String>,
    next_id: Arc<AtomicU64>,
}

impl EthRpcClient {
    pub fn new(http: Client, url: Option<String>) -> Self {
        Self {
            http,
            url,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// `eth_blockNumber`
    pub async fn block_number(&self) -> Result<u64, RpcError> {
        let raw: String = self.call("eth_blockNumber", json!([])).await?;
        Ok(units::parse_u64_quantity(&raw)?)
    }

    /// `eth_getBlockByNumber(n, true)`: block with full transaction objects.
    pub async fn block_with_transactions(&self, number: u64) -> Result<RpcBlock, RpcError> {
        let block: Option<RpcBlock> = self
            .call("eth_getBlockByNumber", json!([format!("{number:#x}"), true]))
            .await?;
        block.ok_or(RpcError::BlockNotFound(number))
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, RpcError> {
        let url = self.url.as_deref().ok_or(RpcError::NotConfigured)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(id, method, params);

        let resp = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: JsonRpcResponse<serde_json::Value> = resp.json().await?;

        if let Some(err) = body.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        // A `null` result is meaningful for some methods (unknown block), so
        // decode it into `T` rather than rejecting it here.
        let result = body.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result)
            .map_err(|e| RpcError::Unexpected(format!("{method}: {e}")))
    }
}
