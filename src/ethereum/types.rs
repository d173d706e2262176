use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: serde_json::Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response envelope. Exactly one of `result` / `error` is
/// expected, but providers are not always strict about it.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Block as returned by `eth_getBlockByNumber(n, true)`. Only the fields the
/// monitor reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcBlock {
    pub number: String,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub transactions: Vec<RpcTransaction>,
}

/// Full transaction object. Quantities stay as the provider's hex strings
/// until classification so a malformed field fails there, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    #[serde(default)]
    pub hash: Option<String>,
    pub from: String,
    /// `null` for contract deployments.
    #[serde(default)]
    pub to: Option<String>,
    pub value: String,
    /// Absent on some EIP-1559 payloads; falls back to `maxFeePerGas`.
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default)]
    pub max_fee_per_gas: Option<String>,
}

impl RpcTransaction {
    pub fn effective_gas_price(&self) -> Option<&str> {
        self.gas_price
            .as_deref()
            .or(self.max_fee_per_gas.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_block_with_full_transactions() {
        let raw = serde_json::json!({
            "number": "0x10d4f",
            "hash": "0xabc",
            "gasLimit": "0x1c9c380",
            "transactions": [
                {
                    "hash": "0x01",
                    "from": "0x1111111111111111111111111111111111111111",
                    "to": "0x2222222222222222222222222222222222222222",
                    "value": "0xde0b6b3a7640000",
                    "gasPrice": "0x4a817c800",
                    "nonce": "0x1"
                },
                {
                    "hash": "0x02",
                    "from": "0x3333333333333333333333333333333333333333",
                    "to": null,
                    "value": "0x0",
                    "maxFeePerGas": "0x2540be400"
                }
            ]
        });

        let block: RpcBlock = serde_json::from_value(raw).unwrap();
        assert_eq!(block.number, "0x10d4f");
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(block.transactions[0].effective_gas_price(), Some("0x4a817c800"));
        assert!(block.transactions[1].to.is_none());
        assert_eq!(block.transactions[1].effective_gas_price(), Some("0x2540be400"));
    }

    #[test]
    fn test_response_with_error_object() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#;
        let resp: JsonRpcResponse<String> = serde_json::from_str(raw).unwrap();
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, -32601);
    }
}
