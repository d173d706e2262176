//! HTTP-level tests for the node-provider and price clients against a mock
//! server.

use httpmock::prelude::*;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::json;

use eth_monitor::ethereum::price_client::{PriceClient, PriceClientError};
use eth_monitor::ethereum::rpc_client::{EthRpcClient, RpcError};

fn rpc_client(server: &MockServer) -> EthRpcClient {
    EthRpcClient::new(Client::new(), Some(server.url("/")))
}

#[tokio::test]
async fn test_block_number_is_parsed_from_hex() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .json_body_partial(r#"{"jsonrpc":"2.0","method":"eth_blockNumber","params":[]}"#);
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x12a05f2"}));
        })
        .await;

    let number = rpc_client(&server).block_number().await.unwrap();

    mock.assert_async().await;
    assert_eq!(number, 19_531_250);
}

#[tokio::test]
async fn test_block_request_asks_for_full_transactions() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .json_body_partial(r#"{"method":"eth_getBlockByNumber","params":["0x10",true]}"#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "number": "0x10",
                    "hash": "0xabc",
                    "transactions": [{
                        "hash": "0xt1",
                        "from": "0x1111111111111111111111111111111111111111",
                        "to": null,
                        "value": "0xde0b6b3a7640000",
                        "gasPrice": "0x4a817c800"
                    }]
                }
            }));
        })
        .await;

    let block = rpc_client(&server).block_with_transactions(16).await.unwrap();

    mock.assert_async().await;
    assert_eq!(block.number, "0x10");
    assert_eq!(block.transactions.len(), 1);
    assert_eq!(block.transactions[0].to, None);
    assert_eq!(block.transactions[0].effective_gas_price(), Some("0x4a817c800"));
}

#[tokio::test]
async fn test_json_rpc_error_object_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32005, "message": "daily request limit exceeded"}
            }));
        })
        .await;

    let err = rpc_client(&server).block_number().await.unwrap_err();

    match err {
        RpcError::Rpc { code, message } => {
            assert_eq!(code, -32005);
            assert_eq!(message, "daily request limit exceeded");
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_null_block_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        })
        .await;

    let err = rpc_client(&server)
        .block_with_transactions(99)
        .await
        .unwrap_err();

    assert!(matches!(err, RpcError::BlockNotFound(99)));
}

#[tokio::test]
async fn test_provider_5xx_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(503).body("upstream unavailable");
        })
        .await;

    let err = rpc_client(&server).block_number().await.unwrap_err();

    match err {
        RpcError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(503)),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_price_request_uses_coin_and_currency_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/simple/price")
                .query_param("ids", "ethereum")
                .query_param("vs_currencies", "inr");
            then.status(200)
                .json_body(json!({"ethereum": {"inr": 234567.89}}));
        })
        .await;

    let client = PriceClient::new(Client::new(), server.base_url(), "INR");
    let price = client.eth_spot_price().await.unwrap();

    mock.assert_async().await;
    assert_eq!(price, Decimal::new(23456789, 2));
}

#[tokio::test]
async fn test_price_5xx_is_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/simple/price");
            then.status(500);
        })
        .await;

    let client = PriceClient::new(Client::new(), server.base_url(), "inr");
    let err = client.eth_spot_price().await.unwrap_err();

    assert!(matches!(err, PriceClientError::Http(_)));
}
