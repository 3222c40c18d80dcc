//! Integration tests for `HttpCaller` against a mock node.

use crate::mock_infrastructure::{caller_for, RpcMockBuilder};
use serde_json::{json, Value};
use splitter_core::upstream::{
    build_client, endpoint_name, Caller, HttpCaller, HttpClientConfig, UpstreamError,
};
use url::Url;

#[tokio::test]
async fn test_successful_call_returns_result() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_block_number(0x10);

    let result = caller_for(&node).call("eth_blockNumber", &[]).await.unwrap();

    assert_eq!(result, json!("0x10"));
    assert!(node.verify_all_called());
}

#[tokio::test]
async fn test_params_are_sent_as_array() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_method_with_params(
        "eth_getBalance",
        r#""params":["0x0000000000000000000000000000000000000001","0x10"]"#,
        &json!("0x64"),
    );

    let params = [json!("0x0000000000000000000000000000000000000001"), json!("0x10")];
    let result = caller_for(&node).call("eth_getBalance", &params).await.unwrap();

    assert_eq!(result, json!("0x64"));
}

#[tokio::test]
async fn test_null_result_is_returned_as_null() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_method("eth_getTransactionReceipt", &Value::Null);

    let result = caller_for(&node)
        .call("eth_getTransactionReceipt", &[json!(format!("0x{:064x}", 1))])
        .await
        .unwrap();

    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn test_rpc_error_object_is_mapped() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_rpc_error("eth_call", 3, "execution reverted");

    let err = caller_for(&node).call("eth_call", &[json!({})]).await.unwrap_err();

    assert_eq!(err, UpstreamError::RpcError(3, "execution reverted".to_string()));
    assert_eq!(err.to_string(), "execution reverted");
    assert_eq!(err.rpc_code(), Some(3));
}

#[tokio::test]
async fn test_http_status_is_mapped() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_http_status("eth_gasPrice", 503, "Service Unavailable");

    let err = caller_for(&node).call("eth_gasPrice", &[]).await.unwrap_err();

    assert_eq!(err, UpstreamError::HttpError(503, "Service Unavailable".to_string()));
}

#[tokio::test]
async fn test_long_http_error_body_is_truncated() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_http_status("eth_gasPrice", 500, &"x".repeat(1000));

    let err = caller_for(&node).call("eth_gasPrice", &[]).await.unwrap_err();

    match err {
        UpstreamError::HttpError(500, body) => {
            assert!(body.ends_with("... (truncated)"));
            assert!(body.len() < 300);
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_body_is_mapped() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_garbage("eth_chainId");

    let err = caller_for(&node).call("eth_chainId", &[]).await.unwrap_err();

    assert!(matches!(&err, UpstreamError::InvalidResponse(msg) if msg.starts_with("invalid JSON")));
}

#[tokio::test]
async fn test_body_without_result_or_error_is_invalid() {
    let mut node = RpcMockBuilder::new().await;
    let _mock = node
        .get_server()
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"jsonrpc":"2.0","id":1}"#)
        .create_async()
        .await;

    let err = caller_for(&node).call("eth_gasPrice", &[]).await.unwrap_err();

    assert!(matches!(&err, UpstreamError::InvalidResponse(msg) if msg == "missing result"));
}

#[tokio::test]
async fn test_unreachable_endpoint_does_not_leak_url() {
    let client = build_client(&HttpClientConfig::default()).unwrap();
    let url = Url::parse("http://127.0.0.1:1/v3/secret-key").unwrap();
    let caller = HttpCaller::new(client, url.clone());

    let err = caller.call("eth_chainId", &[]).await.unwrap_err();

    assert!(matches!(err, UpstreamError::ConnectionFailed(_) | UpstreamError::Timeout));
    assert!(!err.to_string().contains("secret-key"));
    assert_eq!(endpoint_name(&url), "127.0.0.1:1");
}
