//! `ProxyEngine` over real HTTP endpoints.

use crate::mock_infrastructure::{
    splitter_for, BlockResponseBuilder, LogResponseBuilder, RpcMockBuilder,
};
use serde_json::{json, Value};
use splitter_core::{proxy::ProxyEngine, types::JsonRpcRequest};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const ADDRESS: &str = "0x00000000000000000000000000000000000000aa";

async fn nodes(count: usize) -> Vec<RpcMockBuilder> {
    let mut nodes = Vec::with_capacity(count);
    for _ in 0..count {
        nodes.push(RpcMockBuilder::new().await);
    }
    nodes
}

fn create_test_proxy_engine(nodes: &[RpcMockBuilder]) -> ProxyEngine {
    ProxyEngine::new(Arc::new(splitter_for(&nodes.iter().collect::<Vec<_>>())))
}

async fn call(engine: &ProxyEngine, method: &str, params: Value) -> Value {
    let request = JsonRpcRequest::new(method, Some(params), json!(1));
    let response = engine.process_request(&CancellationToken::new(), request).await;
    serde_json::to_value(response).unwrap()
}

#[tokio::test]
async fn test_latest_tag_is_pinned_to_common_height() {
    let mut nodes = nodes(3).await;
    for (node, height) in nodes.iter_mut().zip([0x64, 0x64, 0x63]) {
        node.mock_block_number(height);
        node.mock_method_with_params(
            "eth_getBalance",
            &format!(r#"["{ADDRESS}","0x63"]"#),
            &json!("0x0de0b6b3a7640000"),
        );
    }
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_getBalance", json!([ADDRESS, "latest"])).await;

    assert_eq!(response["result"], "0xde0b6b3a7640000");
    for node in &nodes {
        assert!(node.verify_all_called());
    }
}

#[tokio::test]
async fn test_get_block_by_number_reencodes_block() {
    let mut nodes = nodes(3).await;
    let block = BlockResponseBuilder::new(0x20)
        .with_transactions(vec![json!(format!("0x{:064x}", 7))])
        .build();
    for node in &mut nodes {
        node.mock_get_block_by_number(0x20, &block);
    }
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_getBlockByNumber", json!(["0x20", false])).await;

    let result = &response["result"];
    assert_eq!(result["number"], "0x20");
    assert_eq!(result["transactions"], json!([format!("0x{:064x}", 7)]));
    assert_eq!(result["hash"], block["hash"]);
}

#[tokio::test]
async fn test_get_logs_resolves_both_bounds() {
    let mut nodes = nodes(3).await;
    let logs = vec![LogResponseBuilder::new(0x50, 0).with_address(ADDRESS).build()];
    for node in &mut nodes {
        node.mock_block_number(0x50);
        node.mock_get_logs_for_range(0x40, 0x50, &logs);
    }
    let engine = create_test_proxy_engine(&nodes);

    let response = call(
        &engine,
        "eth_getLogs",
        json!([{ "fromBlock": "0x40", "toBlock": "latest", "address": ADDRESS }]),
    )
    .await;

    let result = response["result"].as_array().unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["address"], ADDRESS);
    assert_eq!(result[0]["blockNumber"], "0x50");
}

#[tokio::test]
async fn test_gas_price_median_over_http() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_method("eth_gasPrice", &json!("0x3b9aca00"));
    nodes[1].mock_method("eth_gasPrice", &json!("0x77359400"));
    nodes[2].mock_method("eth_gasPrice", &json!("0x4a817c800"));
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_gasPrice", json!([])).await;

    assert_eq!(response["result"], "0x77359400");
}

#[tokio::test]
async fn test_reverted_call_reaches_client_as_server_error() {
    let mut nodes = nodes(3).await;
    for node in &mut nodes {
        node.mock_block_number(0x10);
        node.mock_rpc_error("eth_call", 3, "execution reverted");
    }
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_call", json!([{ "to": ADDRESS, "data": "0x" }])).await;

    assert_eq!(response["error"]["code"], -32000);
    assert_eq!(
        response["error"]["message"],
        "the following errors occurred: [not enough responses from RPC servers, execution reverted]"
    );
}

#[tokio::test]
async fn test_unknown_method_never_reaches_nodes() {
    let nodes = nodes(2).await;
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "debug_traceTransaction", json!([])).await;

    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["id"], 1);
}

#[tokio::test]
async fn test_earliest_is_rejected() {
    let nodes = nodes(3).await;
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_getBlockByNumber", json!(["earliest", false])).await;

    assert_eq!(response["error"]["message"], "earliest tag is not supported");
}

#[tokio::test]
async fn test_missing_transaction_is_null() {
    let mut nodes = nodes(3).await;
    for node in &mut nodes {
        node.mock_method("eth_getTransactionByHash", &Value::Null);
    }
    let engine = create_test_proxy_engine(&nodes);

    let response = call(&engine, "eth_getTransactionByHash", json!([format!("0x{:064x}", 1)])).await;

    assert_eq!(response["result"], Value::Null);
    assert!(response.get("error").is_none());
}
