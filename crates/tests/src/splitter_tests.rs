//! Fan-out across several mock nodes.

use crate::mock_infrastructure::{splitter_for, BlockResponseBuilder, RpcMockBuilder};
use serde_json::json;
use splitter_core::{
    resolver::ResolverKind,
    splitter::SplitterError,
    wire::{BlockWithHashes, Json, Number},
};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

async fn nodes(count: usize) -> Vec<RpcMockBuilder> {
    let mut nodes = Vec::with_capacity(count);
    for _ in 0..count {
        nodes.push(RpcMockBuilder::new().await);
    }
    nodes
}

#[tokio::test]
async fn test_majority_value_wins() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_method("eth_chainId", &json!("0x1"));
    nodes[1].mock_method("eth_chainId", &json!("0x1"));
    nodes[2].mock_method("eth_chainId", &json!("0x5"));

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let chain_id: Number = splitter
        .call_default(&CancellationToken::new(), "eth_chainId", Vec::new())
        .await
        .unwrap();

    assert_eq!(chain_id, Number::from(1_u64));
}

#[tokio::test]
async fn test_disagreement_is_reported() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_method("net_version", &json!("1"));
    nodes[1].mock_method("net_version", &json!("5"));
    nodes[2].mock_method("net_version", &json!("137"));

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let err = splitter
        .call_default::<Json>(&CancellationToken::new(), "net_version", Vec::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "RPC servers returned different responses");
}

#[tokio::test]
async fn test_gas_price_uses_median() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_method("eth_gasPrice", &json!("0x9"));
    nodes[1].mock_method("eth_gasPrice", &json!("0x6"));
    nodes[2].mock_method("eth_gasPrice", &json!("0x8"));

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let price = splitter
        .call_number(&CancellationToken::new(), ResolverKind::GasValue, "eth_gasPrice", Vec::new())
        .await
        .unwrap();

    assert_eq!(price, Number::from(8_u64));
}

#[tokio::test]
async fn test_block_number_tolerates_lagging_node() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_block_number(100);
    nodes[1].mock_block_number(98);
    nodes[2].mock_block_number(16);

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let height = splitter.block_number(&CancellationToken::new()).await.unwrap();

    assert_eq!(height, Number::from(98_u64));
}

#[tokio::test]
async fn test_upstream_errors_are_aggregated() {
    let mut nodes = nodes(3).await;
    nodes[0].mock_rpc_error("eth_call", 3, "execution reverted");
    nodes[1].mock_rpc_error("eth_call", 3, "execution reverted");
    nodes[2].mock_method("eth_call", &json!("0x"));

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let err = splitter
        .call_default::<Json>(&CancellationToken::new(), "eth_call", vec![json!({})])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "the following errors occurred: [not enough responses from RPC servers, execution reverted]"
    );
}

#[tokio::test]
async fn test_one_failing_node_is_tolerated() {
    let mut nodes = nodes(3).await;
    let block = BlockResponseBuilder::new(0x20).build();
    nodes[0].mock_get_block_by_number(0x20, &block);
    nodes[1].mock_get_block_by_number(0x20, &block);
    nodes[2].mock_http_status("eth_getBlockByNumber", 502, "Bad Gateway");

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let fetched: Option<BlockWithHashes> = splitter
        .call_default(
            &CancellationToken::new(),
            "eth_getBlockByNumber",
            vec![json!("0x20"), json!(false)],
        )
        .await
        .unwrap();

    let fetched = fetched.unwrap();
    assert_eq!(fetched.number, Some(Number::from(0x20_u64)));
}

#[tokio::test]
async fn test_two_endpoints_require_both() {
    let mut nodes = nodes(2).await;
    nodes[0].mock_method("eth_chainId", &json!("0x1"));
    nodes[1].mock_http_status("eth_chainId", 500, "boom");

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let err = splitter
        .call_default::<Number>(&CancellationToken::new(), "eth_chainId", Vec::new())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not enough responses from RPC servers"));
    assert!(err.to_string().contains("HTTP error 500: boom"));
}

#[tokio::test]
async fn test_canceled_call_returns_promptly() {
    let mut nodes = nodes(2).await;
    nodes[0].mock_method("eth_chainId", &json!("0x1"));
    nodes[1].mock_method("eth_chainId", &json!("0x1"));

    let splitter = splitter_for(&nodes.iter().collect::<Vec<_>>());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let started = Instant::now();
    let result = splitter.call_default::<Number>(&cancel, "eth_chainId", Vec::new()).await;

    assert!(matches!(result, Err(SplitterError::Canceled)));
    assert!(started.elapsed() < Duration::from_secs(1));
}
