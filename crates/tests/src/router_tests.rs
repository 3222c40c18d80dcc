//! The axum application in front of mock nodes.

use crate::mock_infrastructure::{splitter_for, RpcMockBuilder};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::app::create_app;
use splitter_core::{config::ServerConfig, proxy::ProxyEngine};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app(nodes: &[&RpcMockBuilder], server: &ServerConfig) -> Router {
    let engine = ProxyEngine::new(Arc::new(splitter_for(nodes)));
    create_app(Arc::new(engine), server)
}

fn rpc(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_batch_over_http_nodes() {
    let mut a = RpcMockBuilder::new().await;
    let mut b = RpcMockBuilder::new().await;
    for node in [&mut a, &mut b] {
        node.mock_method("eth_chainId", &json!("0x1"));
        node.mock_block_number(0x1234);
    }
    let app = create_test_app(&[&a, &b], &ServerConfig::default());

    let response = app
        .oneshot(rpc(r#"[
            {"jsonrpc":"2.0","id":"a","method":"eth_chainId","params":[]},
            {"jsonrpc":"2.0","id":"b","method":"eth_blockNumber","params":[]}
        ]"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"jsonrpc":"2.0","id":"a","result":"0x1"},
            {"jsonrpc":"2.0","id":"b","result":"0x1234"}
        ])
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let mut node = RpcMockBuilder::new().await;
    node.mock_method("eth_chainId", &json!("0x1"));
    let app = create_test_app(&[&node], &ServerConfig::default());

    let mut request = rpc(r#"{"jsonrpc":"2.0","id":1,"method":"eth_chainId"}"#);
    request.headers_mut().insert("x-request-id", "trace-me".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let node = RpcMockBuilder::new().await;
    let server = ServerConfig { max_body_bytes: 64, ..ServerConfig::default() };
    let app = create_test_app(&[&node], &server);

    let padding = "0".repeat(128);
    let body = format!(r#"{{"jsonrpc":"2.0","id":1,"method":"eth_chainId","params":["{padding}"]}}"#);
    let mut request = rpc(&body);
    request.headers_mut().insert(header::CONTENT_LENGTH, body.len().into());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_too_many_params_is_invalid_params() {
    let node = RpcMockBuilder::new().await;
    let app = create_test_app(&[&node], &ServerConfig::default());

    let response = app
        .oneshot(rpc(r#"{"jsonrpc":"2.0","id":1,"method":"eth_chainId","params":[1]}"#))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], -32602);
    assert_eq!(body["error"]["message"], "too many arguments, want at most 0");
}
