use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use futures::future::join_all;
use serde_json::{json, Value};
use splitter_core::{
    proxy::ProxyEngine,
    types::{codes, JsonRpcRequest, JsonRpcResponse},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Handles JSON-RPC requests (single or batched).
///
/// A batch is an array of request objects; its items are processed concurrently and
/// answered in order. The request is bound to a cancellation token that fires when the
/// connection goes away, which stops every in-flight endpoint call for it.
pub async fn handle_rpc(State(proxy_engine): State<Arc<ProxyEngine>>, body: Bytes) -> Response {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "unparseable request body");
            let response = JsonRpcResponse::error(
                codes::PARSE_ERROR,
                format!("parse error: {e}"),
                Arc::new(Value::Null),
            );
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    match payload {
        Value::Array(items) if items.is_empty() => Json(invalid_request(
            "empty batch".to_string(),
            Value::Null,
        ))
        .into_response(),
        Value::Array(items) => {
            let responses = join_all(
                items.into_iter().map(|item| handle_single_request(&proxy_engine, &cancel, item)),
            )
            .await;
            Json(responses).into_response()
        }
        item => Json(handle_single_request(&proxy_engine, &cancel, item).await).into_response(),
    }
}

async fn handle_single_request(
    proxy_engine: &ProxyEngine,
    cancel: &CancellationToken,
    item: Value,
) -> JsonRpcResponse {
    let id = item.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(item) {
        Ok(request) => proxy_engine.process_request(cancel, request).await,
        Err(e) => invalid_request(format!("invalid request: {e}"), id),
    }
}

fn invalid_request(message: String, id: Value) -> JsonRpcResponse {
    JsonRpcResponse::error(codes::INVALID_REQUEST, message, Arc::new(id))
}

/// Liveness probe reporting the number of configured endpoints.
pub async fn handle_health(State(proxy_engine): State<Arc<ProxyEngine>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "endpoints": proxy_engine.splitter().endpoint_count(),
    }))
}
