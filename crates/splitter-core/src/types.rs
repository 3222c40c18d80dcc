//! JSON-RPC 2.0 framing shared by the upstream callers and the HTTP surface.
//!
//! Values inside `params`/`result` stay as raw [`serde_json::Value`] here; decoding into
//! wire types happens in [`crate::proxy`] and [`crate::splitter`].

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, sync::Arc};

/// JSON-RPC protocol version constant to avoid repeated allocations.
pub const JSONRPC_VERSION: &str = "2.0";

/// Pre-allocated `Cow` for the JSON-RPC version.
pub const JSONRPC_VERSION_COW: Cow<'static, str> = Cow::Borrowed(JSONRPC_VERSION);

/// Standard and server-defined JSON-RPC error codes.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Everything that went wrong while calling or reconciling upstreams.
    pub const SERVER_ERROR: i32 = -32000;
}

/// JSON-RPC 2.0 request.
///
/// `params` is kept raw; the proxy decodes it positionally per method. A missing `id`
/// deserializes as `null`.
///
/// # Example
///
/// ```
/// use splitter_core::types::JsonRpcRequest;
/// use serde_json::json;
///
/// let request = JsonRpcRequest::new("eth_blockNumber", None, json!(1));
///
/// assert_eq!(request.method, "eth_blockNumber");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: Cow<'static, str>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    #[serde(default)]
    pub id: Arc<serde_json::Value>,
}

impl JsonRpcRequest {
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        params: Option<serde_json::Value>,
        id: serde_json::Value,
    ) -> Self {
        Self { jsonrpc: JSONRPC_VERSION_COW, method: method.into(), params, id: Arc::new(id) }
    }

    /// Checks the envelope, not the method or params.
    ///
    /// # Errors
    ///
    /// Returns a message suitable for an `invalid request` response.
    pub fn validate(&self) -> Result<(), String> {
        if self.jsonrpc != JSONRPC_VERSION {
            return Err(format!("invalid jsonrpc version: {}", self.jsonrpc));
        }
        if self.method.is_empty() {
            return Err("method must not be empty".to_string());
        }
        Ok(())
    }
}

/// JSON-RPC 2.0 response. Exactly one of `result` and `error` is set.
///
/// # Example
///
/// ```
/// use splitter_core::types::JsonRpcResponse;
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let response = JsonRpcResponse::success(json!("0x1234"), Arc::new(json!(1)));
/// assert!(response.error.is_none());
///
/// let response =
///     JsonRpcResponse::error(-32600, "invalid request".to_string(), Arc::new(json!(1)));
/// assert!(response.result.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Arc<serde_json::Value>,
}

impl JsonRpcResponse {
    #[must_use]
    pub fn success(result: serde_json::Value, id: Arc<serde_json::Value>) -> Self {
        Self { jsonrpc: JSONRPC_VERSION_COW, result: Some(result), error: None, id }
    }

    #[must_use]
    pub fn error(code: i32, message: String, id: Arc<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION_COW,
            result: None,
            error: Some(JsonRpcError { code, message, data: None }),
            id,
        }
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
