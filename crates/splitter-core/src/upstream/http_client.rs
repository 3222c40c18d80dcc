use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};
use url::Url;

use super::{Caller, UpstreamError};
use crate::types::{JsonRpcRequest, JsonRpcResponse};

/// Transport settings shared by every [`HttpCaller`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Upper bound for a single request. The fan-out engine's total timeout normally
    /// fires first; this only guards against callers used outside the engine.
    pub request_timeout: Duration,
    /// Idle keep-alive connections are closed after this long.
    pub pool_idle_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the shared `reqwest` client.
///
/// # Errors
///
/// Returns [`UpstreamError::ConnectionFailed`] if the TLS backend cannot be initialised.
pub fn build_client(config: &HttpClientConfig) -> Result<Client, UpstreamError> {
    ClientBuilder::new()
        .pool_idle_timeout(config.pool_idle_timeout)
        .pool_max_idle_per_host(32)
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("rpc-splitter/", env!("CARGO_PKG_VERSION")))
        .tcp_keepalive(Duration::from_secs(30))
        .tcp_nodelay(true)
        .build()
        .map_err(|e| {
            tracing::error!(error = %e, "failed to build http client");
            UpstreamError::ConnectionFailed(format!("HTTP client build failed: {e}"))
        })
}

/// JSON-RPC 2.0 over HTTP POST.
pub struct HttpCaller {
    client: Client,
    url: Url,
    next_id: AtomicU64,
}

impl HttpCaller {
    /// Creates a caller for `url` sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url, next_id: AtomicU64::new(1) }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Maps transport errors to messages that do not leak the endpoint URL (which often
    /// carries an API key).
    fn sanitize_network_error(error: &reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            return UpstreamError::Timeout;
        }
        let reason = if error.is_connect() {
            "connection refused or unreachable"
        } else if error.is_request() {
            "request failed"
        } else if error.is_body() {
            "response body error"
        } else if error.is_redirect() {
            "unexpected redirect"
        } else {
            "network error"
        };
        UpstreamError::ConnectionFailed(reason.to_string())
    }
}

#[async_trait]
impl Caller for HttpCaller {
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value, UpstreamError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request =
            JsonRpcRequest::new(method, Some(Value::Array(params.to_vec())), Value::from(id));
        let body = serde_json::to_vec(&request).map_err(|e| {
            UpstreamError::InvalidRequest(format!("failed to serialize request: {e}"))
        })?;

        let response = self
            .client
            .post(self.url.clone())
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Self::sanitize_network_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let raw_text = response.text().await.unwrap_or_default();
            let text = if raw_text.len() > 256 {
                let cut = (0..=256).rev().find(|i| raw_text.is_char_boundary(*i)).unwrap_or(0);
                format!("{}... (truncated)", &raw_text[..cut])
            } else {
                raw_text
            };
            return Err(UpstreamError::HttpError(status.as_u16(), text));
        }

        let bytes = response.bytes().await.map_err(|e| Self::sanitize_network_error(&e))?;
        decode_response(&bytes)
    }
}

/// Decodes a node's reply body. A `"result": null` is a value; a body with
/// neither `result` nor `error` is invalid.
fn decode_response(bytes: &[u8]) -> Result<Value, UpstreamError> {
    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|e| UpstreamError::InvalidResponse(format!("invalid JSON: {e}")))?;
    let has_result = raw.as_object().is_some_and(|body| body.contains_key("result"));
    let response: JsonRpcResponse = serde_json::from_value(raw)
        .map_err(|e| UpstreamError::InvalidResponse(format!("invalid JSON-RPC response: {e}")))?;

    match response.error {
        Some(error) => Err(UpstreamError::RpcError(error.code, error.message)),
        None if has_result => Ok(response.result.unwrap_or(Value::Null)),
        None => Err(UpstreamError::InvalidResponse("missing result".to_string())),
    }
}

/// Log-safe endpoint name: host and port only, never path or query.
#[must_use]
pub fn endpoint_name(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        _ => url.scheme().to_string(),
    }
}
