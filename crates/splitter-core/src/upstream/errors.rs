use thiserror::Error;

/// Failure of a single endpoint call.
///
/// These never reach the client directly: they become error outcomes that resolvers fold
/// into an aggregated message, so the display text of each variant is what the client
/// eventually reads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UpstreamError {
    /// The call did not finish within the total timeout.
    #[error("request timeout")]
    Timeout,

    /// The call was abandoned because the request was canceled.
    #[error("context canceled")]
    Canceled,

    /// Failed to reach the endpoint.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-2xx HTTP status. First field is the status code.
    #[error("HTTP error {0}: {1}")]
    HttpError(u16, String),

    /// JSON-RPC error object returned by the endpoint.
    ///
    /// Displays the upstream message only, so identical failures reported by several
    /// endpoints (e.g. `execution reverted`) collapse into one aggregated entry.
    #[error("{1}")]
    RpcError(i32, String),

    /// Response body or result could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The request could not be encoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The endpoint call panicked. The payload is logged, never returned to the client.
    #[error("endpoint call panicked")]
    Panic(String),
}

impl UpstreamError {
    /// JSON-RPC error code when the endpoint answered with an error object.
    #[must_use]
    pub fn rpc_code(&self) -> Option<i32> {
        match self {
            Self::RpcError(code, _) => Some(*code),
            _ => None,
        }
    }
}
