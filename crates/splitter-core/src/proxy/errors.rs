use crate::{splitter::SplitterError, types::codes, wire::WireError};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("the method {0} does not exist/is not available")]
    MethodNotFound(String),

    #[error("{0}")]
    InvalidParams(String),

    #[error("earliest tag is not supported")]
    EarliestTagNotSupported,

    /// Resolution failure or cancellation of a fan-out call.
    #[error(transparent)]
    Splitter(#[from] SplitterError),

    /// A resolved value could not be converted for the next call.
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// JSON-RPC error code for this error.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::InvalidRequest(_) => codes::INVALID_REQUEST,
            Self::MethodNotFound(_) => codes::METHOD_NOT_FOUND,
            Self::InvalidParams(_) => codes::INVALID_PARAMS,
            Self::Internal(_) => codes::INTERNAL_ERROR,
            Self::EarliestTagNotSupported | Self::Splitter(_) | Self::Wire(_) => {
                codes::SERVER_ERROR
            }
        }
    }
}
