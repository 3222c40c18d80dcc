use crate::resolver::ResolveError;
use thiserror::Error;

/// Errors returned by [`Splitter`](super::Splitter) construction and calls.
#[derive(Debug, Clone, Error)]
pub enum SplitterError {
    /// The outcomes could not be reduced to a single value.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The caller's cancellation token fired before the call resolved.
    #[error("context canceled")]
    Canceled,

    #[error("WithEndpoints option is required")]
    MissingEndpoints,

    #[error("WithRequirements option is required")]
    MissingRequirements,

    #[error("invalid splitter configuration: {0}")]
    InvalidConfig(String),
}
