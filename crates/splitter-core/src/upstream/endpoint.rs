use async_trait::async_trait;
use serde_json::Value;
use std::{fmt, sync::Arc};

use super::UpstreamError;

/// JSON-RPC call primitive of one upstream node.
///
/// Implementations return the raw `result` member on success; decoding into a wire type
/// is done by the fan-out engine. A `null` result is returned as [`Value::Null`].
#[async_trait]
pub trait Caller: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] for transport failures, error responses or
    /// undecodable bodies.
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value, UpstreamError>;
}

/// A named [`Caller`]. The name only appears in logs.
#[derive(Clone)]
pub struct Endpoint {
    name: Arc<str>,
    caller: Arc<dyn Caller>,
}

impl Endpoint {
    pub fn new(name: impl Into<Arc<str>>, caller: Arc<dyn Caller>) -> Self {
        Self { name: name.into(), caller }
    }

    #[must_use]
    pub fn name(&self) -> &Arc<str> {
        &self.name
    }

    #[must_use]
    pub fn caller(&self) -> &Arc<dyn Caller> {
        &self.caller
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint").field("name", &self.name).finish_non_exhaustive()
    }
}
