use serde_json::Value;
use std::sync::Arc;

use crate::{
    proxy::{
        engine::{to_json, RequestContext, SharedContext},
        errors::ProxyError,
        methods::Method,
        params::Params,
    },
    wire::{Log, LogFilter},
};

/// `eth_getLogs`.
pub struct LogsHandler {
    ctx: Arc<SharedContext>,
}

impl LogsHandler {
    #[must_use]
    pub fn new(ctx: Arc<SharedContext>) -> Self {
        Self { ctx }
    }

    /// Resolves both range bounds of the filter before fanning out, so every endpoint
    /// scans the same range.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for a malformed filter,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn logs(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let mut filter: LogFilter = params.required(0)?;
        if let Some(from) = filter.from_block {
            filter.from_block = Some(self.ctx.resolve_block_id(cx, from).await?);
        }
        if let Some(to) = filter.to_block {
            filter.to_block = Some(self.ctx.resolve_block_id(cx, to).await?);
        }
        self.ctx.call::<Vec<Log>>(cx, Method::GetLogs, vec![to_json(&filter)?]).await
    }
}
