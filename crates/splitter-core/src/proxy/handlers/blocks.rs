use serde_json::Value;
use std::sync::Arc;

use crate::{
    proxy::{
        engine::{to_json, RequestContext, SharedContext},
        errors::ProxyError,
        methods::Method,
        params::Params,
    },
    wire::{BlockId, BlockWithHashes, BlockWithTransactions, Hash},
};

/// `eth_blockNumber`, `eth_getBlockByHash` and `eth_getBlockByNumber`.
pub struct BlocksHandler {
    ctx: Arc<SharedContext>,
}

impl BlocksHandler {
    #[must_use]
    pub fn new(ctx: Arc<SharedContext>) -> Self {
        Self { ctx }
    }

    /// # Errors
    /// Returns [`ProxyError::Splitter`] if the heights cannot be resolved.
    pub async fn block_number(&self, cx: &RequestContext) -> Result<Value, ProxyError> {
        self.ctx.call_number(cx, Method::BlockNumber, Vec::new()).await
    }

    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params or the fan-out error.
    pub async fn block_by_hash(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let hash: Hash = params.required(0)?;
        let full: bool = params.required(1)?;
        self.fetch(cx, Method::GetBlockByHash, to_json(&hash)?, full).await
    }

    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn block_by_number(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let block_id: BlockId = params.required(0)?;
        let full: bool = params.required(1)?;
        let block_id = self.ctx.resolve_block_id(cx, block_id).await?;
        self.fetch(cx, Method::GetBlockByNumber, to_json(&block_id)?, full).await
    }

    /// The `full` flag selects between transaction objects and transaction hashes.
    async fn fetch(
        &self,
        cx: &RequestContext,
        method: Method,
        block: Value,
        full: bool,
    ) -> Result<Value, ProxyError> {
        let args = vec![block, Value::Bool(full)];
        if full {
            self.ctx.call::<Option<BlockWithTransactions>>(cx, method, args).await
        } else {
            self.ctx.call::<Option<BlockWithHashes>>(cx, method, args).await
        }
    }
}
