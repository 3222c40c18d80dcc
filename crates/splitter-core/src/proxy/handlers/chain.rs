use serde_json::Value;
use std::sync::Arc;

use crate::{
    proxy::{
        engine::{to_json, RequestContext, SharedContext},
        errors::ProxyError,
        methods::Method,
        params::Params,
    },
    wire::{BlockId, FeeHistory, Json, Number},
};

/// Chain identity and fee market methods.
pub struct ChainHandler {
    ctx: Arc<SharedContext>,
}

impl ChainHandler {
    #[must_use]
    pub fn new(ctx: Arc<SharedContext>) -> Self {
        Self { ctx }
    }

    /// Parameterless quantity methods: `eth_gasPrice`, `eth_maxPriorityFeePerGas`,
    /// `eth_chainId`.
    ///
    /// # Errors
    /// Returns [`ProxyError::Splitter`] if the outcomes cannot be resolved.
    pub async fn quantity(
        &self,
        cx: &RequestContext,
        method: Method,
    ) -> Result<Value, ProxyError> {
        self.ctx.call_number(cx, method, Vec::new()).await
    }

    /// `eth_feeHistory`.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn fee_history(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let block_count: Number = params.required(0)?;
        let newest: BlockId = params.required(1)?;
        let percentiles: Option<Json> = params.optional(2)?;
        let newest = self.ctx.resolve_block_id(cx, newest).await?;
        let args = vec![
            to_json(&block_count)?,
            to_json(&newest)?,
            percentiles.map_or(Value::Null, |p| p.0),
        ];
        self.ctx.call::<FeeHistory>(cx, Method::FeeHistory, args).await
    }

    /// `net_version`, compared as raw JSON.
    ///
    /// # Errors
    /// Returns [`ProxyError::Splitter`] if the outcomes cannot be resolved.
    pub async fn net_version(&self, cx: &RequestContext) -> Result<Value, ProxyError> {
        self.ctx.call::<Json>(cx, Method::NetVersion, Vec::new()).await
    }
}
