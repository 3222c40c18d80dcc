use serde_json::Value;
use std::sync::Arc;

use crate::{
    proxy::{
        engine::{to_json, RequestContext, SharedContext},
        errors::ProxyError,
        methods::Method,
        params::Params,
    },
    wire::{Address, BlockId, Bytes, Hash, Json, Number},
};

/// Account state and call execution.
pub struct StateHandler {
    ctx: Arc<SharedContext>,
}

impl StateHandler {
    #[must_use]
    pub fn new(ctx: Arc<SharedContext>) -> Self {
        Self { ctx }
    }

    /// `eth_getBalance`.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn balance(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let args = self.address_at_block(cx, params).await?;
        self.ctx.call_number(cx, Method::GetBalance, args).await
    }

    /// `eth_getCode`.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn code(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let args = self.address_at_block(cx, params).await?;
        self.ctx.call::<Bytes>(cx, Method::GetCode, args).await
    }

    /// `eth_getStorageAt`.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn storage_at(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let address: Address = params.required(0)?;
        let position: Number = params.required(1)?;
        let block_id: BlockId = params.required(2)?;
        let block_id = self.ctx.resolve_block_id(cx, block_id).await?;
        let args = vec![to_json(&address)?, to_json(&position)?, to_json(&block_id)?];
        self.ctx.call::<Hash>(cx, Method::GetStorageAt, args).await
    }

    /// `eth_call`. The call object and state overrides are forwarded untouched; a missing
    /// block defaults to `latest`.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn call(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let call: Json = params.required(0)?;
        let block_id = self.optional_block(cx, params, 1).await?;
        let overrides: Option<Json> = params.optional(2)?;
        let args = vec![call.0, to_json(&block_id)?, overrides.map_or(Value::Null, |o| o.0)];
        self.ctx.call::<Bytes>(cx, Method::Call, args).await
    }

    /// `eth_estimateGas`, resolved with the gas value policy.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn estimate_gas(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let call: Json = params.required(0)?;
        let block_id = self.optional_block(cx, params, 1).await?;
        self.ctx.call_number(cx, Method::EstimateGas, vec![call.0, to_json(&block_id)?]).await
    }

    async fn address_at_block(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Vec<Value>, ProxyError> {
        let address: Address = params.required(0)?;
        let block_id: BlockId = params.required(1)?;
        let block_id = self.ctx.resolve_block_id(cx, block_id).await?;
        Ok(vec![to_json(&address)?, to_json(&block_id)?])
    }

    async fn optional_block(
        &self,
        cx: &RequestContext,
        params: &Params,
        index: usize,
    ) -> Result<BlockId, ProxyError> {
        let block_id: Option<BlockId> = params.optional(index)?;
        self.ctx.resolve_block_id(cx, block_id.unwrap_or(BlockId::LATEST)).await
    }
}
