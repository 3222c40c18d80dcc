use serde_json::Value;
use std::sync::Arc;

use crate::{
    proxy::{
        engine::{to_json, RequestContext, SharedContext},
        errors::ProxyError,
        methods::Method,
        params::Params,
    },
    wire::{Address, BlockId, Bytes, Hash, Receipt, Transaction},
};

/// Transaction lookups, nonces and raw transaction submission.
pub struct TransactionsHandler {
    ctx: Arc<SharedContext>,
}

impl TransactionsHandler {
    #[must_use]
    pub fn new(ctx: Arc<SharedContext>) -> Self {
        Self { ctx }
    }

    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params or the fan-out error.
    pub async fn transaction_by_hash(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let hash: Hash = params.required(0)?;
        self.ctx
            .call::<Option<Transaction>>(cx, Method::GetTransactionByHash, vec![to_json(&hash)?])
            .await
    }

    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params,
    /// [`ProxyError::EarliestTagNotSupported`] or the fan-out error.
    pub async fn transaction_count(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let address: Address = params.required(0)?;
        let block_id: BlockId = params.required(1)?;
        let block_id = self.ctx.resolve_block_id(cx, block_id).await?;
        self.ctx
            .call_number(
                cx,
                Method::GetTransactionCount,
                vec![to_json(&address)?, to_json(&block_id)?],
            )
            .await
    }

    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params or the fan-out error.
    pub async fn transaction_receipt(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let hash: Hash = params.required(0)?;
        self.ctx
            .call::<Option<Receipt>>(cx, Method::GetTransactionReceipt, vec![to_json(&hash)?])
            .await
    }

    /// Submits the transaction to every endpoint; they must agree on its hash.
    ///
    /// # Errors
    /// Returns [`ProxyError::InvalidParams`] for malformed params or the fan-out error.
    pub async fn send_raw_transaction(
        &self,
        cx: &RequestContext,
        params: &Params,
    ) -> Result<Value, ProxyError> {
        let data: Bytes = params.required(0)?;
        self.ctx.call::<Hash>(cx, Method::SendRawTransaction, vec![to_json(&data)?]).await
    }
}
