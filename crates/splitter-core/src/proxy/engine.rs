use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    resolver::ResolverKind,
    splitter::Splitter,
    types::{JsonRpcRequest, JsonRpcResponse},
    wire::{BlockId, Number, WireValue},
};

use super::{
    errors::ProxyError,
    handlers::{BlocksHandler, ChainHandler, LogsHandler, StateHandler, TransactionsHandler},
    methods::Method,
    params::Params,
};

/// One client request: its cancellation token and the deadline every fan-out serving
/// it must finish by.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub cancel: CancellationToken,
    pub deadline: Instant,
}

/// State shared by all handlers.
pub struct SharedContext {
    pub splitter: Arc<Splitter>,
}

impl SharedContext {
    /// Starts a request whose fan-outs together get one total timeout.
    #[must_use]
    pub fn request_context(&self, cancel: &CancellationToken) -> RequestContext {
        RequestContext { cancel: cancel.clone(), deadline: self.splitter.deadline() }
    }

    /// Fans `method` out with the default resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Splitter`] when the outcomes cannot be resolved.
    pub async fn call<T: WireValue>(
        &self,
        cx: &RequestContext,
        method: Method,
        params: Vec<Value>,
    ) -> Result<Value, ProxyError> {
        let value: T = self
            .splitter
            .call_until(
                &cx.cancel,
                cx.deadline,
                self.splitter.default_resolver(),
                method.name(),
                params,
            )
            .await?;
        to_json(&value)
    }

    /// Fans out a quantity-returning `method` with its own resolver policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Splitter`] when the outcomes cannot be resolved.
    pub async fn call_number(
        &self,
        cx: &RequestContext,
        method: Method,
        params: Vec<Value>,
    ) -> Result<Value, ProxyError> {
        let value = self.number(cx, method.resolver_kind(), method.name(), params).await?;
        to_json(&value)
    }

    async fn number(
        &self,
        cx: &RequestContext,
        kind: ResolverKind,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Number, ProxyError> {
        let resolver = self.splitter.number_resolver(kind);
        Ok(self.splitter.call_until(&cx.cancel, cx.deadline, resolver, method, params).await?)
    }

    /// Replaces a `latest`/`pending` tag with the height agreed on by the endpoints.
    ///
    /// `earliest` is always rejected. With a single endpoint there is nothing to
    /// reconcile and the tag is passed through.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::EarliestTagNotSupported`] for `earliest`, or the error of the
    /// nested `eth_blockNumber` call.
    pub async fn resolve_block_id(
        &self,
        cx: &RequestContext,
        block_id: BlockId,
    ) -> Result<BlockId, ProxyError> {
        if block_id.is_earliest() {
            return Err(ProxyError::EarliestTagNotSupported);
        }
        if !block_id.is_tag() || self.splitter.endpoint_count() == 1 {
            return Ok(block_id);
        }

        let number = self
            .number(cx, ResolverKind::BlockNumber, Method::BlockNumber.name(), Vec::new())
            .await?;
        let resolved = BlockId::try_from(number)?;
        debug!(tag = %block_id, number = %resolved, "resolved block tag");
        Ok(resolved)
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ProxyError> {
    serde_json::to_value(value).map_err(|e| ProxyError::Internal(e.to_string()))
}

/// JSON-RPC front of the splitter.
///
/// Decodes the positional params of every supported method into wire types, resolves
/// block tags, runs the fan-out with the method's resolver policy and encodes the
/// resolved value back into the response.
pub struct ProxyEngine {
    ctx: Arc<SharedContext>,
    blocks_handler: BlocksHandler,
    chain_handler: ChainHandler,
    logs_handler: LogsHandler,
    state_handler: StateHandler,
    transactions_handler: TransactionsHandler,
}

impl ProxyEngine {
    #[must_use]
    pub fn new(splitter: Arc<Splitter>) -> Self {
        let ctx = Arc::new(SharedContext { splitter });

        Self {
            blocks_handler: BlocksHandler::new(Arc::clone(&ctx)),
            chain_handler: ChainHandler::new(Arc::clone(&ctx)),
            logs_handler: LogsHandler::new(Arc::clone(&ctx)),
            state_handler: StateHandler::new(Arc::clone(&ctx)),
            transactions_handler: TransactionsHandler::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    #[must_use]
    pub fn splitter(&self) -> &Arc<Splitter> {
        &self.ctx.splitter
    }

    /// Processes one request into a response carrying the request's id.
    pub async fn process_request(
        &self,
        cancel: &CancellationToken,
        request: JsonRpcRequest,
    ) -> JsonRpcResponse {
        let id = Arc::clone(&request.id);
        let method = request.method.clone();
        let start = Instant::now();

        let result = self.handle_request(cancel, request).await;

        let latency_ms: u64 = start.elapsed().as_millis().try_into().unwrap_or(u64::MAX);
        match result {
            Ok(value) => {
                debug!(method = %method, latency_ms, "request served");
                JsonRpcResponse::success(value, id)
            }
            Err(e) => {
                debug!(method = %method, latency_ms, error = %e, "request failed");
                JsonRpcResponse::error(e.code(), e.to_string(), id)
            }
        }
    }

    /// Validates and routes a request to its handler.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidRequest`] for a malformed envelope,
    /// [`ProxyError::MethodNotFound`] for unsupported methods,
    /// [`ProxyError::InvalidParams`] for malformed params and the handler's error otherwise.
    pub async fn handle_request(
        &self,
        cancel: &CancellationToken,
        request: JsonRpcRequest,
    ) -> Result<Value, ProxyError> {
        request.validate().map_err(ProxyError::InvalidRequest)?;
        let method = Method::from_name(&request.method)
            .ok_or_else(|| ProxyError::MethodNotFound(request.method.clone()))?;
        let params = Params::parse(request.params, method.max_params())?;
        let cx = &self.ctx.request_context(cancel);

        match method {
            Method::BlockNumber => self.blocks_handler.block_number(cx).await,
            Method::GetBlockByHash => self.blocks_handler.block_by_hash(cx, &params).await,
            Method::GetBlockByNumber => self.blocks_handler.block_by_number(cx, &params).await,
            Method::GetTransactionByHash => {
                self.transactions_handler.transaction_by_hash(cx, &params).await
            }
            Method::GetTransactionCount => {
                self.transactions_handler.transaction_count(cx, &params).await
            }
            Method::GetTransactionReceipt => {
                self.transactions_handler.transaction_receipt(cx, &params).await
            }
            Method::SendRawTransaction => {
                self.transactions_handler.send_raw_transaction(cx, &params).await
            }
            Method::GetBalance => self.state_handler.balance(cx, &params).await,
            Method::GetCode => self.state_handler.code(cx, &params).await,
            Method::GetStorageAt => self.state_handler.storage_at(cx, &params).await,
            Method::Call => self.state_handler.call(cx, &params).await,
            Method::EstimateGas => self.state_handler.estimate_gas(cx, &params).await,
            Method::GetLogs => self.logs_handler.logs(cx, &params).await,
            Method::GasPrice | Method::MaxPriorityFeePerGas | Method::ChainId => {
                self.chain_handler.quantity(cx, method).await
            }
            Method::FeeHistory => self.chain_handler.fee_history(cx, &params).await,
            Method::NetVersion => self.chain_handler.net_version(cx).await,
        }
    }
}
