use futures::FutureExt;
use serde_json::Value;
use std::{any::Any, panic::AssertUnwindSafe, sync::Arc, time::Duration};
use tokio::{
    sync::mpsc,
    time::{sleep_until, timeout_at, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::{SplitterBuilder, SplitterError};
use crate::{
    resolver::{
        BlockNumberResolver, DefaultResolver, GasValueResolver, Outcome, Resolver, ResolverKind,
    },
    upstream::{Endpoint, UpstreamError},
    wire::{Number, WireValue},
};

/// Minimum number of agreeing responses for `endpoints` upstreams: all of them when there
/// are at most two, otherwise all but one.
#[must_use]
pub const fn minimum_required_responses(endpoints: usize) -> usize {
    if endpoints <= 2 {
        endpoints
    } else {
        endpoints - 1
    }
}

/// Fans calls out to every endpoint and resolves the outcomes.
///
/// The endpoint set and the resolver policies are fixed at construction.
#[derive(Debug)]
pub struct Splitter {
    pub(super) endpoints: Vec<Endpoint>,
    pub(super) total_timeout: Duration,
    pub(super) graceful_timeout: Duration,
    pub(super) default_resolver: DefaultResolver,
    pub(super) gas_value_resolver: GasValueResolver,
    pub(super) block_number_resolver: BlockNumberResolver,
}

impl Splitter {
    #[must_use]
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::new()
    }

    #[must_use]
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn total_timeout(&self) -> Duration {
        self.total_timeout
    }

    #[must_use]
    pub fn graceful_timeout(&self) -> Duration {
        self.graceful_timeout
    }

    #[must_use]
    pub fn default_resolver(&self) -> &DefaultResolver {
        &self.default_resolver
    }

    #[must_use]
    pub fn block_number_resolver(&self) -> &BlockNumberResolver {
        &self.block_number_resolver
    }

    /// Calls `method` on every endpoint and reduces the outcomes with `resolver`, giving
    /// the call the full total timeout.
    ///
    /// # Errors
    ///
    /// See [`Self::call_until`].
    pub async fn call<T, R>(
        &self,
        cancel: &CancellationToken,
        resolver: &R,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SplitterError>
    where
        T: WireValue,
        R: Resolver<T> + ?Sized,
    {
        self.call_until(cancel, self.deadline(), resolver, method, params).await
    }

    /// Deadline of a logical call starting now.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.total_timeout
    }

    /// Calls `method` on every endpoint and reduces the outcomes with `resolver`.
    ///
    /// `deadline` is the hard ceiling of the call. Several calls serving one client
    /// request share it, so nested lookups draw from the same budget.
    ///
    /// Trailing `null` params are dropped before sending. Each endpoint's raw result is
    /// decoded into `T`; a decode failure counts as that endpoint's error. After the
    /// graceful timeout the outcomes collected so far are resolved and returned on success.
    /// Otherwise the engine waits until every endpoint answered or the deadline passed,
    /// and resolves one final time.
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::Canceled`] if `cancel` fires first, or
    /// [`SplitterError::Resolve`] with the aggregated endpoint errors.
    pub async fn call_until<T, R>(
        &self,
        cancel: &CancellationToken,
        deadline: Instant,
        resolver: &R,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SplitterError>
    where
        T: WireValue,
        R: Resolver<T> + ?Sized,
    {
        let started = Instant::now();
        let graceful = sleep_until((started + self.graceful_timeout).min(deadline));
        let total = sleep_until(deadline);
        tokio::pin!(graceful, total);

        let endpoint_count = self.endpoints.len();
        let calls = cancel.child_token();
        let method_name: Arc<str> = Arc::from(method);
        let params: Arc<[Value]> = strip_trailing_nulls(params).into();
        let (tx, mut rx) = mpsc::channel::<Outcome<T>>(endpoint_count);

        for endpoint in &self.endpoints {
            let endpoint = endpoint.clone();
            let method = Arc::clone(&method_name);
            let params = Arc::clone(&params);
            let calls = calls.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = call_endpoint::<T>(&endpoint, &method, &params, &calls, deadline).await;
                // Receiver is gone once the call returned early.
                let _ = tx.send(outcome).await;
            });
        }
        drop(tx);

        let mut outcomes: Vec<Outcome<T>> = Vec::with_capacity(endpoint_count);
        let mut graceful_checked = false;
        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    calls.cancel();
                    return Err(SplitterError::Canceled);
                }
                received = rx.recv() => match received {
                    Some(outcome) => {
                        outcomes.push(outcome);
                        if outcomes.len() == endpoint_count {
                            break;
                        }
                    }
                    None => break,
                },
                () = &mut total => {
                    calls.cancel();
                    outcomes.resize_with(endpoint_count, || Err(UpstreamError::Timeout));
                    break;
                }
                () = &mut graceful, if !graceful_checked => {
                    graceful_checked = true;
                    if let Ok(value) = resolver.resolve(&outcomes) {
                        return Ok(value);
                    }
                }
            }
        }

        resolver.resolve(&outcomes).map_err(|e| {
            warn!(method, error = %e, "unable to resolve responses");
            SplitterError::from(e)
        })
    }

    /// [`Self::call`] with the default (most common value) resolver.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn call_default<T: WireValue>(
        &self,
        cancel: &CancellationToken,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, SplitterError> {
        self.call(cancel, &self.default_resolver, method, params).await
    }

    /// [`Self::call`] for quantity results with the resolver policy `kind`.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn call_number(
        &self,
        cancel: &CancellationToken,
        kind: ResolverKind,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Number, SplitterError> {
        self.call(cancel, self.number_resolver(kind), method, params).await
    }

    /// Quantity resolver for the policy `kind`.
    #[must_use]
    pub fn number_resolver(&self, kind: ResolverKind) -> &dyn Resolver<Number> {
        match kind {
            ResolverKind::Default => &self.default_resolver,
            ResolverKind::GasValue => &self.gas_value_resolver,
            ResolverKind::BlockNumber => &self.block_number_resolver,
        }
    }

    /// Current block height as agreed by the block-number resolver.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn block_number(&self, cancel: &CancellationToken) -> Result<Number, SplitterError> {
        self.call_number(cancel, ResolverKind::BlockNumber, "eth_blockNumber", Vec::new()).await
    }
}

/// Some nodes reject explicit `null`s in trailing optional positions.
fn strip_trailing_nulls(mut params: Vec<Value>) -> Vec<Value> {
    while params.last().is_some_and(Value::is_null) {
        params.pop();
    }
    params
}

async fn call_endpoint<T: WireValue>(
    endpoint: &Endpoint,
    method: &str,
    params: &[Value],
    cancel: &CancellationToken,
    deadline: Instant,
) -> Outcome<T> {
    let started = Instant::now();
    let call = AssertUnwindSafe(endpoint.caller().call(method, params)).catch_unwind();

    let raw = tokio::select! {
        () = cancel.cancelled() => Err(UpstreamError::Canceled),
        result = timeout_at(deadline, call) => match result {
            Err(_) => Err(UpstreamError::Timeout),
            Ok(Err(payload)) => {
                let message = panic_message(payload.as_ref());
                error!(endpoint = %endpoint.name(), method, panic = %message, "endpoint call panicked");
                Err(UpstreamError::Panic(message))
            }
            Ok(Ok(result)) => result,
        },
    };

    let outcome = raw.and_then(|value| {
        serde_json::from_value::<T>(value).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    });

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match &outcome {
        Ok(_) => info!(endpoint = %endpoint.name(), method, args = ?params, duration_ms, "call"),
        Err(e) => error!(
            endpoint = %endpoint.name(),
            method,
            args = ?params,
            duration_ms,
            error = %e,
            "call error"
        ),
    }
    outcome
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
