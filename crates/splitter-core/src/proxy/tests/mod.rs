#![allow(clippy::unwrap_used)]


use async_trait::async_trait;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio_util::sync::CancellationToken;

use crate::{
    proxy::ProxyEngine,
    splitter::{minimum_required_responses, Requirements, Splitter},
    types::{JsonRpcRequest, JsonRpcResponse},
    upstream::{Caller, Endpoint, UpstreamError},
};

/// Answers by method name and records every request it receives.
#[derive(Default)]
pub(super) struct ScriptedCaller {
    responses: HashMap<String, Value>,
    delay: Duration,
    requests: Mutex<Vec<(String, Vec<Value>)>>,
}

impl ScriptedCaller {
    pub(super) fn new(responses: &[(&str, Value)]) -> Arc<Self> {
        Self::delayed(responses, Duration::ZERO)
    }

    /// Answers every call only after `delay`.
    pub(super) fn delayed(responses: &[(&str, Value)], delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            responses: responses.iter().map(|(m, v)| ((*m).to_string(), v.clone())).collect(),
            delay,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn requests(&self) -> Vec<(String, Vec<Value>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Caller for ScriptedCaller {
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value, UpstreamError> {
        self.requests.lock().unwrap().push((method.to_string(), params.to_vec()));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.responses
            .get(method)
            .cloned()
            .ok_or_else(|| UpstreamError::RpcError(-32601, format!("no response for {method}")))
    }
}

pub(super) fn engine(callers: &[Arc<ScriptedCaller>]) -> ProxyEngine {
    let endpoints: Vec<Endpoint> = callers
        .iter()
        .enumerate()
        .map(|(i, caller)| Endpoint::new(format!("node-{i}"), Arc::clone(caller) as Arc<dyn Caller>))
        .collect();
    let splitter = Splitter::builder()
        .requirements(Requirements {
            min_responses: minimum_required_responses(endpoints.len()),
            max_blocks_behind: 10,
        })
        .endpoints(endpoints)
        .graceful_timeout(Duration::from_millis(100))
        .total_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    ProxyEngine::new(Arc::new(splitter))
}

pub(super) async fn request(engine: &ProxyEngine, method: &str, params: Value) -> JsonRpcResponse {
    engine
        .process_request(
            &CancellationToken::new(),
            JsonRpcRequest::new(method, Some(params), serde_json::json!(1)),
        )
        .await
}
