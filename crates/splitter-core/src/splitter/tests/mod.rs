#![allow(clippy::unwrap_used)]


use async_trait::async_trait;
use serde_json::Value;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::upstream::{Caller, Endpoint, UpstreamError};

/// Caller answering with a fixed result after a delay, recording every request.
pub(super) struct MockCaller {
    result: Result<Value, UpstreamError>,
    delay: Duration,
    requests: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockCaller {
    pub(super) fn ok(result: Value) -> Arc<Self> {
        Self::delayed(Ok(result), Duration::ZERO)
    }

    pub(super) fn err(error: UpstreamError) -> Arc<Self> {
        Self::delayed(Err(error), Duration::ZERO)
    }

    pub(super) fn delayed(result: Result<Value, UpstreamError>, delay: Duration) -> Arc<Self> {
        Arc::new(Self { result, delay, requests: Mutex::new(Vec::new()) })
    }

    pub(super) fn requests(&self) -> Vec<(String, Vec<Value>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Caller for MockCaller {
    async fn call(&self, method: &str, params: &[Value]) -> Result<Value, UpstreamError> {
        self.requests.lock().unwrap().push((method.to_string(), params.to_vec()));
        tokio::time::sleep(self.delay).await;
        self.result.clone()
    }
}

/// Caller that never answers.
pub(super) struct PendingCaller;

#[async_trait]
impl Caller for PendingCaller {
    async fn call(&self, _method: &str, _params: &[Value]) -> Result<Value, UpstreamError> {
        std::future::pending().await
    }
}

/// Caller that panics with a message that must never reach the client.
pub(super) struct PanickingCaller;

#[async_trait]
impl Caller for PanickingCaller {
    async fn call(&self, _method: &str, _params: &[Value]) -> Result<Value, UpstreamError> {
        panic!("database password is hunter2")
    }
}

pub(super) fn endpoints(callers: Vec<Arc<dyn Caller>>) -> Vec<Endpoint> {
    callers
        .into_iter()
        .enumerate()
        .map(|(i, caller)| Endpoint::new(format!("node-{i}"), caller))
        .collect()
}
