//! Request ids and per-request tracing spans.
//!
//! Every request gets an `x-request-id` (kept when the client sent one, otherwise a
//! fresh UUID v4). The id is echoed on the response and recorded on the request span,
//! so all fan-out events of one request can be correlated.

use axum::http::{header::HeaderValue, HeaderName, Request};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::{DefaultOnResponse, MakeSpan, TraceLayer},
};
use tracing::{Level, Span};
use uuid::Uuid;

pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// UUID v4 request id generator.
#[derive(Clone, Copy, Default)]
pub struct UuidRequestIdGenerator;

impl MakeRequestId for UuidRequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).ok()?))
    }
}

/// Opens an `http_request` span carrying the method, path and request id.
#[derive(Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(&X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            request_id = %request_id,
        )
    }
}

/// Request id layers. Apply `set` outside `propagate`:
///
/// ```ignore
/// let (set_layer, propagate_layer) = create_request_id_layers();
/// let app = Router::new()
///     .route("/", post(handler))
///     .layer(propagate_layer)
///     .layer(set_layer);
/// ```
#[must_use]
pub fn create_request_id_layers(
) -> (SetRequestIdLayer<UuidRequestIdGenerator>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::new(X_REQUEST_ID.clone(), UuidRequestIdGenerator),
        PropagateRequestIdLayer::new(X_REQUEST_ID.clone()),
    )
}

/// HTTP trace layer using [`RequestSpan`]; must run inside the request id layers.
#[must_use]
pub fn create_trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, (), DefaultOnResponse, (), ()>
{
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(())
        .on_body_chunk(())
        .on_eos(())
        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
}
