use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use splitter_core::{config::ServerConfig, proxy::ProxyEngine};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::{middleware, router};

/// Assembles the HTTP application.
///
/// `POST /` serves JSON-RPC, `GET /health` the liveness probe. Layers from the inside
/// out: body limit, tracing span, request id propagation, request id assignment and,
/// when enabled, CORS.
pub fn create_app(proxy_engine: Arc<ProxyEngine>, server: &ServerConfig) -> Router {
    let (set_request_id, propagate_request_id) = middleware::create_request_id_layers();

    let app = Router::new()
        .route("/", post(router::handle_rpc))
        .route("/health", get(router::handle_health))
        .with_state(proxy_engine)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server.max_body_bytes))
        .layer(middleware::create_trace_layer())
        .layer(propagate_request_id)
        .layer(set_request_id);

    if server.enable_cors {
        app.layer(middleware::create_cors_layer())
    } else {
        app
    }
}
