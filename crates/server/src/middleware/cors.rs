use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for browser clients: any origin, `POST`/`GET`/`OPTIONS`, any header.
#[must_use]
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
