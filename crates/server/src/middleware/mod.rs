//! HTTP middleware for the RPC server.

pub mod cors;
pub mod request_id;

pub use cors::create_cors_layer;
pub use request_id::{
    create_request_id_layers, create_trace_layer, RequestSpan, UuidRequestIdGenerator,
    X_REQUEST_ID,
};
