//! Upstream endpoint callers.
//!
//! The fan-out engine only knows the [`Caller`] trait: one JSON-RPC call in, one raw JSON
//! result (or an [`UpstreamError`]) out. [`HttpCaller`] is the production implementation;
//! tests plug in in-process callers.

pub mod endpoint;
pub mod errors;
pub mod http_client;

pub use endpoint::{Caller, Endpoint};
pub use errors::UpstreamError;
pub use http_client::{build_client, endpoint_name, HttpCaller, HttpClientConfig};
