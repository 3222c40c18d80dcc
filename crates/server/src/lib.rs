//! HTTP surface of the RPC splitter.
//!
//! - [`cli`]: command line flags layered over [`splitter_core::config::AppConfig`]
//! - [`app`]: axum application assembly
//! - [`router`]: JSON-RPC and health handlers
//! - [`middleware`]: request ids and CORS

pub mod app;
pub mod cli;
pub mod middleware;
pub mod router;
