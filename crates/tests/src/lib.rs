//! Integration tests for the RPC splitter.
//!
//! Every upstream is a local mockito server, so the whole stack runs over real HTTP:
//!
//! - `http_caller_tests`: one endpoint, request encoding and error mapping
//! - `splitter_tests`: fan-out across several mock nodes and the three resolvers
//! - `proxy_engine_tests`: method dispatch, block tag resolution, typed re-encoding
//! - `router_tests`: the axum application end to end
//! - `mock_infrastructure`: reusable mockito wrappers and response builders
//!
//! ```bash
//! cargo test --package tests
//! ```

#[cfg(test)]
mod http_caller_tests;

#[cfg(test)]
mod splitter_tests;

#[cfg(test)]
mod proxy_engine_tests;

#[cfg(test)]
mod router_tests;

/// Mock infrastructure for testing
pub mod mock_infrastructure;
