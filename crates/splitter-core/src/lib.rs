//! # Splitter Core
//!
//! Core library of an RPC-splitting proxy: one JSON-RPC request is fanned out to every
//! configured Ethereum endpoint and the answers are reduced to a single trustworthy
//! response.
//!
//! - **[`wire`]**: hex-JSON codec for Ethereum values, with structural comparison.
//! - **[`resolver`]**: consensus policies (most common value, gas median, lag tolerant
//!   block height).
//! - **[`splitter`]**: concurrent fan-out with graceful and total timeouts.
//! - **[`proxy`]**: per-method dispatch table, parameter decoding and block tag
//!   resolution.
//! - **[`upstream`]**: the [`upstream::Caller`] seam and its HTTP implementation.
//! - **[`config`]**: layered application configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        ProxyEngine                        │
//! │  ┌──────────────┐   ┌──────────────┐   ┌───────────────┐  │
//! │  │ Method table │──►│   Splitter   │──►│   Resolvers   │  │
//! │  └──────────────┘   └──────┬───────┘   └───────────────┘  │
//! │                            │                              │
//! │              ┌─────────────┼─────────────┐                │
//! │              ▼             ▼             ▼                │
//! │         HttpCaller    HttpCaller    HttpCaller            │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! Client Request
//!       │
//!       ▼
//! ┌─────────────┐
//! │ ProxyEngine │ ─── unknown method / bad params ──► Error Response
//! └──────┬──────┘
//!        │ latest / pending?
//!        ▼
//! ┌──────────────────────┐
//! │ eth_blockNumber      │  nested fan-out, block number resolver
//! └──────┬───────────────┘
//!        ▼
//! ┌──────────────────────┐
//! │ fan-out to endpoints │  graceful timer: early resolve
//! └──────┬───────────────┘  total timer: final resolve
//!        ▼
//!   Response to Client
//! ```

pub mod config;
pub mod proxy;
pub mod resolver;
pub mod splitter;
pub mod types;
pub mod upstream;
pub mod wire;
