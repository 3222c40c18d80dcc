//! Fan-out call engine.
//!
//! A [`Splitter`] sends one logical JSON-RPC call to every configured [`Endpoint`]
//! concurrently and reduces the per-endpoint outcomes with a [`Resolver`].
//!
//! ```text
//!                ┌──────────┐
//!  call(method) ─►│ Splitter │── spawn ──► endpoint 0 ─┐
//!                └────┬─────┘── spawn ──► endpoint 1 ─┤ mpsc (index, outcome)
//!                     │        ── spawn ──► endpoint n ─┘
//!                     ▼
//!      graceful timer: try resolve, return on success
//!      all answered / total timer: final resolve
//! ```
//!
//! [`Endpoint`]: crate::upstream::Endpoint
//! [`Resolver`]: crate::resolver::Resolver

pub mod builder;
pub mod engine;
pub mod errors;

#[cfg(test)]
mod tests;

pub use builder::{Requirements, SplitterBuilder, DEFAULT_GRACEFUL_TIMEOUT, DEFAULT_TOTAL_TIMEOUT};
pub use engine::{minimum_required_responses, Splitter};
pub use errors::SplitterError;
