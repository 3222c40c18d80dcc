//! Consensus resolvers.
//!
//! A resolver reduces the per-endpoint outcomes of one logical call to a single value or
//! an aggregated error. Resolvers are pure functions over an unordered outcome set; the
//! fan-out engine decides *when* to call them.
//!
//! | Policy | Used for | Rule |
//! |---|---|---|
//! | [`DefaultResolver`] | everything that must agree exactly | strict most-common value |
//! | [`GasValueResolver`] | gas price, gas estimate, priority fee | lower of two, median of three or more |
//! | [`BlockNumberResolver`] | `eth_blockNumber`, tag resolution | lowest height within `max_blocks_behind` of the highest |
//!
//! Every policy first requires at least `min_responses` successful outcomes.

mod block_number;
mod default;
mod errors;
mod gas_value;

#[cfg(test)]
mod tests;

pub use block_number::BlockNumberResolver;
pub use default::DefaultResolver;
pub use errors::{ErrorList, ResolveError, DIFFERENT_RESPONSES, NOT_ENOUGH_RESPONSES};
pub use gas_value::GasValueResolver;

use crate::upstream::UpstreamError;

/// Result of calling one endpoint for one logical call.
pub type Outcome<T> = Result<T, UpstreamError>;

/// Reduces an outcome set to a single value.
pub trait Resolver<T>: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ResolveError::NotEnoughResponses`] when fewer than the required number of
    /// outcomes succeeded, or [`ResolveError::DifferentResponses`] when the successful
    /// outcomes do not reach the required agreement.
    fn resolve(&self, outcomes: &[Outcome<T>]) -> Result<T, ResolveError>;
}

/// Resolver policy attached to a JSON-RPC method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    Default,
    GasValue,
    BlockNumber,
}

impl ResolverKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::GasValue => "gas_value",
            Self::BlockNumber => "block_number",
        }
    }
}

/// Successful values of an outcome set.
fn values<T>(outcomes: &[Outcome<T>]) -> impl Iterator<Item = &T> {
    outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
}
