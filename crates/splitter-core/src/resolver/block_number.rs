use alloy_primitives::U256;

use super::{values, Outcome, ResolveError, Resolver};
use crate::wire::Number;

/// Lag tolerant block height.
///
/// Returns the lowest reported height that is no more than `max_blocks_behind` below the
/// highest one. Slightly lagging nodes are tolerated while far-behind (possibly
/// compromised) nodes are ignored, without requiring agreement on the exact tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockNumberResolver {
    min_responses: usize,
    max_blocks_behind: u64,
}

impl BlockNumberResolver {
    #[must_use]
    pub const fn new(min_responses: usize, max_blocks_behind: u64) -> Self {
        Self { min_responses, max_blocks_behind }
    }

    #[must_use]
    pub const fn max_blocks_behind(&self) -> u64 {
        self.max_blocks_behind
    }
}

impl Resolver<Number> for BlockNumberResolver {
    fn resolve(&self, outcomes: &[Outcome<Number>]) -> Result<Number, ResolveError> {
        let numbers: Vec<U256> = values(outcomes).map(Number::as_u256).collect();
        let Some(high) = numbers.iter().max().copied() else {
            return Err(ResolveError::not_enough(outcomes));
        };
        if numbers.len() < self.min_responses {
            return Err(ResolveError::not_enough(outcomes));
        }

        let floor = high.saturating_sub(U256::from(self.max_blocks_behind));
        let lowest = numbers.into_iter().filter(|n| *n >= floor).min().unwrap_or(high);
        Ok(Number::new(lowest))
    }
}
