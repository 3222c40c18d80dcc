use alloy_primitives::U256;

use super::{values, Outcome, ResolveError, Resolver};
use crate::wire::Number;

/// Gas price style values, which legitimately differ slightly between nodes.
///
/// With two values the lower one is used so that a single endpoint cannot inflate fees;
/// with three or more the median is used (the floor of the mean of the two middle values
/// for even counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasValueResolver {
    min_responses: usize,
}

impl GasValueResolver {
    #[must_use]
    pub const fn new(min_responses: usize) -> Self {
        Self { min_responses }
    }
}

impl Resolver<Number> for GasValueResolver {
    fn resolve(&self, outcomes: &[Outcome<Number>]) -> Result<Number, ResolveError> {
        let mut numbers: Vec<U256> = values(outcomes).map(Number::as_u256).collect();
        if numbers.is_empty() || numbers.len() < self.min_responses {
            return Err(ResolveError::not_enough(outcomes));
        }

        numbers.sort_unstable();
        let resolved = match numbers.as_slice() {
            [only] => *only,
            [lower, _] => *lower,
            sorted if sorted.len() % 2 == 1 => sorted[sorted.len() / 2],
            sorted => midpoint(sorted[sorted.len() / 2 - 1], sorted[sorted.len() / 2]),
        };
        Ok(Number::new(resolved))
    }
}

/// `(a + b) / 2` rounded down, without overflowing on values near `U256::MAX`.
fn midpoint(a: U256, b: U256) -> U256 {
    (a >> 1usize) + (b >> 1usize) + (a & b & U256::from(1u8))
}
