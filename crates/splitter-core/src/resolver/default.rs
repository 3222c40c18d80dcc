use super::{values, Outcome, ResolveError, Resolver};
use crate::wire::WireValue;

/// Strict most-common value.
///
/// Successful outcomes are grouped with [`WireValue::compare`]. The largest group wins if
/// it is strictly larger than every other group and has at least `min_responses` members;
/// a tie is never broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultResolver {
    min_responses: usize,
}

impl DefaultResolver {
    #[must_use]
    pub const fn new(min_responses: usize) -> Self {
        Self { min_responses }
    }

    #[must_use]
    pub const fn min_responses(&self) -> usize {
        self.min_responses
    }
}

impl<T: WireValue> Resolver<T> for DefaultResolver {
    fn resolve(&self, outcomes: &[Outcome<T>]) -> Result<T, ResolveError> {
        let successful: Vec<&T> = values(outcomes).collect();
        if successful.is_empty() || successful.len() < self.min_responses {
            return Err(ResolveError::not_enough(outcomes));
        }
        if let [only] = successful.as_slice() {
            return Ok(T::clone(only));
        }

        let mut classes: Vec<(&T, usize)> = Vec::new();
        for value in successful {
            match classes.iter_mut().find(|(representative, _)| representative.compare(value)) {
                Some((_, count)) => *count += 1,
                None => classes.push((value, 1)),
            }
        }

        let top = classes.iter().map(|(_, count)| *count).max().unwrap_or_default();
        let mut leaders = classes.iter().filter(|(_, count)| *count == top);
        match (leaders.next(), leaders.next()) {
            (Some((value, count)), None) if *count >= self.min_responses => Ok(T::clone(value)),
            _ => Err(ResolveError::different(outcomes)),
        }
    }
}
