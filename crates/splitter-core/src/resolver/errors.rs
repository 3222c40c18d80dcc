use std::fmt;
use thiserror::Error;

use super::Outcome;

pub const NOT_ENOUGH_RESPONSES: &str = "not enough responses from RPC servers";
pub const DIFFERENT_RESPONSES: &str = "RPC servers returned different responses";

/// Ordered list of distinct error messages.
///
/// Messages are deduplicated by text. The display form is `unknown error` when empty, the
/// message itself when there is one, and `the following errors occurred: [a, b]` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message unless an identical one is already present.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.0.contains(&message) {
            self.0.push(message);
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a list whose first entry is `marker`, followed by the distinct errors of
    /// `outcomes` in arrival order.
    pub(crate) fn with_marker<T>(marker: &str, outcomes: &[Outcome<T>]) -> Self {
        let mut list = Self::new();
        list.push(marker);
        for err in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
            list.push(err.to_string());
        }
        list
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("unknown error"),
            [single] => f.write_str(single),
            all => write!(f, "the following errors occurred: [{}]", all.join(", ")),
        }
    }
}

/// Terminal resolution failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Fewer successful outcomes than the configured minimum.
    #[error("{0}")]
    NotEnoughResponses(ErrorList),

    /// Enough outcomes, but no value reached the required agreement.
    #[error("{0}")]
    DifferentResponses(ErrorList),
}

impl ResolveError {
    pub(crate) fn not_enough<T>(outcomes: &[Outcome<T>]) -> Self {
        Self::NotEnoughResponses(ErrorList::with_marker(NOT_ENOUGH_RESPONSES, outcomes))
    }

    pub(crate) fn different<T>(outcomes: &[Outcome<T>]) -> Self {
        Self::DifferentResponses(ErrorList::with_marker(DIFFERENT_RESPONSES, outcomes))
    }

    /// Marker followed by the distinct underlying endpoint errors.
    #[must_use]
    pub fn errors(&self) -> &ErrorList {
        match self {
            Self::NotEnoughResponses(list) | Self::DifferentResponses(list) => list,
        }
    }
}
