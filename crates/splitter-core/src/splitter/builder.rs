//! Builder for [`Splitter`].

use std::time::Duration;

use super::{Splitter, SplitterError};
use crate::{
    resolver::{BlockNumberResolver, DefaultResolver, GasValueResolver},
    upstream::Endpoint,
};

/// Hard ceiling for one logical call.
pub const DEFAULT_TOTAL_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay after which a call may return early with the outcomes collected so far.
pub const DEFAULT_GRACEFUL_TIMEOUT: Duration = Duration::from_secs(1);

/// Agreement requirements shared by all resolver policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub min_responses: usize,
    pub max_blocks_behind: u64,
}

/// Builder for constructing a [`Splitter`].
///
/// # Examples
///
/// ```no_run
/// # use splitter_core::splitter::{Requirements, SplitterBuilder};
/// # use splitter_core::upstream::Endpoint;
/// # use std::time::Duration;
/// # fn example(endpoints: Vec<Endpoint>) -> Result<(), Box<dyn std::error::Error>> {
/// let splitter = SplitterBuilder::new()
///     .endpoints(endpoints)
///     .requirements(Requirements { min_responses: 2, max_blocks_behind: 10 })
///     .graceful_timeout(Duration::from_millis(500))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SplitterBuilder {
    endpoints: Option<Vec<Endpoint>>,
    requirements: Option<Requirements>,
    total_timeout: Option<Duration>,
    graceful_timeout: Option<Duration>,
}

impl SplitterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream endpoints (required).
    #[must_use]
    pub fn endpoints(mut self, endpoints: Vec<Endpoint>) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Sets the agreement requirements (required).
    #[must_use]
    pub fn requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = Some(requirements);
        self
    }

    /// Sets the total timeout (default: 10s).
    #[must_use]
    pub fn total_timeout(mut self, timeout: Duration) -> Self {
        self.total_timeout = Some(timeout);
        self
    }

    /// Sets the graceful timeout (default: 1s).
    #[must_use]
    pub fn graceful_timeout(mut self, timeout: Duration) -> Self {
        self.graceful_timeout = Some(timeout);
        self
    }

    /// Builds the splitter.
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::MissingEndpoints`] or [`SplitterError::MissingRequirements`]
    /// when a required option is absent, and [`SplitterError::InvalidConfig`] when the
    /// requirements or timeouts are inconsistent.
    pub fn build(self) -> Result<Splitter, SplitterError> {
        let endpoints = match self.endpoints {
            Some(endpoints) if !endpoints.is_empty() => endpoints,
            _ => return Err(SplitterError::MissingEndpoints),
        };
        let requirements = self.requirements.ok_or(SplitterError::MissingRequirements)?;
        let total_timeout = self.total_timeout.unwrap_or(DEFAULT_TOTAL_TIMEOUT);
        let graceful_timeout = self.graceful_timeout.unwrap_or(DEFAULT_GRACEFUL_TIMEOUT);

        if requirements.min_responses == 0 || requirements.min_responses > endpoints.len() {
            return Err(SplitterError::InvalidConfig(format!(
                "min responses must be between 1 and {}, got {}",
                endpoints.len(),
                requirements.min_responses
            )));
        }
        if total_timeout.is_zero() || graceful_timeout.is_zero() {
            return Err(SplitterError::InvalidConfig("timeouts must be greater than zero".into()));
        }
        if graceful_timeout > total_timeout {
            return Err(SplitterError::InvalidConfig(
                "graceful timeout must not exceed total timeout".into(),
            ));
        }

        Ok(Splitter {
            endpoints,
            total_timeout,
            graceful_timeout,
            default_resolver: DefaultResolver::new(requirements.min_responses),
            gas_value_resolver: GasValueResolver::new(requirements.min_responses),
            block_number_resolver: BlockNumberResolver::new(
                requirements.min_responses,
                requirements.max_blocks_behind,
            ),
        })
    }
}
