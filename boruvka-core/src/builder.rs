//! Builder utilities for configuring the Borůvka engine.
//!
//! Exposes the scan strategy selection surface and the validation performed
//! before constructing [`Boruvka`] instances.

use std::num::NonZeroUsize;

use crate::{engine::Boruvka, error::ConfigError};

/// Selects how a round's scan phase walks the edge list.
///
/// Both strategies produce identical forests for the same input: slot updates
/// keep the lowest `(weight, edge index)` pair, which does not depend on the
/// order in which workers visit edges.
///
/// # Examples
/// ```
/// use boruvka_core::ScanStrategy;
///
/// assert_eq!(ScanStrategy::default(), ScanStrategy::Parallel);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Fan the scan out over the rayon thread pool. Falls back to a
    /// sequential scan when the `parallel` feature is disabled.
    #[default]
    Parallel,
    /// Scan edges one by one on the calling thread.
    Sequential,
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ScanStrategy};
///
/// let engine = BoruvkaBuilder::new()
///     .with_scan_strategy(ScanStrategy::Sequential)
///     .with_max_rounds(32)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.scan_strategy(), ScanStrategy::Sequential);
/// assert_eq!(engine.max_rounds().map(|limit| limit.get()), Some(32));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoruvkaBuilder {
    scan_strategy: ScanStrategy,
    max_rounds: Option<usize>,
}

impl BoruvkaBuilder {
    /// Creates a builder with the parallel scan and no round limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scan strategy.
    #[must_use]
    pub const fn with_scan_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.scan_strategy = strategy;
        self
    }

    /// Returns the configured scan strategy.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.scan_strategy
    }

    /// Caps the number of merging rounds.
    ///
    /// A connected graph on `n` vertices converges within `ceil(log2 n)`
    /// merging rounds, so the cap only matters as a guard against misuse.
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Returns the configured round cap, if any.
    #[must_use]
    pub const fn max_rounds(&self) -> Option<usize> {
        self.max_rounds
    }

    /// Validates the configuration and constructs a [`Boruvka`] engine.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRoundLimit`] when the round cap is zero.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, ConfigError};
    ///
    /// let err = BoruvkaBuilder::new().with_max_rounds(0).build().unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidRoundLimit { got: 0 });
    /// ```
    pub fn build(self) -> Result<Boruvka, ConfigError> {
        let max_rounds = match self.max_rounds {
            None => None,
            Some(got) => {
                Some(NonZeroUsize::new(got).ok_or(ConfigError::InvalidRoundLimit { got })?)
            }
        };
        Ok(Boruvka::new(self.scan_strategy, max_rounds))
    }
}
