//! Entry points for running the Borůvka engine.

use std::num::NonZeroUsize;

use crate::{
    Edge, MinimumSpanningForest, ScanStrategy, error::Result, mst::boruvka_forest,
};

/// Configured Borůvka engine.
///
/// Engines hold no state between runs; the disjoint set and the per-round
/// tables live only for the duration of [`Boruvka::run`].
///
/// # Examples
/// ```
/// use boruvka_core::{Boruvka, Edge};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 5)];
/// let forest = Boruvka::default().run(3, &edges).expect("valid graph");
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boruvka {
    scan_strategy: ScanStrategy,
    max_rounds: Option<NonZeroUsize>,
}

impl Boruvka {
    pub(crate) const fn new(scan_strategy: ScanStrategy, max_rounds: Option<NonZeroUsize>) -> Self {
        Self {
            scan_strategy,
            max_rounds,
        }
    }

    /// Returns the scan strategy used by [`Boruvka::run`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn scan_strategy(&self) -> ScanStrategy { self.scan_strategy }

    /// Returns the round cap, if one was configured.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_rounds(&self) -> Option<NonZeroUsize> { self.max_rounds }

    /// Computes the minimum spanning forest of an undirected graph on
    /// `vertex_count` vertices.
    ///
    /// Self-loops and parallel edges are accepted; self-loops never join
    /// anything. Among equal-weight candidates for the same component the
    /// edge listed first wins, so the selected edge set is deterministic for a
    /// given input order.
    ///
    /// # Errors
    /// Returns an error when:
    /// - an edge references a vertex `>= vertex_count`
    /// - the edge list exceeds the supported length
    /// - a round cap is configured and the forest has not converged within it
    pub fn run(&self, vertex_count: usize, edges: &[Edge]) -> Result<MinimumSpanningForest> {
        boruvka_forest(vertex_count, edges, self.scan_strategy, self.max_rounds)
    }
}

/// Computes a minimum spanning forest with the default engine configuration.
///
/// # Errors
/// Returns [`crate::MstError::InvalidVertex`] when an edge references a vertex
/// `>= vertex_count`, and [`crate::MstError::TooManyEdges`] for edge lists
/// beyond the supported length.
///
/// # Examples
/// ```
/// use boruvka_core::{Edge, minimum_spanning_forest};
///
/// let forest = minimum_spanning_forest(4, &[Edge::new(0, 1, 4)]).expect("valid graph");
/// assert_eq!(forest.edges(), &[Edge::new(0, 1, 4)]);
/// assert_eq!(forest.component_count(), 3);
/// ```
pub fn minimum_spanning_forest(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<MinimumSpanningForest> {
    Boruvka::default().run(vertex_count, edges)
}
