//! Borůvka minimum spanning forest construction.
//!
//! Each round has two phases that never interleave:
//!
//! 1. **Scan.** Every edge whose endpoints resolve to different roots offers
//!    itself to both roots' slots in a fresh [`MinEdgeTable`]. The disjoint
//!    set is only borrowed immutably here, so every lookup in the round sees
//!    the component layout as of the round's start. With the `parallel`
//!    feature the scan fans out over rayon.
//! 2. **Merge.** On the calling thread, slots are visited in vertex order and
//!    each recorded edge is contracted unless an earlier merge in the same
//!    phase already joined its endpoints.
//!
//! The loop stops after a scan that records nothing, which happens exactly
//! when no edge crosses two components.

mod min_edge;
mod union_find;

use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, debug, field, info, instrument};

use crate::{
    Edge, ScanStrategy,
    error::{MstError, Result},
};

use self::min_edge::{MAX_EDGES, MinEdgeTable};

pub use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges are listed in the order they were merged: by round, then by the
/// index of the component root that nominated them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumSpanningForest {
    total_weight: i64,
    edges: Vec<Edge>,
    component_count: usize,
    rounds: usize,
}

impl MinimumSpanningForest {
    fn empty(vertex_count: usize) -> Self {
        Self {
            total_weight: 0,
            edges: Vec::new(),
            component_count: vertex_count,
            rounds: 0,
        }
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the selected edges in merge order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of trees in the forest, isolated vertices included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of rounds that merged at least one pair of
    /// components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Running totals of the merge phases.
struct Selection {
    total_weight: i64,
    edges: Vec<Edge>,
}

impl Selection {
    fn push(&mut self, edge: Edge) {
        self.total_weight += i64::from(edge.weight());
        self.edges.push(edge);
    }
}

#[instrument(
    name = "mst.boruvka",
    err,
    skip(edges),
    fields(edge_count = edges.len(), rounds = field::Empty),
)]
pub(crate) fn boruvka_forest(
    vertex_count: usize,
    edges: &[Edge],
    strategy: ScanStrategy,
    max_rounds: Option<NonZeroUsize>,
) -> Result<MinimumSpanningForest> {
    validate_edges(vertex_count, edges)?;
    if vertex_count == 0 || edges.is_empty() {
        return Ok(MinimumSpanningForest::empty(vertex_count));
    }

    let mut components = DisjointSet::new(vertex_count);
    let mut selection = Selection {
        total_weight: 0,
        edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
    };
    let mut rounds = 0_usize;

    loop {
        let mut table = MinEdgeTable::new(vertex_count);
        scan_round(&components, edges, &table, strategy);
        let candidates: Vec<usize> = table.candidates().collect();
        if candidates.is_empty() {
            break;
        }
        if let Some(limit) = max_rounds.filter(|limit| rounds >= limit.get()) {
            return Err(MstError::RoundLimitExceeded {
                limit,
                components: vertex_count - selection.edges.len(),
            });
        }

        rounds += 1;
        let merges = merge_round(&mut components, edges, &candidates, &mut selection);
        debug!(
            round = rounds,
            candidates = candidates.len(),
            merges,
            components = vertex_count - selection.edges.len(),
            "round finished"
        );
    }

    let component_count = vertex_count - selection.edges.len();
    Span::current().record("rounds", rounds);
    info!(
        total_weight = selection.total_weight,
        edges = selection.edges.len(),
        components = component_count,
        "minimum spanning forest complete"
    );

    Ok(MinimumSpanningForest {
        total_weight: selection.total_weight,
        edges: selection.edges,
        component_count,
        rounds,
    })
}

fn validate_edges(vertex_count: usize, edges: &[Edge]) -> Result<()> {
    if edges.len() > MAX_EDGES {
        return Err(MstError::TooManyEdges {
            edge_count: edges.len(),
            limit: MAX_EDGES,
        });
    }
    let invalid = edges.iter().enumerate().find_map(|(index, edge)| {
        [edge.from(), edge.to()]
            .into_iter()
            .find(|&vertex| vertex >= vertex_count)
            .map(|vertex| (index, vertex))
    });
    match invalid {
        Some((edge, vertex)) => Err(MstError::InvalidVertex {
            edge,
            vertex,
            vertex_count,
        }),
        None => Ok(()),
    }
}

/// Records every cross-component edge against both of its roots.
///
/// Edge indices fit in `u32` because [`validate_edges`] capped the list at
/// [`MAX_EDGES`]; zipping with a `u32` range keeps that conversion lossless.
fn scan_round(
    components: &DisjointSet,
    edges: &[Edge],
    table: &MinEdgeTable,
    strategy: ScanStrategy,
) {
    let offer = |(edge, index): (&Edge, u32)| offer_edge(components, table, edge, index);
    match strategy {
        #[cfg(feature = "parallel")]
        ScanStrategy::Parallel => edges
            .par_iter()
            .zip((0..u32::MAX).into_par_iter())
            .for_each(offer),
        #[cfg(not(feature = "parallel"))]
        ScanStrategy::Parallel => edges.iter().zip(0..u32::MAX).for_each(offer),
        ScanStrategy::Sequential => edges.iter().zip(0..u32::MAX).for_each(offer),
    }
}

fn offer_edge(components: &DisjointSet, table: &MinEdgeTable, edge: &Edge, index: u32) {
    let root_from = components.find(edge.from());
    let root_to = components.find(edge.to());
    if root_from == root_to {
        return;
    }
    table.offer(root_from, edge.weight(), index);
    table.offer(root_to, edge.weight(), index);
}

/// Contracts the nominated edges in slot order and returns the merge count.
fn merge_round(
    components: &mut DisjointSet,
    edges: &[Edge],
    candidates: &[usize],
    selection: &mut Selection,
) -> usize {
    let mut merges = 0;
    for &index in candidates {
        let edge = edges[index];
        // Two components that nominated the same edge only pay for it once.
        if components.union(edge.from(), edge.to()) {
            selection.push(edge);
            merges += 1;
        }
    }
    merges
}

#[cfg(test)]
mod property;
