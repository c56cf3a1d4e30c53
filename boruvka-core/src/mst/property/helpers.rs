//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{BoruvkaBuilder, Edge, MinimumSpanningForest, ScanStrategy};

use super::types::MstFixture;

/// Path-halving find used by the verification union-finds.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Sums edge weights without overflow.
pub(super) fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(|edge| i64::from(edge.weight())).sum()
}

/// Counts connected components of the input graph.
pub(super) fn count_input_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Runs the engine on `fixture`, turning an engine error into a test failure.
pub(super) fn run_engine(
    fixture: &MstFixture,
    strategy: ScanStrategy,
) -> Result<MinimumSpanningForest, TestCaseError> {
    let engine = BoruvkaBuilder::new()
        .with_scan_strategy(strategy)
        .build()
        .map_err(|err| TestCaseError::fail(format!("config rejected: {err}")))?;
    engine
        .run(fixture.vertex_count, &fixture.edges)
        .map_err(|err| {
            TestCaseError::fail(format!(
                "{strategy:?} engine failed: {err} ({})",
                fixture.describe()
            ))
        })
}
