//! Structural invariants of the produced forest.
//!
//! - Every selected edge is an input edge and not a self-loop.
//! - The selection is acyclic.
//! - `V - C` edges are selected for `C` input components.
//! - The reported total equals the sum of the selected weights.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, ScanStrategy};

use super::helpers::{count_input_components, find_root, run_engine, total_weight};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_engine(fixture, ScanStrategy::Parallel)?;
    let selected = forest.edges();

    validate_membership(&fixture.edges, selected)?;
    validate_acyclicity(fixture.vertex_count, selected)?;

    let expected_components = count_input_components(fixture.vertex_count, &fixture.edges);
    if forest.component_count() != expected_components {
        return Err(TestCaseError::fail(format!(
            "component count {} differs from input components {expected_components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    if selected.len() != fixture.vertex_count - expected_components {
        return Err(TestCaseError::fail(format!(
            "selected {} edges, expected {} ({})",
            selected.len(),
            fixture.vertex_count - expected_components,
            fixture.describe(),
        )));
    }
    if forest.total_weight() != total_weight(selected) {
        return Err(TestCaseError::fail(format!(
            "reported total {} differs from edge sum {}",
            forest.total_weight(),
            total_weight(selected),
        )));
    }

    Ok(())
}

/// Each selected edge must be drawn from the input, counting duplicates.
fn validate_membership(input: &[Edge], selected: &[Edge]) -> TestCaseResult {
    let mut available: HashMap<Edge, usize> = HashMap::new();
    for edge in input {
        *available.entry(*edge).or_default() += 1;
    }
    for (position, edge) in selected.iter().enumerate() {
        if edge.is_self_loop() {
            return Err(TestCaseError::fail(format!(
                "edge {position}: self-loop {edge:?} selected"
            )));
        }
        match available.get_mut(edge) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(TestCaseError::fail(format!(
                    "edge {position}: {edge:?} not available in the input"
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclicity(vertex_count: usize, selected: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (position, edge) in selected.iter().enumerate() {
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {position}: {edge:?} closes a cycle"
            )));
        }
        parent[right] = left;
    }
    Ok(())
}
