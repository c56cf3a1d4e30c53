//! Oracle equivalence.
//!
//! For any generated graph the engine must agree with the sequential Kruskal
//! oracle on total weight, edge count, and component count. The selected edge
//! sets may differ when weights tie; the totals may not.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::ScanStrategy;

use super::helpers::run_engine;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_engine(fixture, ScanStrategy::Parallel)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: engine={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: engine={}, oracle={} ({})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: engine={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}
