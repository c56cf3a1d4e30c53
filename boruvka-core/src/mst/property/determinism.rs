//! Determinism across scan strategies and repeated runs.
//!
//! The slot tie-break depends only on `(weight, edge index)`, so a parallel
//! scan must reproduce the sequential result edge for edge, and repeated
//! parallel runs must never diverge.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::ScanStrategy;
use crate::test_utils::repeat_count;

use super::helpers::run_engine;
use super::types::MstFixture;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let baseline = run_engine(fixture, ScanStrategy::Sequential)?;

    for run in 0..repeat_count() {
        let forest = run_engine(fixture, ScanStrategy::Parallel)?;
        if forest != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: parallel result diverged from sequential baseline \
                 (total {} vs {}, {} vs {} edges, {} vs {} rounds; {})",
                forest.total_weight(),
                baseline.total_weight(),
                forest.edges().len(),
                baseline.edges().len(),
                forest.rounds(),
                baseline.rounds(),
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
