//! Shared test utilities for `boruvka-core`.

use boruvka_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Number of times determinism properties re-run the engine per input.
#[must_use]
pub(crate) fn repeat_count() -> u32 {
    ProptestRunProfile::load(1, false).repeats()
}

/// Builds edges from `(from, to, weight)` triples.
#[must_use]
pub(crate) fn edges(triples: &[(usize, usize, i32)]) -> Vec<Edge> {
    triples
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect()
}
