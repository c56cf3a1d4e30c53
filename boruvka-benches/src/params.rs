//! Benchmark parameter types.

use std::fmt;

use boruvka_core::ScanStrategy;

/// Parameters for one engine benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Mean number of edges per vertex.
    pub average_degree: usize,
    /// Scan strategy under test.
    pub strategy: ScanStrategy,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            ScanStrategy::Parallel => "parallel",
            ScanStrategy::Sequential => "sequential",
        };
        write!(
            f,
            "n={},d={},{strategy}",
            self.vertex_count, self.average_degree
        )
    }
}
