//! Seeded synthetic graphs for benchmarking.
//!
//! A generated graph is a random spanning path, so it is always connected,
//! plus uniformly random extra edges until the requested average degree is
//! reached. Weights are drawn from the full `i16` range so the graphs can
//! also be written in the binary format.

use boruvka_core::Edge;
use boruvka_providers_binary::{BinaryGraphError, encode_graph};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Largest vertex id the binary format can store.
const MAX_VERTICES: usize = 1 << 15;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Mean number of edges per vertex; at least one.
    pub average_degree: usize,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised by [`SyntheticGraph::generate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntheticError {
    /// At least two vertices are needed to place an edge.
    #[error("vertex_count must be at least 2 (got {got})")]
    TooFewVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// Vertex ids must fit the 16-bit binary format.
    #[error("vertex_count must be at most {MAX_VERTICES} (got {got})")]
    TooManyVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// The average degree must be positive.
    #[error("average_degree must be at least 1")]
    ZeroDegree,
}

/// A generated graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is out of range.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let SyntheticConfig {
            vertex_count,
            average_degree,
            seed,
        } = *config;
        if vertex_count < 2 {
            return Err(SyntheticError::TooFewVertices { got: vertex_count });
        }
        if vertex_count > MAX_VERTICES {
            return Err(SyntheticError::TooManyVertices { got: vertex_count });
        }
        if average_degree == 0 {
            return Err(SyntheticError::ZeroDegree);
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..vertex_count).collect();
        order.shuffle(&mut rng);

        let target = vertex_count.saturating_mul(average_degree);
        let mut edges = Vec::with_capacity(target.max(vertex_count));
        for pair in order.windows(2) {
            if let [from, to] = *pair {
                edges.push(Edge::new(from, to, random_weight(&mut rng)));
            }
        }
        while edges.len() < target {
            let from = rng.gen_range(0..vertex_count);
            let to = rng.gen_range(0..vertex_count);
            edges.push(Edge::new(from, to, random_weight(&mut rng)));
        }
        edges.shuffle(&mut rng);

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Encodes the graph in the binary format.
    ///
    /// # Errors
    /// Returns [`BinaryGraphError`] if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BinaryGraphError> {
        let mut bytes = Vec::new();
        encode_graph(self.vertex_count, &self.edges, &mut bytes)?;
        Ok(bytes)
    }
}

fn random_weight(rng: &mut SmallRng) -> i32 {
    i32::from(rng.r#gen::<i16>())
}
