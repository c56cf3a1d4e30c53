//! Strategy builders for MST property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so a failing proptest
//! case can be replayed as a fixed rstest case from its distribution and
//! seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;
/// Weight range for continuous-style weights.
const WEIGHT_RANGE: std::ops::RangeInclusive<i32> = -1_000..=1_000;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Adds each unordered vertex pair with probability `edge_probability`,
/// orienting the pair randomly so the engine never sees canonical input.
fn probabilistic_edges(
    rng: &mut SmallRng,
    vertex_count: usize,
    edge_probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> i32,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                edges.push(oriented(rng, i, j, w));
            }
        }
    }
    if edges.is_empty() && vertex_count >= 2 {
        let w = weight(rng);
        edges.push(Edge::new(0, 1, w));
    }
    edges
}

fn oriented(rng: &mut SmallRng, a: usize, b: usize, weight: i32) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

// ── Distributions ───────────────────────────────────────────────────────

fn generate_unique_weights(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.2..=0.6);
    let mut edges = probabilistic_edges(rng, vertex_count, probability, |_| 0);
    let mut weights: Vec<i32> = (0..).take(edges.len()).collect();
    weights.shuffle(rng);
    for (edge, weight) in edges.iter_mut().zip(weights) {
        *edge = Edge::new(edge.from(), edge.to(), weight - 500);
    }
    (vertex_count, edges)
}

/// The most important stress case: whole groups of candidates tie, so the
/// slot tie-break decides which edges survive.
fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.3..=0.7);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i32> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let edges = probabilistic_edges(rng, vertex_count, probability, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    (vertex_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(WEIGHT_RANGE)))
        .collect();

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            edges.push(Edge::new(i, j, rng.gen_range(WEIGHT_RANGE)));
        }
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let edges = probabilistic_edges(rng, vertex_count, probability, |r| {
        r.gen_range(WEIGHT_RANGE)
    });
    (vertex_count, edges)
}

/// Two to five components of 1-12 vertices with no edges between them.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let probability = rng.gen_range(0.3..=0.8);
        let component = probabilistic_edges(rng, size, probability, |r| r.gen_range(WEIGHT_RANGE));
        edges.extend(
            component
                .into_iter()
                .map(|edge| Edge::new(edge.from() + offset, edge.to() + offset, edge.weight())),
        );
        offset += size;
    }
    edges.shuffle(rng);
    (offset, edges)
}

fn generate_multigraph(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_count = rng.gen_range(vertex_count..=vertex_count * 3);
    let edges = (0..edge_count)
        .map(|_| {
            let from = rng.gen_range(0..vertex_count);
            // Roughly one edge in eight is a self-loop.
            let to = if rng.gen_ratio(1, 8) {
                from
            } else {
                rng.gen_range(0..vertex_count)
            };
            Edge::new(from, to, rng.gen_range(-20..=20))
        })
        .collect();
    (vertex_count, edges)
}

// Biased towards ties and multigraphs, the cases most likely to expose a
// double-counted or lost slot update.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            3 => Just(Self::Multigraph),
        ]
        .boxed()
    }
}
