//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately simple reference: sort by `(weight, input index)`, then
//! accept every edge that joins two trees. MST weight is unique, so the
//! oracle's total must match the engine's even when tie-breaking picks a
//! different edge set.

use crate::Edge;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the MST/forest.
    pub total_weight: i64,
    /// Number of edges in the MST/forest.
    pub edge_count: usize,
    /// Number of connected components after MST construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops are skipped; out-of-range endpoints are the caller's problem.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> SequentialMstResult {
    let mut order: Vec<usize> = (0..edges.len())
        .filter(|&index| !edges[index].is_self_loop())
        .collect();
    order.sort_by_key(|&index| (edges[index].weight(), index));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u8; vertex_count];
    let mut result = SequentialMstResult {
        total_weight: 0,
        edge_count: 0,
        component_count: vertex_count,
    };

    for index in order {
        let edge = edges[index];
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left == right {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, left, right);
        result.total_weight += i64::from(edge.weight());
        result.edge_count += 1;
        result.component_count -= 1;
    }

    result
}

/// Union by rank, breaking ties towards the smaller root index.
fn union_by_rank(parent: &mut [usize], rank: &mut [u8], left: usize, right: usize) {
    let (root, child) = match rank[left].cmp(&rank[right]) {
        std::cmp::Ordering::Greater => (left, right),
        std::cmp::Ordering::Less => (right, left),
        std::cmp::Ordering::Equal => (left.min(right), left.max(right)),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] = rank[root].saturating_add(1);
    }
}
