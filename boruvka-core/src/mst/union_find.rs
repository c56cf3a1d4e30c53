//! Disjoint-set forest used by the Borůvka rounds.
//!
//! `find` takes `&self` and never rewrites parent links, so a round's scan
//! phase can share the structure across worker threads while every lookup
//! resolves against the same snapshot. Only `union` mutates, and it needs
//! `&mut self`, which keeps scanning and merging in separate phases.
//!
//! Merges repoint one root at the other without rank or size bookkeeping.
//! Trees can grow unbalanced; `find` is linear in the depth of the tree.

/// Partition of `0..len` vertices into disjoint components.
///
/// # Examples
/// ```
/// use boruvka_core::DisjointSet;
///
/// let mut set = DisjointSet::new(3);
/// assert!(set.union(0, 2));
/// assert!(!set.union(2, 0));
/// assert_eq!(set.find(2), 0);
/// assert_eq!(set.root_count(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSet {
    parents: Vec<usize>,
}

impl DisjointSet {
    /// Creates a forest where every vertex is its own root.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
        }
    }

    /// Returns the number of vertices tracked by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when the forest tracks no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Returns the root of the component containing `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex >= self.len()`.
    #[must_use]
    pub fn find(&self, vertex: usize) -> usize {
        let mut current = vertex;
        loop {
            let parent = self.parents[current];
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Merges the components containing `u` and `v`.
    ///
    /// The root of `v`'s component is repointed at the root of `u`'s
    /// component. Returns `false` without mutating when both vertices already
    /// share a root.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        self.parents[root_v] = root_u;
        true
    }

    /// Returns the number of components, i.e. self-parented vertices.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(vertex, &parent)| vertex == parent)
            .count()
    }
}
