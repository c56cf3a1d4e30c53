//! Weighted undirected edge as handed to the engine.

/// A single undirected, weighted edge.
///
/// Edges keep the orientation they were supplied with; the engine never
/// canonicalises endpoints, so selected edges can be reported verbatim.
///
/// # Examples
/// ```
/// use boruvka_core::Edge;
///
/// let edge = Edge::new(2, 0, -7);
/// assert_eq!((edge.from(), edge.to(), edge.weight()), (2, 0, -7));
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: usize,
    to: usize,
    weight: i32,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: i32) -> Self {
        Self { from, to, weight }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
