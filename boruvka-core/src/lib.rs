//! Borůvka minimum spanning forest core library.
//!
//! Given a vertex count and a list of weighted undirected edges, the engine
//! repeatedly contracts every component's cheapest outgoing edge until no
//! component has one left, yielding a minimum spanning tree per connected
//! component of the input.
//!
//! ```
//! use boruvka_core::{Edge, minimum_spanning_forest};
//!
//! let edges = [
//!     Edge::new(0, 1, 1),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(0, 3, 10),
//! ];
//! let forest = minimum_spanning_forest(4, &edges).expect("valid graph");
//! assert_eq!(forest.total_weight(), 6);
//! assert_eq!(forest.edges().len(), 3);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod engine;
mod error;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{BoruvkaBuilder, ScanStrategy},
    edge::Edge,
    engine::{Boruvka, minimum_spanning_forest},
    error::{ConfigError, ConfigErrorCode, MstError, MstErrorCode, Result},
    mst::{DisjointSet, MinimumSpanningForest},
};
