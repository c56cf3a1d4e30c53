//! Benchmark support crate for the Borůvka engine.
//!
//! Provides a seeded synthetic graph generator and the parameter and error
//! types shared by the Criterion benchmarks.

pub mod error;
pub mod graph;
pub mod params;
