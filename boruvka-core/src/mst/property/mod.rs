//! Property-based tests for the Borůvka engine.
//!
//! Verifies the engine against a sequential Kruskal oracle, validates the
//! structural invariants of the produced forest, and checks that parallel
//! and sequential scans agree edge for edge across graph topologies with
//! varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
