//! Support library for the `boruvka` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and
//! integration tests can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
