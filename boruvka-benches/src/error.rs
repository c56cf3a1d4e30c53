//! Benchmark setup error type.

use boruvka_core::{ConfigError, MstError};
use boruvka_providers_binary::BinaryGraphError;

use crate::graph::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The engine configuration was rejected.
    #[error("engine configuration failed: {0}")]
    Config(#[from] ConfigError),
    /// The engine rejected the generated graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Encoding or decoding the binary graph failed.
    #[error("binary graph encoding failed: {0}")]
    Encoding(#[from] BinaryGraphError),
}
