//! Loader for the 16-bit binary graph format.
//!
//! A graph file is a little-endian `u16` vertex count followed by records of
//! three little-endian `i16` values: `from`, `to` and `weight`. Records run
//! until end of stream; a trailing partial record is dropped with a warning.

mod encoder;
mod errors;
mod reader;

pub use encoder::encode_graph;
pub use errors::{BinaryGraphError, BinaryGraphErrorCode};
pub use reader::BinaryGraph;

/// Size in bytes of the vertex-count header.
pub const HEADER_LEN: usize = 2;
/// Size in bytes of one `(from, to, weight)` record.
pub const RECORD_LEN: usize = 6;

#[cfg(test)]
mod tests;
