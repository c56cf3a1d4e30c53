use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Errors raised while decoding or encoding a binary graph.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BinaryGraphError {
    /// The stream ended before the two-byte vertex count.
    #[error("graph header is missing: expected 2 bytes, found {found}")]
    MissingHeader {
        /// Number of header bytes actually present.
        found: usize,
    },
    /// A record named a vertex outside `0..vertex_count`.
    #[error("record {record} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// Zero-based record position.
        record: usize,
        /// The offending endpoint as stored in the file.
        vertex: i16,
        /// Vertex count from the header.
        vertex_count: u16,
    },
    /// A value handed to the encoder does not fit its 16-bit field.
    #[error("{field} value {value} does not fit in 16 bits")]
    ValueOutOfRange {
        /// Which field overflowed.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading or writing the stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Stable codes describing [`BinaryGraphError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum BinaryGraphErrorCode {
    /// The vertex-count header is missing or short.
    MissingHeader,
    /// A record references a vertex outside the graph.
    InvalidVertex,
    /// A value does not fit the 16-bit encoding.
    ValueOutOfRange,
    /// The input file could not be opened.
    Open,
    /// The stream failed mid-read or mid-write.
    Io,
}

impl BinaryGraphErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeader => "GRAPH_MISSING_HEADER",
            Self::InvalidVertex => "GRAPH_INVALID_VERTEX",
            Self::ValueOutOfRange => "GRAPH_VALUE_OUT_OF_RANGE",
            Self::Open => "GRAPH_OPEN_FAILED",
            Self::Io => "GRAPH_IO",
        }
    }
}

impl fmt::Display for BinaryGraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BinaryGraphError {
    /// Retrieve the stable [`BinaryGraphErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> BinaryGraphErrorCode {
        match self {
            Self::MissingHeader { .. } => BinaryGraphErrorCode::MissingHeader,
            Self::InvalidVertex { .. } => BinaryGraphErrorCode::InvalidVertex,
            Self::ValueOutOfRange { .. } => BinaryGraphErrorCode::ValueOutOfRange,
            Self::Open { .. } => BinaryGraphErrorCode::Open,
            Self::Io(_) => BinaryGraphErrorCode::Io,
        }
    }
}
