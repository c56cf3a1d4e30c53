//! Decoding of binary graph streams.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use boruvka_core::Edge;
use tracing::{Span, field, instrument, warn};

use crate::{BinaryGraphError, HEADER_LEN, RECORD_LEN};

/// A graph decoded from the binary format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    truncated_bytes: usize,
}

impl BinaryGraph {
    /// Decodes a graph from `reader`.
    ///
    /// Records are read until end of stream. A final record shorter than six
    /// bytes is discarded and its length reported by
    /// [`truncated_bytes`](Self::truncated_bytes).
    ///
    /// # Errors
    /// Returns [`BinaryGraphError::MissingHeader`] when the stream holds fewer
    /// than two bytes, [`BinaryGraphError::InvalidVertex`] for a negative or
    /// out-of-range endpoint, and [`BinaryGraphError::Io`] when reading fails.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::Edge;
    /// use boruvka_providers_binary::BinaryGraph;
    ///
    /// let bytes = [3, 0, 0, 0, 2, 0, 7, 0];
    /// let graph = BinaryGraph::from_reader(&bytes[..]).expect("valid graph");
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edges(), &[Edge::new(0, 2, 7)]);
    /// ```
    #[instrument(
        name = "loader.read",
        err,
        skip(reader),
        fields(vertex_count = field::Empty, edges = field::Empty),
    )]
    pub fn from_reader(mut reader: impl Read) -> Result<Self, BinaryGraphError> {
        let mut header = [0_u8; HEADER_LEN];
        let found = read_full(&mut reader, &mut header)?;
        if found < HEADER_LEN {
            return Err(BinaryGraphError::MissingHeader { found });
        }
        let raw_vertex_count = u16::from_le_bytes(header);
        let vertex_count = usize::from(raw_vertex_count);
        Span::current().record("vertex_count", vertex_count);

        let mut edges = Vec::new();
        let mut record = [0_u8; RECORD_LEN];
        let truncated_bytes = loop {
            let read = read_full(&mut reader, &mut record)?;
            if read < RECORD_LEN {
                break read;
            }
            edges.push(decode_record(&record, edges.len(), raw_vertex_count)?);
        };

        Span::current().record("edges", edges.len());
        if truncated_bytes > 0 {
            warn!(
                truncated_bytes,
                records = edges.len(),
                "dropping trailing partial record"
            );
        }

        Ok(Self {
            vertex_count,
            edges,
            truncated_bytes,
        })
    }

    /// Opens and decodes the graph stored at `path`.
    ///
    /// # Errors
    /// Returns [`BinaryGraphError::Open`] when the file cannot be opened, and
    /// otherwise the same errors as [`from_reader`](Self::from_reader).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BinaryGraphError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BinaryGraphError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the vertex count from the header.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the decoded edges in file order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns how many bytes of a trailing partial record were dropped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn truncated_bytes(&self) -> usize { self.truncated_bytes }

    /// Consumes the graph and returns `(vertex_count, edges)`.
    #[must_use]
    pub fn into_parts(self) -> (usize, Vec<Edge>) {
        (self.vertex_count, self.edges)
    }
}

fn decode_record(
    bytes: &[u8; RECORD_LEN],
    record: usize,
    vertex_count: u16,
) -> Result<Edge, BinaryGraphError> {
    let [f0, f1, t0, t1, w0, w1] = *bytes;
    let from = vertex(i16::from_le_bytes([f0, f1]), record, vertex_count)?;
    let to = vertex(i16::from_le_bytes([t0, t1]), record, vertex_count)?;
    let weight = i32::from(i16::from_le_bytes([w0, w1]));
    Ok(Edge::new(from, to, weight))
}

fn vertex(raw: i16, record: usize, vertex_count: u16) -> Result<usize, BinaryGraphError> {
    u16::try_from(raw)
        .ok()
        .filter(|&value| value < vertex_count)
        .map(usize::from)
        .ok_or(BinaryGraphError::InvalidVertex {
            record,
            vertex: raw,
            vertex_count,
        })
}

/// Fills `buf` from `reader`, stopping early only at end of stream.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
