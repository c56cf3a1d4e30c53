//! Encoding of graphs into the binary format.

use std::io::Write;

use boruvka_core::Edge;

use crate::BinaryGraphError;

/// Writes `vertex_count` and `edges` to `writer` in the binary graph format.
///
/// # Errors
/// Returns [`BinaryGraphError::ValueOutOfRange`] when the vertex count does
/// not fit a `u16` or an edge field does not fit an `i16`; nothing is written
/// in that case. Returns [`BinaryGraphError::Io`] when writing fails.
///
/// # Examples
/// ```
/// use boruvka_core::Edge;
/// use boruvka_providers_binary::{BinaryGraph, encode_graph};
///
/// let mut bytes = Vec::new();
/// encode_graph(2, &[Edge::new(1, 0, -4)], &mut bytes).expect("encodable");
/// assert_eq!(bytes, [2, 0, 1, 0, 0, 0, 0xfc, 0xff]);
/// let graph = BinaryGraph::from_reader(bytes.as_slice()).expect("decodable");
/// assert_eq!(graph.edges(), &[Edge::new(1, 0, -4)]);
/// ```
pub fn encode_graph(
    vertex_count: usize,
    edges: &[Edge],
    mut writer: impl Write,
) -> Result<(), BinaryGraphError> {
    let header =
        u16::try_from(vertex_count).map_err(|_| out_of_range("vertex_count", vertex_count))?;

    let mut buffer = Vec::with_capacity(crate::HEADER_LEN + edges.len() * crate::RECORD_LEN);
    buffer.extend_from_slice(&header.to_le_bytes());
    for edge in edges {
        let from = i16::try_from(edge.from()).map_err(|_| out_of_range("from", edge.from()))?;
        let to = i16::try_from(edge.to()).map_err(|_| out_of_range("to", edge.to()))?;
        let weight = i16::try_from(edge.weight()).map_err(|_| weight_out_of_range(edge))?;
        buffer.extend_from_slice(&from.to_le_bytes());
        buffer.extend_from_slice(&to.to_le_bytes());
        buffer.extend_from_slice(&weight.to_le_bytes());
    }

    writer.write_all(&buffer)?;
    Ok(())
}

fn out_of_range(field: &'static str, value: usize) -> BinaryGraphError {
    BinaryGraphError::ValueOutOfRange {
        field,
        value: i64::try_from(value).unwrap_or(i64::MAX),
    }
}

fn weight_out_of_range(edge: &Edge) -> BinaryGraphError {
    BinaryGraphError::ValueOutOfRange {
        field: "weight",
        value: i64::from(edge.weight()),
    }
}
