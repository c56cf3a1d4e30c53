pub(crate) use super::{BinaryGraph, BinaryGraphError, BinaryGraphErrorCode, encode_graph};
