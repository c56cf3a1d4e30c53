//! Per-round table of the cheapest outgoing edge of each component.
//!
//! Each slot is a single `AtomicU64` holding the edge weight (sign bit
//! flipped so unsigned order matches signed order) in the high half and the
//! edge's input index in the low half. `fetch_min` then performs the whole
//! "replace if strictly lower" step atomically, and equal weights resolve to
//! the lower index, i.e. the edge a sequential scan would have met first.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel for a slot that has not been offered an edge this round.
const EMPTY: u64 = u64::MAX;

const SIGN_BIT: u32 = 1 << 31;

/// Largest edge list the table can address. Index `u32::MAX` is reserved so
/// no packed key can collide with [`EMPTY`].
pub(super) const MAX_EDGES: usize = u32::MAX as usize;

pub(super) struct MinEdgeTable {
    slots: Vec<AtomicU64>,
}

impl MinEdgeTable {
    pub(super) fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| AtomicU64::new(EMPTY)).collect(),
        }
    }

    /// Records `edge_index` for `slot` if it beats the current entry.
    pub(super) fn offer(&self, slot: usize, weight: i32, edge_index: u32) {
        self.slots[slot].fetch_min(pack(weight, edge_index), Ordering::Relaxed);
    }

    /// Yields the recorded edge indices in slot order, skipping empty slots.
    ///
    /// Takes `&mut self` so every offer from the scan phase is visible.
    pub(super) fn candidates(&mut self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter_mut()
            .map(|slot| *slot.get_mut())
            .filter(|&key| key != EMPTY)
            .map(unpack_index)
    }
}

fn pack(weight: i32, edge_index: u32) -> u64 {
    let ordered_weight = weight.cast_unsigned() ^ SIGN_BIT;
    (u64::from(ordered_weight) << 32) | u64::from(edge_index)
}

fn unpack_index(key: u64) -> usize {
    // The low half is a u32, which always fits in usize on supported targets.
    (key & u64::from(u32::MAX)) as usize
}
