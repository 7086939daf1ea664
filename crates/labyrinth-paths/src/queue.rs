use std::cmp::Ordering;

use labyrinth_core::{CellIndex, Cost};

/// Open-set entry, ordered for use in a `BinaryHeap`.
///
/// The heap never removes entries in place. When a cell's cost improves a
/// fresh entry is pushed and the old one goes stale; consumers skip entries
/// whose `g` no longer matches the cell or whose cell is already closed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: CellIndex,
    /// Priority: `g + h` for A*, `g` for Dijkstra.
    pub(crate) f: Cost,
    /// `g` at push time, for staleness checks.
    pub(crate) g: Cost,
    /// Insertion counter. Equal priorities pop in insertion order.
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the smallest f,
        // then the earliest insertion.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
