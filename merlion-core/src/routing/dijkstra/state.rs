use std::cmp::Ordering;

use crate::StopIndex;

/// Heap entry for the search frontier. Duplicate entries for the same node
/// are allowed; stale ones are filtered at pop time against the distance
/// table.
#[derive(Copy, Clone, PartialEq)]
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) node: StopIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
