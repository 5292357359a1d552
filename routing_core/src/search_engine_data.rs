//! Per-query scratch space: the four heaps a bidirectional, twin-candidate
//! leg search needs.
//!
//! One instance is meant to live per worker thread and be reused across
//! queries via [`SearchEngineData::clear`], rather than reallocated per
//! request — the heap's own `clear` is already O(touched nodes), so the
//! cost of reuse is proportional to the search just performed, not to the
//! size of the graph.

use crate::query_heap::QueryHeap;

pub struct SearchEngineData {
    pub forward_heap1: QueryHeap,
    pub reverse_heap1: QueryHeap,
    pub forward_heap2: QueryHeap,
    pub reverse_heap2: QueryHeap,
}

impl SearchEngineData {
    pub fn new(node_count: usize) -> Self {
        Self {
            forward_heap1: QueryHeap::new(node_count),
            reverse_heap1: QueryHeap::new(node_count),
            forward_heap2: QueryHeap::new(node_count),
            reverse_heap2: QueryHeap::new(node_count),
        }
    }

    /// Reset all four heaps before starting a new leg.
    pub fn clear(&mut self) {
        self.forward_heap1.clear();
        self.reverse_heap1.clear();
        self.forward_heap2.clear();
        self.reverse_heap2.clear();
    }
}
