use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Cost, VertexId};

/// Min-queue of `(vertex, accumulated cost)` entries for one search.
///
/// A vertex is queued again whenever it gets cheaper (or equally cheap), old
/// entries stay behind and are filtered by the search.
pub trait VertexCostQueue {
    fn insert(&mut self, vertex: VertexId, cost: Cost);

    /// Cheapest entry, ties in insertion order.
    fn pop(&mut self) -> Option<(VertexId, Cost)>;

    fn is_empty(&self) -> bool;
}

/// Queue backed by a `BinaryHeap`, an insertion counter breaks ties.
#[derive(Clone, Debug, Default)]
pub struct VertexCostQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Cost, u64, VertexId)>>,
    inserted: u64,
}

impl VertexCostQueueBinaryHeap {
    pub fn new() -> Self {
        VertexCostQueueBinaryHeap {
            heap: BinaryHeap::new(),
            inserted: 0,
        }
    }
}

impl VertexCostQueue for VertexCostQueueBinaryHeap {
    fn insert(&mut self, vertex: VertexId, cost: Cost) {
        self.heap.push(Reverse((cost, self.inserted, vertex)));
        self.inserted += 1;
    }

    fn pop(&mut self) -> Option<(VertexId, Cost)> {
        let Reverse((cost, _inserted, vertex)) = self.heap.pop()?;

        Some((vertex, cost))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
