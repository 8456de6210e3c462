use serde::{Deserialize, Serialize};

use super::{Cost, VertexId};

/// Outgoing edge as stored in the adjacency list of its tail.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    head: VertexId,
    cost: Cost,
}

impl Edge {
    /// Returns `None` for a zero cost, edges must be strictly positive.
    pub fn new(head: VertexId, cost: Cost) -> Option<Edge> {
        if cost == 0 {
            return None;
        }

        Some(Edge { head, cost })
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

/// Edge given by the labels of its endpoints, used to build whole graphs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabeledEdge {
    pub tail: String,
    pub head: String,
    pub cost: Cost,
}

impl LabeledEdge {
    pub fn new(tail: &str, head: &str, cost: Cost) -> LabeledEdge {
        LabeledEdge {
            tail: tail.to_string(),
            head: head.to_string(),
            cost,
        }
    }
}
