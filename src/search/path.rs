use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::graphs::{Cost, Graph, VertexId};

/// A walk through the graph as returned to callers.
///
/// Vertices are reported by label, in the order they are visited, and may
/// repeat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Walk {
    pub vertices: Vec<String>,
    pub cost: Cost,
}

impl Walk {
    pub fn from_ids(graph: &Graph, vertices: &[VertexId], cost: Cost) -> Walk {
        Walk {
            vertices: vertices
                .iter()
                .map(|&vertex| graph.label(vertex).to_string())
                .collect(),
            cost,
        }
    }

    /// The walk in its dash-joined form, e.g. `A-B-E`.
    pub fn route(&self) -> String {
        self.vertices.iter().join("-")
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.route(), self.cost)
    }
}
