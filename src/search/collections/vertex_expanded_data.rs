use crate::graphs::{Cost, Graph, VertexId};

/// Remembers at which cost each vertex was last expanded.
pub trait VertexExpandedData {
    /// Marks `vertex` as expanded at `cost`. Returns `true` if it already was
    /// expanded at exactly that cost, so expanding it again would change
    /// nothing.
    fn expand(&mut self, vertex: VertexId, cost: Cost) -> bool;
}

pub struct VertexExpandedDataVec {
    expanded_at: Vec<Option<Cost>>,
}

impl VertexExpandedDataVec {
    pub fn new(graph: &Graph) -> Self {
        VertexExpandedDataVec {
            expanded_at: vec![None; graph.number_of_ids()],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: VertexId, cost: Cost) -> bool {
        let previous = self.expanded_at[vertex as usize].replace(cost);
        previous == Some(cost)
    }
}
