use crate::graphs::{Cost, Graph, VertexId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
    pub cost: Cost,
}

/// Best known cost and the vertex it was reached from, per vertex of one
/// search. Unreached vertices have no cost.
pub trait DijkstraData {
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId);

    fn get_cost(&self, vertex: VertexId) -> Option<Cost>;

    fn set_cost(&mut self, vertex: VertexId, cost: Cost);

    /// Walk from `source` to `target` along the recorded predecessors.
    ///
    /// With `source == target` the walk is the recorded return cycle. `None`
    /// if `target` was never reached, or for a source whose cost is still 0
    /// because no edge leads back to it.
    fn get_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        let cost = self.get_cost(target).filter(|&cost| cost > 0)?;

        // Apart from the source every vertex costs strictly more than its
        // predecessor, so the chain ends at the source.
        let mut vertices = vec![target];
        let mut current = target;
        loop {
            current = self.get_predecessor(current)?;
            vertices.push(current);
            if current == source {
                break;
            }
        }
        vertices.reverse();

        Some(Path { vertices, cost })
    }
}

/// Costs and predecessors in vectors indexed by vertex id.
pub struct DijkstraDataVec {
    predecessors: Vec<Option<VertexId>>,
    costs: Vec<Option<Cost>>,
}

impl DijkstraDataVec {
    pub fn new(graph: &Graph) -> Self {
        DijkstraDataVec::with_ids(graph.number_of_ids())
    }

    fn with_ids(number_of_ids: usize) -> Self {
        DijkstraDataVec {
            predecessors: vec![None; number_of_ids],
            costs: vec![None; number_of_ids],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex as usize]
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors[vertex as usize] = Some(predecessor);
    }

    fn get_cost(&self, vertex: VertexId) -> Option<Cost> {
        self.costs[vertex as usize]
    }

    fn set_cost(&mut self, vertex: VertexId, cost: Cost) {
        self.costs[vertex as usize] = Some(cost);
    }
}
