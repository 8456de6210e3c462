use crate::{
    error::GraphError,
    graphs::{edge::LabeledEdge, Graph},
};

/// Edges of the delivery network used by the demo and the tests.
pub const REFERENCE_EDGES: [(&str, &str, u32); 10] = [
    ("A", "B", 1),
    ("A", "C", 4),
    ("A", "D", 10),
    ("B", "E", 3),
    ("C", "D", 4),
    ("C", "F", 2),
    ("D", "E", 1),
    ("E", "B", 3),
    ("E", "A", 2),
    ("F", "D", 1),
];

/// The six vertex delivery network `A` to `F`.
pub fn reference_graph() -> Result<Graph, GraphError> {
    let edges: Vec<_> = REFERENCE_EDGES
        .iter()
        .map(|&(tail, head, cost)| LabeledEdge::new(tail, head, cost))
        .collect();
    Graph::from_edges(&edges)
}
