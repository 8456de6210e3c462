use std::fmt;

use ahash::{HashMap, HashMapExt};
use tracing::debug;

use crate::error::GraphError;

pub mod edge;
pub mod graph_functions;

use edge::{Edge, LabeledEdge};

pub type VertexId = u32;
pub type Cost = u32;

/// Directed graph of labeled vertices with ordered adjacency lists.
///
/// Labels are interned to dense [`VertexId`]s. A label can be interned without
/// being registered: an edge may point to a destination that has not been
/// added yet, and every query treats such a vertex as absent until
/// [`Graph::add_vertex`] registers it.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    labels: Vec<String>,
    ids: HashMap<String, VertexId>,
    // `None` marks an interned but unregistered label.
    out_edges: Vec<Option<Vec<Edge>>>,
    // Registration order, used by rendering.
    vertices: Vec<VertexId>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph {
            labels: Vec::new(),
            ids: HashMap::new(),
            out_edges: Vec::new(),
            vertices: Vec::new(),
        }
    }

    /// Builds a graph from labeled edges. Vertices are registered in order of
    /// first appearance, tail before head.
    pub fn from_edges(edges: &[LabeledEdge]) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        for edge in edges {
            for label in [&edge.tail, &edge.head] {
                if graph.vertex_id(label).is_none() {
                    graph.add_vertex(label)?;
                }
            }
        }
        for edge in edges {
            graph.add_edge(&edge.tail, &edge.head, edge.cost)?;
        }
        Ok(graph)
    }

    /// Registers a vertex and returns its (empty) list of outgoing edges.
    pub fn add_vertex(&mut self, label: &str) -> Result<&[Edge], GraphError> {
        if label.is_empty() {
            return Err(GraphError::InvalidArgument(
                "expects vertex as a non-empty label".to_string(),
            ));
        }
        if self.vertex_id(label).is_some() {
            return Err(GraphError::DuplicateVertex(label.to_string()));
        }

        let vertex = self.intern(label);
        self.vertices.push(vertex);
        debug!(label, vertex, "added vertex");

        let edges = self.out_edges[vertex as usize].insert(Vec::new());
        Ok(edges.as_slice())
    }

    /// Appends an edge to the adjacency list of `source` and returns that list.
    ///
    /// `source` has to be registered already. `destination` does not, see the
    /// type level documentation.
    pub fn add_edge(
        &mut self,
        source: &str,
        destination: &str,
        cost: Cost,
    ) -> Result<&[Edge], GraphError> {
        if source.is_empty() || destination.is_empty() || cost == 0 {
            return Err(GraphError::InvalidArgument(
                "expects source and destination as non-empty labels and a positive cost"
                    .to_string(),
            ));
        }
        let tail = self
            .vertex_id(source)
            .ok_or_else(|| GraphError::InvalidVertex(source.to_string()))?;
        if self
            .search_edge(source, destination)
            .is_some_and(|edges| !edges.is_empty())
        {
            return Err(GraphError::DuplicateEdge {
                tail: source.to_string(),
                head: destination.to_string(),
            });
        }

        let head = self.intern(destination);
        let edge = Edge::new(head, cost).ok_or_else(|| {
            GraphError::InvalidArgument("expects a positive cost".to_string())
        })?;
        debug!(source, destination, cost, "added edge");

        // tail is registered, checked above
        let edges = self.out_edges[tail as usize].get_or_insert_with(Vec::new);
        edges.push(edge);
        Ok(edges.as_slice())
    }

    /// Outgoing edges of a registered vertex, `None` otherwise.
    pub fn search_vertex(&self, label: &str) -> Option<&[Edge]> {
        self.out_edges(self.vertex_id(label)?)
    }

    /// The zero or one edges leading from `source` to `destination`.
    ///
    /// Only returns `None` if neither vertex is registered. An unregistered
    /// source with a registered destination yields an empty slice.
    pub fn search_edge(&self, source: &str, destination: &str) -> Option<&[Edge]> {
        let tail = self.vertex_id(source);
        if tail.is_none() && self.vertex_id(destination).is_none() {
            return None;
        }

        let edge = tail
            .zip(self.ids.get(destination))
            .and_then(|(tail, &head)| self.find_edge(tail, head));
        Some(edge.map(std::slice::from_ref).unwrap_or(&[]))
    }

    pub fn adjacent_vertices(&self, label: &str) -> Option<&[Edge]> {
        self.search_vertex(label)
    }

    /// Id of a registered vertex.
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        let &vertex = self.ids.get(label)?;
        self.is_registered(vertex).then_some(vertex)
    }

    pub fn label(&self, vertex: VertexId) -> &str {
        &self.labels[vertex as usize]
    }

    pub fn is_registered(&self, vertex: VertexId) -> bool {
        matches!(self.out_edges.get(vertex as usize), Some(Some(_)))
    }

    /// Outgoing edges of a registered vertex in insertion order.
    pub fn out_edges(&self, vertex: VertexId) -> Option<&[Edge]> {
        self.out_edges.get(vertex as usize)?.as_deref()
    }

    pub fn find_edge(&self, tail: VertexId, head: VertexId) -> Option<&Edge> {
        self.out_edges(tail)?.iter().find(|edge| edge.head() == head)
    }

    /// Registered vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn number_of_edges(&self) -> u32 {
        self.out_edges.iter().flatten().map(Vec::len).sum::<usize>() as u32
    }

    /// Upper bound (exclusive) of all ids handed out, including ids of
    /// destinations that are not registered yet.
    pub fn number_of_ids(&self) -> usize {
        self.labels.len()
    }

    /// One `source => destination (cost)` line per edge.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&vertex) = self.ids.get(label) {
            return vertex;
        }

        let vertex = self.labels.len() as VertexId;
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), vertex);
        self.out_edges.push(None);
        vertex
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tail in self.vertices() {
            for edge in self.out_edges(tail).unwrap_or(&[]) {
                writeln!(
                    f,
                    "{} => {} ({})",
                    self.label(tail),
                    self.label(edge.head()),
                    edge.cost()
                )?;
            }
        }
        Ok(())
    }
}
