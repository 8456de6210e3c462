use serde::Serialize;
use tracing::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_cost_queue::{VertexCostQueue, VertexCostQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    path::Walk,
    resolve_endpoints,
};
use crate::{
    error::GraphError,
    graphs::{Cost, Graph, VertexId},
};

/// Outcome of a shortest path query.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub enum ShortestPath {
    Found(Walk),
    Unreachable,
}

impl ShortestPath {
    pub fn cost(&self) -> Option<Cost> {
        self.walk().map(|walk| walk.cost)
    }

    pub fn walk(&self) -> Option<&Walk> {
        match self {
            ShortestPath::Found(walk) => Some(walk),
            ShortestPath::Unreachable => None,
        }
    }
}

/// Single source Dijkstra that also finds the cheapest cycle back to `source`.
///
/// Relaxes on `<=` and lets the source be relaxed once while its cost is still
/// 0, so afterwards the cost of `source` is the cost of the cheapest return
/// cycle (or still 0 if there is none). A vertex is expanded at most once per
/// cost it reaches, equally cheap entries after the first are skipped.
pub fn dijkstra_with_return_cycle(
    graph: &Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexCostQueue,
    source: VertexId,
) {
    data.set_cost(source, 0);
    queue.insert(source, 0);

    while let Some((tail, cost)) = queue.pop() {
        let Some(cost_tail) = data.get_cost(tail) else {
            continue;
        };
        if cost > cost_tail || expanded.expand(tail, cost_tail) {
            continue;
        }

        for edge in graph.out_edges(tail).unwrap_or(&[]) {
            if !graph.is_registered(edge.head()) {
                continue;
            }
            let Some(alternative_cost_head) = cost_tail.checked_add(edge.cost()) else {
                continue;
            };
            let current_cost_head = data.get_cost(edge.head());
            let reopens_source = edge.head() == source && current_cost_head == Some(0);
            let improves =
                current_cost_head.map_or(true, |current| alternative_cost_head <= current);
            if improves || reopens_source {
                trace!(tail, head = edge.head(), cost = alternative_cost_head, "relaxed");
                data.set_cost(edge.head(), alternative_cost_head);
                data.set_predecessor(edge.head(), tail);
                queue.insert(edge.head(), alternative_cost_head);
            }
        }
    }
}

/// Cheapest walk from `source` to `destination`.
///
/// If both are the same vertex the answer is the cheapest cycle through it,
/// never the empty walk.
pub fn find_shortest_path(
    graph: &Graph,
    source: &str,
    destination: &str,
) -> Result<ShortestPath, GraphError> {
    let (source, destination) = resolve_endpoints(graph, source, destination)?;

    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataVec::new(graph);
    let mut queue = VertexCostQueueBinaryHeap::new();
    dijkstra_with_return_cycle(graph, &mut data, &mut expanded, &mut queue, source);

    let shortest_path = match data.get_path(source, destination) {
        Some(path) => ShortestPath::Found(Walk::from_ids(graph, &path.vertices, path.cost)),
        None => ShortestPath::Unreachable,
    };

    debug!(
        source = graph.label(source),
        destination = graph.label(destination),
        cost = shortest_path.cost(),
        "searched shortest path"
    );
    Ok(shortest_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();
        graph.add_edge("C", "A", 1).unwrap();
        graph.add_edge("A", "C", 5).unwrap();
        graph
    }

    #[test]
    fn prefers_cheaper_detour() {
        let graph = triangle();
        let path = find_shortest_path(&graph, "A", "C").unwrap();
        assert_eq!(path.walk().unwrap().route(), "A-B-C");
        assert_eq!(path.cost(), Some(2));
    }

    #[test]
    fn same_vertex_yields_cheapest_cycle() {
        let graph = triangle();
        let path = find_shortest_path(&graph, "A", "A").unwrap();
        assert_eq!(path.walk().unwrap().route(), "A-B-C-A");
        assert_eq!(path.cost(), Some(3));
    }

    #[test]
    fn source_cost_is_cycle_cost_after_search() {
        let graph = triangle();
        let source = graph.vertex_id("B").unwrap();
        let mut data = DijkstraDataVec::new(&graph);
        let mut expanded = VertexExpandedDataVec::new(&graph);
        let mut queue = VertexCostQueueBinaryHeap::new();
        dijkstra_with_return_cycle(&graph, &mut data, &mut expanded, &mut queue, source);

        assert_eq!(data.get_cost(source), Some(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn unreachable_targets() {
        let mut graph = Graph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge("A", "B", 1).unwrap();

        assert_eq!(find_shortest_path(&graph, "B", "A"), Ok(ShortestPath::Unreachable));
        assert_eq!(find_shortest_path(&graph, "A", "C"), Ok(ShortestPath::Unreachable));
        assert_eq!(find_shortest_path(&graph, "A", "A"), Ok(ShortestPath::Unreachable));
    }

    #[test]
    fn unregistered_destination_is_not_relaxed() {
        let mut graph = Graph::new();
        graph.add_vertex("A").unwrap();
        graph.add_edge("A", "X", 1).unwrap();
        assert_eq!(
            find_shortest_path(&graph, "A", "X"),
            Err(GraphError::InvalidVertex("X".to_string()))
        );
        assert_eq!(find_shortest_path(&graph, "A", "A"), Ok(ShortestPath::Unreachable));
    }

    #[test]
    fn self_loop_on_source_does_not_hide_cheaper_cycle() {
        let mut graph = Graph::new();
        for label in ["S", "N"] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge("S", "S", 5).unwrap();
        graph.add_edge("S", "N", 1).unwrap();
        graph.add_edge("N", "S", 1).unwrap();

        let to_neighbour = find_shortest_path(&graph, "S", "N").unwrap();
        assert_eq!(to_neighbour.walk().unwrap().route(), "S-N");
        assert_eq!(to_neighbour.cost(), Some(1));

        let cycle = find_shortest_path(&graph, "S", "S").unwrap();
        assert_eq!(cycle.walk().unwrap().route(), "S-N-S");
        assert_eq!(cycle.cost(), Some(2));
    }

    #[test]
    fn largest_edge_cost_is_reachable() {
        let mut graph = Graph::new();
        for label in ["A", "B"] {
            graph.add_vertex(label).unwrap();
        }
        graph.add_edge("A", "B", Cost::MAX).unwrap();
        graph.add_edge("B", "A", 1).unwrap();

        let path = find_shortest_path(&graph, "A", "B").unwrap();
        assert_eq!(path.walk().unwrap().route(), "A-B");
        assert_eq!(path.cost(), Some(Cost::MAX));
        // the cycle back to A does not fit in a cost
        assert_eq!(find_shortest_path(&graph, "A", "A"), Ok(ShortestPath::Unreachable));
    }

    struct CountingQueue {
        queue: VertexCostQueueBinaryHeap,
        pops: usize,
    }

    impl VertexCostQueue for CountingQueue {
        fn insert(&mut self, vertex: VertexId, cost: Cost) {
            self.queue.insert(vertex, cost);
        }

        fn pop(&mut self) -> Option<(VertexId, Cost)> {
            self.pops += 1;
            self.queue.pop()
        }

        fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }
    }

    /// `v0 -> {a0, b0} -> v1 -> {a1, b1} -> v2 ...`, every edge costs 1, so
    /// each `v` is reached twice at the same cost.
    fn diamond_ladder(diamonds: usize) -> Graph {
        let mut graph = Graph::new();
        graph.add_vertex("v0").unwrap();
        for i in 0..diamonds {
            let (a, b, next) = (format!("a{i}"), format!("b{i}"), format!("v{}", i + 1));
            for label in [&a, &b, &next] {
                graph.add_vertex(label).unwrap();
            }
            let current = format!("v{i}");
            graph.add_edge(&current, &a, 1).unwrap();
            graph.add_edge(&current, &b, 1).unwrap();
            graph.add_edge(&a, &next, 1).unwrap();
            graph.add_edge(&b, &next, 1).unwrap();
        }
        graph
    }

    #[test]
    fn equal_cost_branches_are_expanded_once() {
        let graph = diamond_ladder(30);
        let source = graph.vertex_id("v0").unwrap();
        let mut data = DijkstraDataVec::new(&graph);
        let mut expanded = VertexExpandedDataVec::new(&graph);
        let mut queue = CountingQueue {
            queue: VertexCostQueueBinaryHeap::new(),
            pops: 0,
        };
        dijkstra_with_return_cycle(&graph, &mut data, &mut expanded, &mut queue, source);

        assert_eq!(data.get_cost(graph.vertex_id("v30").unwrap()), Some(60));
        assert!(queue.pops <= 2 * graph.number_of_vertices() as usize + 1);

        let path = find_shortest_path(&graph, "v0", "v30").unwrap();
        assert_eq!(path.cost(), Some(60));
        assert_eq!(path.walk().unwrap().vertices.len(), 61);
    }
}
