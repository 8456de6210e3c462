use crate::{
    error::GraphError,
    graphs::{Graph, VertexId},
};

pub mod all_paths;
pub mod collections;
pub mod dijkstra;
pub mod path;
pub mod route_cost;

/// Looks up both endpoints of a query, they have to be registered vertices.
pub(crate) fn resolve_endpoints(
    graph: &Graph,
    source: &str,
    destination: &str,
) -> Result<(VertexId, VertexId), GraphError> {
    if source.is_empty() || destination.is_empty() {
        return Err(GraphError::InvalidArgument(
            "expects source and destination as non-empty labels".to_string(),
        ));
    }

    let lookup = |label: &str| {
        graph
            .vertex_id(label)
            .ok_or_else(|| GraphError::InvalidVertex(label.to_string()))
    };
    Ok((lookup(source)?, lookup(destination)?))
}
