use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{path::Walk, resolve_endpoints};
use crate::{
    error::GraphError,
    graphs::{Cost, Graph, VertexId},
};

/// Constraints of [`all_paths`].
///
/// Deserializes from a JSON object with camelCase keys, a key that is absent
/// keeps its default. Any other JSON value is rejected, also a positional
/// array that serde would otherwise accept for a struct.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AllPathsOptions {
    /// A walk is only extended while it has at most this many vertices.
    pub max_stop: usize,
    /// Recorded walks must cost less than this. Only applies if
    /// `allow_same_route` is set.
    pub max_cost: Cost,
    /// Keep extending walks after they reached the destination.
    pub allow_same_route: bool,
}

impl Default for AllPathsOptions {
    fn default() -> Self {
        AllPathsOptions {
            max_stop: 20,
            max_cost: 20,
            allow_same_route: false,
        }
    }
}

impl AllPathsOptions {
    pub fn from_json(json: &str) -> Result<AllPathsOptions, GraphError> {
        let malformed = |error: serde_json::Error| {
            GraphError::InvalidArgument(format!("malformed options: {}", error))
        };

        match serde_json::from_str::<Value>(json).map_err(malformed)? {
            value @ Value::Object(_) => serde_json::from_value(value).map_err(malformed),
            other => Err(GraphError::InvalidArgument(format!(
                "malformed options: expects a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn max_stop(mut self, max_stop: usize) -> Self {
        self.max_stop = max_stop;
        self
    }

    pub fn max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = max_cost;
        self
    }

    pub fn allow_same_route(mut self, allow_same_route: bool) -> Self {
        self.allow_same_route = allow_same_route;
        self
    }
}

struct Frame {
    vertex: VertexId,
    cost: Cost,
    next_edge: usize,
}

/// Depth first enumeration with an explicit stack. `path[i]` belongs to
/// `frames[i]` for every vertex that is being extended.
struct PathEnumerator<'a> {
    graph: &'a Graph,
    destination: VertexId,
    options: &'a AllPathsOptions,
    path: Vec<VertexId>,
    frames: Vec<Frame>,
    walks: Vec<Walk>,
}

impl<'a> PathEnumerator<'a> {
    fn run(mut self, source: VertexId) -> Vec<Walk> {
        let graph = self.graph;
        self.visit(source, 0);

        while let Some(frame) = self.frames.last_mut() {
            let edges = graph.out_edges(frame.vertex).unwrap_or(&[]);
            match edges.get(frame.next_edge) {
                Some(edge) => {
                    frame.next_edge += 1;
                    // walks whose cost no longer fits are not continued
                    if let Some(cost) = frame.cost.checked_add(edge.cost()) {
                        self.visit(edge.head(), cost);
                    }
                }
                None => {
                    self.frames.pop();
                    self.path.pop();
                }
            }
        }

        self.walks
    }

    /// Appends `vertex` to the walk, records the walk if it qualifies and
    /// either opens a frame to extend it or takes the vertex off again.
    fn visit(&mut self, vertex: VertexId, cost: Cost) {
        self.path.push(vertex);

        let arrived = vertex == self.destination && cost > 0;
        let extend = if self.options.allow_same_route {
            if arrived && cost < self.options.max_cost {
                self.record(cost);
            }
            true
        } else if arrived {
            self.record(cost);
            false
        } else {
            true
        };

        // unregistered vertices have no edges and are dead ends
        if extend
            && self.path.len() <= self.options.max_stop
            && self.graph.is_registered(vertex)
        {
            self.frames.push(Frame {
                vertex,
                cost,
                next_edge: 0,
            });
        } else {
            self.path.pop();
        }
    }

    fn record(&mut self, cost: Cost) {
        self.walks.push(Walk::from_ids(self.graph, &self.path, cost));
    }
}

/// All walks from `source` to `destination` that satisfy `options`.
///
/// Walks may revisit vertices and edges. Without `allow_same_route` a walk ends
/// as soon as it reaches the destination, with it walks keep going and every
/// arrival below `max_cost` is recorded.
pub fn all_paths(
    graph: &Graph,
    source: &str,
    destination: &str,
    options: &AllPathsOptions,
) -> Result<Vec<Walk>, GraphError> {
    let (source, destination) = resolve_endpoints(graph, source, destination)?;

    let walks = PathEnumerator {
        graph,
        destination,
        options,
        path: Vec::new(),
        frames: Vec::new(),
        walks: Vec::new(),
    }
    .run(source);

    debug!(
        source = graph.label(source),
        destination = graph.label(destination),
        walks = walks.len(),
        "enumerated walks"
    );
    Ok(walks)
}
