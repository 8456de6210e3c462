pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use error::GraphError;
pub use graphs::Graph;
pub use search::{
    all_paths::{all_paths, AllPathsOptions},
    dijkstra::{find_shortest_path, ShortestPath},
    path::Walk,
    route_cost::{cost_of_route, cost_of_route_str, cost_of_routes, RouteCost},
};
