use std::fmt;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    error::GraphError,
    graphs::{Cost, Graph},
};

/// Outcome of costing an explicit route.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum RouteCost {
    Cost(Cost),
    NoSuchRoute,
}

impl RouteCost {
    pub fn cost(&self) -> Option<Cost> {
        match self {
            RouteCost::Cost(cost) => Some(*cost),
            RouteCost::NoSuchRoute => None,
        }
    }
}

impl fmt::Display for RouteCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteCost::Cost(cost) => write!(f, "{}", cost),
            RouteCost::NoSuchRoute => write!(f, "No Such Route"),
        }
    }
}

/// Sums the edge costs along `route`.
///
/// Returns [`RouteCost::NoSuchRoute`] if the first stop is not a vertex or a
/// leg of the route has no edge, and [`GraphError::CostOverflow`] if the sum
/// does not fit in a [`Cost`].
pub fn cost_of_route<S: AsRef<str>>(graph: &Graph, route: &[S]) -> Result<RouteCost, GraphError> {
    if route.len() < 2 {
        return Err(GraphError::InvalidArgument(format!(
            "route needs at least two stops, got {}",
            route.len()
        )));
    }

    let Some(mut tail) = graph.vertex_id(route[0].as_ref()) else {
        return Ok(RouteCost::NoSuchRoute);
    };

    let mut cost: Cost = 0;
    for stop in &route[1..] {
        let edge = graph
            .search_edge(graph.label(tail), stop.as_ref())
            .and_then(<[_]>::first);
        let Some(edge) = edge else {
            return Ok(RouteCost::NoSuchRoute);
        };
        cost = cost.checked_add(edge.cost()).ok_or_else(|| {
            GraphError::CostOverflow(route.iter().map(|stop| stop.as_ref()).join("-"))
        })?;
        tail = edge.head();
    }

    Ok(RouteCost::Cost(cost))
}

/// Costs a route written with `-` between the stops, e.g. `A-B-E`.
pub fn cost_of_route_str(graph: &Graph, route: &str) -> Result<RouteCost, GraphError> {
    let stops: Vec<&str> = route.split('-').collect();
    if stops.len() < 2 {
        return Err(GraphError::InvalidArgument(format!(
            "invalid route {:?}, expects stops joined by \"-\" like \"A-B-C-D\"",
            route
        )));
    }
    cost_of_route(graph, &stops)
}

/// Costs every route independently, in parallel. Results keep the input order.
pub fn cost_of_routes<R, S>(graph: &Graph, routes: &[R]) -> Vec<Result<RouteCost, GraphError>>
where
    R: AsRef<[S]> + Sync,
    S: AsRef<str>,
{
    routes
        .par_iter()
        .map(|route| cost_of_route(graph, route.as_ref()))
        .collect()
}
