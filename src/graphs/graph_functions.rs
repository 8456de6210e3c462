use super::{Cost, Graph};
use crate::search::path::Walk;

/// Check that a walk really exists in the graph and costs what it claims.
pub fn validate_walk(graph: &Graph, walk: &Walk) -> Result<(), String> {
    if walk.vertices.len() < 2 {
        return Err(format!("walk {} has less than two vertices", walk));
    }

    // check if there is an edge between consecutive walk vertices.
    let mut true_cost: Cost = 0;
    for (tail, head) in walk.vertices.iter().zip(walk.vertices.iter().skip(1)) {
        let edge = graph
            .search_edge(tail, head)
            .and_then(<[_]>::first)
            .ok_or_else(|| format!("no edge between {} and {} found", tail, head))?;
        true_cost = true_cost
            .checked_add(edge.cost())
            .ok_or_else(|| format!("cost of walk {} overflows", walk.route()))?;
    }

    // check if total cost of walk is correct.
    if walk.cost != true_cost {
        return Err(format!(
            "wrong walk cost, {} claims {} but edges sum to {}",
            walk.route(),
            walk.cost,
            true_cost
        ));
    }

    Ok(())
}
