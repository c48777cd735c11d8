use std::collections::HashSet;
use std::hash::Hash;

use common::error::{GraphError, Operation};
use tracing::debug;

use super::traits::Graph;

/// Determines whether adding an edge `source -> target` would introduce a
/// cycle. The graph is not modified.
///
/// The new edge closes a cycle exactly when `target` already reaches
/// `source`, i.e. when `target` is found walking backwards from `source`
/// along predecessor edges. A self-loop (`source == target`) always counts
/// as a cycle.
///
/// # Errors
/// `VertexNotFound` if either endpoint is missing (source is checked first).
pub fn creates_cycle<G, K, T>(graph: &G, source: &K, target: &K) -> Result<bool, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
{
    debug!("checking whether new edge closes a cycle");

    for endpoint in [source, target] {
        if graph.vertex(endpoint).is_none() {
            return Err(GraphError::vertex_not_found(
                Operation::CreatesCycle,
                endpoint.clone(),
            ));
        }
    }

    if source == target {
        debug!("self-loop closes a cycle");
        return Ok(true);
    }

    let predecessors = graph.predecessor_map();

    let mut stack = vec![source.clone()];
    let mut visited: HashSet<K> = HashSet::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        // `target` is an ancestor of `source`.
        if current == *target {
            debug!(visited = visited.len(), "edge would close a cycle");
            return Ok(true);
        }

        if let Some(incoming) = predecessors.get(&current) {
            stack.extend(
                incoming
                    .keys()
                    .filter(|parent| !visited.contains(*parent))
                    .cloned(),
            );
        }
    }

    debug!(visited = visited.len(), "edge keeps the graph acyclic");
    Ok(false)
}
