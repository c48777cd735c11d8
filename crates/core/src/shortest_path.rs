use std::collections::HashMap;
use std::hash::Hash;

use common::error::{ErrorKind, GraphError, Operation};
use common::types::{AdjacencyMap, WeightedPath};
use tracing::{debug, trace};

use super::queue::MinPriorityQueue;
use super::traits::{Graph, PriorityQueue};

/// Computes a minimum-weight path from `source` to `target`.
///
/// Returns the hashes of the vertices forming the path, both endpoints
/// included. Should there be several shortest paths, an arbitrary one is
/// returned. See [`shortest_path_with_weight`] for the algorithm.
///
/// # Errors
/// - `VertexNotFound` if either endpoint is missing.
/// - `NegativeWeight` if a weighted graph carries a negative or non-finite
///   edge weight.
/// - `TargetNotReachable` if no path leads from `source` to `target`.
pub fn shortest_path<G, K, T>(graph: &G, source: &K, target: &K) -> Result<Vec<K>, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
{
    shortest_path_with_weight(graph, source, target).map(|found| found.path)
}

/// Computes a minimum-weight path from `source` to `target` together with
/// its total weight.
///
/// Single-source Dijkstra over the adjacency snapshot:
/// 1. Every vertex is queued with distance `+inf`, except `source` at `0`.
/// 2. The closest vertex is popped; vertices still at `+inf` are unreachable
///    and their edges are skipped.
/// 3. An edge `v -> w` is relaxed when `distance[v] + weight < distance[w]`,
///    recording `v` as the best predecessor of `w`.
/// 4. The path is rebuilt by walking best predecessors back from `target`.
///
/// Unweighted graphs count every edge as `1`, so the result has the fewest
/// hops. Time complexity is O(|V| + |E| log |V|).
///
/// # Errors
/// Same as [`shortest_path`]; `QueueError` if the queue runs dry before
/// reporting empty, which indicates a broken queue implementation.
pub fn shortest_path_with_weight<G, K, T>(
    graph: &G,
    source: &K,
    target: &K,
) -> Result<WeightedPath<K>, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
{
    let queue = MinPriorityQueue::new();
    shortest_path_with_queue(graph, source, target, queue)
}

/// Variant of [`shortest_path_with_weight`] driven by a caller-supplied,
/// empty priority queue.
pub fn shortest_path_with_queue<G, K, T, Q>(
    graph: &G,
    source: &K,
    target: &K,
    mut queue: Q,
) -> Result<WeightedPath<K>, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
    Q: PriorityQueue<K>,
{
    for endpoint in [source, target] {
        if graph.vertex(endpoint).is_none() {
            return Err(GraphError::vertex_not_found(
                Operation::ShortestPath,
                endpoint.clone(),
            ));
        }
    }

    let is_weighted = graph.traits().is_weighted;
    let adjacency = graph.adjacency_map();

    debug!(
        vertices = adjacency.len(),
        weighted = is_weighted,
        "searching for shortest path"
    );

    if is_weighted {
        reject_invalid_weights(&adjacency)?;
    }

    let mut distances: HashMap<K, f64> = HashMap::with_capacity(adjacency.len());
    for hash in adjacency.keys() {
        let distance = if hash == source { 0.0 } else { f64::INFINITY };
        distances.insert(hash.clone(), distance);
        queue.push(hash.clone(), distance);
    }

    // The cheapest known predecessor of each vertex. Given an edge AC with
    // weight 4 and an edge BC with weight 2, the best predecessor of C is B.
    let mut best_predecessors: HashMap<K, K> = HashMap::new();

    while !queue.is_empty() {
        let vertex = queue
            .pop()
            .ok_or_else(|| GraphError::new(ErrorKind::QueueError, Operation::ShortestPath))?;

        let distance = distances.get(&vertex).copied().unwrap_or(f64::INFINITY);
        if distance.is_infinite() {
            continue;
        }

        let Some(edges) = adjacency.get(&vertex) else {
            continue;
        };

        for (next, edge) in edges {
            // Unweighted edges conventionally carry weight 0. Counting them
            // as 1 makes the search prefer fewer hops instead of returning
            // an arbitrary path of total weight 0.
            let weight = if is_weighted { edge.weight } else { 1.0 };
            let candidate = distance + weight;

            let current = distances.get(next).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                trace!(distance = candidate, "relaxed edge");
                distances.insert(next.clone(), candidate);
                best_predecessors.insert(next.clone(), vertex.clone());
                queue.update_priority(next, candidate);
            }
        }
    }

    let path = reconstruct_path(source, target, &best_predecessors)?;
    let weight = distances.get(target).copied().unwrap_or(f64::INFINITY);

    debug!(hops = path.len() - 1, weight, "shortest path found");

    Ok(WeightedPath { path, weight })
}

/// Walks the best-predecessor chain from `target` back to `source`.
///
/// # Errors
/// `TargetNotReachable` if the chain ends before reaching `source`.
fn reconstruct_path<K>(
    source: &K,
    target: &K,
    best_predecessors: &HashMap<K, K>,
) -> Result<Vec<K>, GraphError<K>>
where
    K: Clone + Eq + Hash,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        current = best_predecessors.get(current).ok_or_else(|| {
            GraphError::with_vertex(
                ErrorKind::TargetNotReachable,
                Operation::ShortestPath,
                target.clone(),
            )
        })?;
        path.push(current.clone());
    }

    path.reverse();
    Ok(path)
}

/// Dijkstra needs finite, non-negative weights. An infinite weight would make
/// its target indistinguishable from an unreached vertex.
fn reject_invalid_weights<K>(adjacency: &AdjacencyMap<K>) -> Result<(), GraphError<K>>
where
    K: Clone,
{
    let invalid = adjacency
        .values()
        .flat_map(|edges| edges.values())
        .find(|edge| edge.weight < 0.0 || !edge.weight.is_finite());

    match invalid {
        Some(edge) => Err(GraphError::with_vertex(
            ErrorKind::NegativeWeight,
            Operation::ShortestPath,
            edge.source.clone(),
        )),
        None => Ok(()),
    }
}
