use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use common::error::{GraphError, Operation};
use tracing::debug;

use super::traits::Graph;

/// A path under construction and the set of vertices it already visits.
#[derive(Debug, Clone)]
struct PartialPath<K> {
    vertices: Vec<K>,
    members: HashSet<K>,
}

impl<K> PartialPath<K>
where
    K: Clone + Eq + Hash,
{
    fn start(vertex: K) -> Self {
        PartialPath {
            members: HashSet::from([vertex.clone()]),
            vertices: vec![vertex],
        }
    }

    fn last(&self) -> Option<&K> {
        self.vertices.last()
    }

    fn contains(&self, vertex: &K) -> bool {
        self.members.contains(vertex)
    }

    fn extended(&self, vertex: K) -> Self {
        let mut next = self.clone();
        next.members.insert(vertex.clone());
        next.vertices.push(vertex);
        next
    }
}

/// Enumerates every simple path from `source` to `target`.
///
/// Each path is the sequence of vertex hashes from `source` to `target`,
/// both inclusive, and visits no vertex twice. The order of the returned
/// paths is unspecified.
///
/// Partial paths are expanded breadth-first; an extension is only made to a
/// vertex not yet on the path, which bounds every path by the vertex count
/// and guarantees termination. A path reaching `target` is complete and is
/// not extended further. Since `source` is part of every partial path,
/// `source == target` yields no paths.
///
/// **Cost:** the number of simple paths can grow exponentially with the
/// size of the graph, and so can the time and memory spent here. Prefer
/// [`shortest_path`](crate::shortest_path::shortest_path) when one path
/// suffices.
///
/// # Errors
/// `VertexNotFound` if either endpoint is missing.
pub fn find_all_paths<G, K, T>(
    graph: &G,
    source: &K,
    target: &K,
) -> Result<Vec<Vec<K>>, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
{
    for endpoint in [source, target] {
        if graph.vertex(endpoint).is_none() {
            return Err(GraphError::vertex_not_found(
                Operation::FindAllPaths,
                endpoint.clone(),
            ));
        }
    }

    let adjacency = graph.adjacency_map();
    debug!(vertices = adjacency.len(), "enumerating simple paths");

    let mut queue = VecDeque::from([PartialPath::start(source.clone())]);
    let mut paths = Vec::new();
    let mut expanded = 0usize;

    while let Some(partial) = queue.pop_front() {
        expanded += 1;

        let Some(edges) = partial.last().and_then(|last| adjacency.get(last)) else {
            continue;
        };

        for next in edges.keys() {
            if partial.contains(next) {
                continue;
            }

            let extended = partial.extended(next.clone());
            if next == target {
                paths.push(extended.vertices);
            } else {
                queue.push_back(extended);
            }
        }
    }

    debug!(paths = paths.len(), expanded, "enumerated simple paths");

    Ok(paths)
}
