use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use common::error::{ErrorKind, GraphError, Operation};
use common::types::AdjacencyMap;
use tracing::{debug, trace};

use super::traits::Graph;

/// Detects all strongly connected components of a directed graph.
///
/// Each component is returned as the hashes of its vertices, in no
/// particular order. Every vertex belongs to exactly one component;
/// vertices on no cycle form singleton components.
///
/// # Algorithm
/// Tarjan's algorithm, driven by an explicit work stack instead of native
/// recursion so that deep graphs cannot overflow the call stack:
/// - `index[v]`: discovery time of `v`
/// - `lowlink[v]`: smallest discovery time reachable from `v`'s DFS subtree
///   through at most one back edge
///
/// A vertex whose lowlink equals its index roots a component made of itself
/// and every vertex above it on the component stack.
///
/// Time complexity is O(|V| + |E|).
///
/// # Errors
/// `InvalidGraphKind` if the graph is undirected.
pub fn strongly_connected_components<G, K, T>(graph: &G) -> Result<Vec<Vec<K>>, GraphError<K>>
where
    G: Graph<K, T> + ?Sized,
    K: Clone + Eq + Hash,
{
    if !graph.traits().is_directed {
        return Err(GraphError::new(
            ErrorKind::InvalidGraphKind,
            Operation::StronglyConnectedComponents,
        ));
    }

    let mut state = TarjanState::new(graph.adjacency_map());
    debug!(
        vertices = state.adjacency.len(),
        "searching for strongly connected components"
    );

    let roots: Vec<K> = state.adjacency.keys().cloned().collect();
    for root in roots {
        if !state.visited.contains(&root) {
            state.strong_connect(root);
        }
    }

    debug!(
        vertices = state.visited.len(),
        components = state.components.len(),
        "strongly connected components found"
    );

    Ok(state.components)
}

/// One suspended DFS call: the vertex being explored, its successors and
/// the position of the next successor to look at.
struct Frame<K> {
    vertex: K,
    successors: Vec<K>,
    next: usize,
}

/// Per-run state of Tarjan's algorithm.
struct TarjanState<K> {
    adjacency: AdjacencyMap<K>,
    components: Vec<Vec<K>>,
    stack: Vec<K>,
    on_stack: HashSet<K>,
    visited: HashSet<K>,
    index: HashMap<K, usize>,
    lowlink: HashMap<K, usize>,
    time: usize,
}

impl<K> TarjanState<K>
where
    K: Clone + Eq + Hash,
{
    fn new(adjacency: AdjacencyMap<K>) -> Self {
        let n = adjacency.len();
        TarjanState {
            adjacency,
            components: Vec::new(),
            stack: Vec::new(),
            on_stack: HashSet::with_capacity(n),
            visited: HashSet::with_capacity(n),
            index: HashMap::with_capacity(n),
            lowlink: HashMap::with_capacity(n),
            time: 0,
        }
    }

    /// Assigns `vertex` its discovery time, pushes it onto the component
    /// stack and returns the frame that explores its successors.
    fn discover(&mut self, vertex: K) -> Frame<K> {
        self.index.insert(vertex.clone(), self.time);
        self.lowlink.insert(vertex.clone(), self.time);
        self.time += 1;

        self.visited.insert(vertex.clone());
        self.on_stack.insert(vertex.clone());
        self.stack.push(vertex.clone());

        let successors = self
            .adjacency
            .get(&vertex)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default();

        Frame {
            vertex,
            successors,
            next: 0,
        }
    }

    fn lower_lowlink(&mut self, vertex: &K, candidate: usize) {
        if let Some(lowlink) = self.lowlink.get_mut(vertex) {
            *lowlink = (*lowlink).min(candidate);
        }
    }

    /// Runs the DFS rooted at `root` to completion.
    fn strong_connect(&mut self, root: K) {
        let mut work = vec![self.discover(root)];

        while let Some(frame) = work.last_mut() {
            if let Some(next) = frame.successors.get(frame.next).cloned() {
                frame.next += 1;
                let vertex = frame.vertex.clone();

                if !self.visited.contains(&next) {
                    let child = self.discover(next);
                    work.push(child);
                } else if self.on_stack.contains(&next) {
                    // Back edge into a vertex of the component being built.
                    let next_index = self.index[&next];
                    self.lower_lowlink(&vertex, next_index);
                }
                continue;
            }

            // Every successor explored: return from this call.
            let Some(Frame { vertex, .. }) = work.pop() else {
                break;
            };
            let lowlink = self.lowlink[&vertex];

            if let Some(parent) = work.last() {
                let parent = parent.vertex.clone();
                self.lower_lowlink(&parent, lowlink);
            }

            if lowlink == self.index[&vertex] {
                self.emit_component(&vertex);
            }
        }
    }

    /// Pops the component rooted at `root` off the component stack.
    fn emit_component(&mut self, root: &K) {
        let mut component = Vec::new();

        while let Some(member) = self.stack.pop() {
            self.on_stack.remove(&member);
            let is_root = member == *root;
            component.push(member);
            if is_root {
                break;
            }
        }

        trace!(size = component.len(), "emitted component");
        self.components.push(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use common::types::Traits;

    fn directed(isolated: &[u32], edges: &[(u32, u32)]) -> AdjacencyGraph<u32, ()> {
        AdjacencyGraph::from_edge_list(
            Traits::directed(),
            isolated.iter().copied(),
            edges.iter().map(|&(from, to)| (from, to, 0.0)),
        )
        .unwrap()
    }

    /// Sorts members and components so results compare independently of
    /// hash-map iteration order.
    fn normalize(mut components: Vec<Vec<u32>>) -> Vec<Vec<u32>> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn single_cycle_is_one_component() {
        let graph = directed(&[], &[(1, 2), (2, 3), (3, 1)]);

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(normalize(components), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn dag_yields_singletons() {
        let graph = directed(&[], &[(1, 2), (2, 3), (1, 3)]);

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(normalize(components), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn isolated_vertex_and_self_loop() {
        let graph = directed(&[7], &[(8, 8)]);

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(normalize(components), vec![vec![7], vec![8]]);
    }

    #[test]
    fn two_cycles_joined_by_a_bridge() {
        // {1,2,3} -> {4,5} with 6 hanging off the second cycle
        let graph = directed(
            &[],
            &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 4), (5, 6)],
        );

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(
            normalize(components),
            vec![vec![1, 2, 3], vec![4, 5], vec![6]]
        );
    }

    #[test]
    fn nested_back_edges() {
        // Classic textbook graph with three components.
        let graph = directed(
            &[],
            &[
                (1, 2),
                (2, 3),
                (3, 1),
                (4, 2),
                (4, 3),
                (4, 5),
                (5, 4),
                (5, 6),
                (6, 3),
                (6, 7),
                (7, 6),
                (8, 7),
                (8, 8),
            ],
        );

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(
            normalize(components),
            vec![vec![1, 2, 3], vec![4, 5], vec![6, 7], vec![8]]
        );
    }

    #[test]
    fn empty_graph_has_no_components() {
        let graph = directed(&[], &[]);

        assert!(strongly_connected_components(&graph).unwrap().is_empty());
    }

    #[test]
    fn undirected_graph_is_rejected() {
        let graph =
            AdjacencyGraph::from_edge_list(Traits::undirected(), [], [(1u32, 2u32, 0.0)]).unwrap();

        let err = strongly_connected_components(&graph).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidGraphKind);
        assert_eq!(err.operation, Operation::StronglyConnectedComponents);
    }

    #[test]
    fn deep_chain_does_not_overflow_the_stack() {
        let n = 200_000;
        let mut edges: Vec<(u32, u32)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        edges.push((n - 1, 0));
        let graph = directed(&[], &edges);

        let components = strongly_connected_components(&graph).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n as usize);
    }
}
