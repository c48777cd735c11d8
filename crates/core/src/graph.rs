use std::collections::HashMap;
use std::hash::Hash;

use common::error::{GraphError, Operation};
use common::types::{AdjacencyMap, Edge, Traits};

use super::traits::Graph;

/// Immutable in-memory graph backed by two hash-map adjacency lists.
///
/// Outgoing and incoming edges are kept side by side so both snapshots are
/// a plain clone. Undirected graphs store every edge once per endpoint, so
/// their adjacency and predecessor snapshots hold the same vertex pairs with
/// the same weights; only the edge orientation differs.
///
/// The graph is built once from a vertex and edge list and offers no
/// mutation API.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<K, T> {
    traits: Traits,
    vertices: HashMap<K, T>,
    adjacency: AdjacencyMap<K>,
    predecessors: AdjacencyMap<K>,
    edge_count: usize,
}

impl<K, T> AdjacencyGraph<K, T>
where
    K: Clone + Eq + Hash,
{
    /// Builds a graph from `(hash, value)` pairs and a list of edges.
    ///
    /// Parallel edges collapse into one, keeping the last weight seen. In an
    /// undirected graph `a -> b` and `b -> a` are the same edge.
    ///
    /// # Errors
    /// Returns `VertexNotFound` naming the first edge endpoint that is not
    /// in `vertices`.
    pub fn from_edges<V, E>(traits: Traits, vertices: V, edges: E) -> Result<Self, GraphError<K>>
    where
        V: IntoIterator<Item = (K, T)>,
        E: IntoIterator<Item = Edge<K>>,
    {
        let vertices: HashMap<K, T> = vertices.into_iter().collect();

        let mut adjacency: AdjacencyMap<K> = HashMap::with_capacity(vertices.len());
        let mut predecessors: AdjacencyMap<K> = HashMap::with_capacity(vertices.len());
        for hash in vertices.keys() {
            adjacency.insert(hash.clone(), HashMap::new());
            predecessors.insert(hash.clone(), HashMap::new());
        }

        let mut edge_count = 0;

        for edge in edges {
            for endpoint in [&edge.source, &edge.target] {
                if !vertices.contains_key(endpoint) {
                    return Err(GraphError::vertex_not_found(
                        Operation::BuildGraph,
                        endpoint.clone(),
                    ));
                }
            }

            let is_new = Self::insert_edge(&mut adjacency, &mut predecessors, edge.clone());

            if !traits.is_directed && edge.source != edge.target {
                let reverse = Edge::new(edge.target, edge.source, edge.weight);
                Self::insert_edge(&mut adjacency, &mut predecessors, reverse);
            }

            if is_new {
                edge_count += 1;
            }
        }

        Ok(AdjacencyGraph {
            traits,
            vertices,
            adjacency,
            predecessors,
            edge_count,
        })
    }

    /// Inserts `edge` into both lists. Returns true if `source -> target`
    /// was not present before.
    fn insert_edge(
        adjacency: &mut AdjacencyMap<K>,
        predecessors: &mut AdjacencyMap<K>,
        edge: Edge<K>,
    ) -> bool {
        predecessors
            .entry(edge.target.clone())
            .or_default()
            .insert(edge.source.clone(), edge.clone());

        adjacency
            .entry(edge.source.clone())
            .or_default()
            .insert(edge.target.clone(), edge)
            .is_none()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, hash: &K) -> bool {
        self.vertices.contains_key(hash)
    }
}

impl<K> AdjacencyGraph<K, ()>
where
    K: Clone + Eq + Hash,
{
    /// Builds a graph whose vertices carry no value.
    ///
    /// Every edge endpoint becomes a vertex; `isolated` adds vertices that
    /// have no edges at all.
    pub fn from_edge_list<V, E>(traits: Traits, isolated: V, edges: E) -> Result<Self, GraphError<K>>
    where
        V: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K, f64)>,
    {
        let edges: Vec<Edge<K>> = edges
            .into_iter()
            .map(|(source, target, weight)| Edge::new(source, target, weight))
            .collect();

        let vertices = isolated
            .into_iter()
            .chain(
                edges
                    .iter()
                    .flat_map(|edge| [edge.source.clone(), edge.target.clone()]),
            )
            .map(|hash| (hash, ()));

        // Collect before handing over so `edges` is no longer borrowed.
        let vertices: Vec<(K, ())> = vertices.collect();

        Self::from_edges(traits, vertices, edges)
    }
}

impl<K, T> Graph<K, T> for AdjacencyGraph<K, T>
where
    K: Clone + Eq + Hash,
{
    fn vertex(&self, hash: &K) -> Option<&T> {
        self.vertices.get(hash)
    }

    fn adjacency_map(&self) -> AdjacencyMap<K> {
        self.adjacency.clone()
    }

    fn predecessor_map(&self) -> AdjacencyMap<K> {
        self.predecessors.clone()
    }

    fn traits(&self) -> Traits {
        self.traits
    }
}
