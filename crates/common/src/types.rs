use std::collections::HashMap;

/// A connection between two vertex hashes carrying a numeric weight.
///
/// In a directed graph the edge runs `source -> target`. Undirected graphs
/// expose every edge in both directions, once per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    pub source: K,
    pub target: K,
    pub weight: f64,
}

impl<K> Edge<K> {
    pub fn new(source: K, target: K, weight: f64) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Structural flags of a graph, fixed for the lifetime of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traits {
    pub is_directed: bool,
    pub is_weighted: bool,
}

impl Traits {
    pub fn directed() -> Self {
        Traits {
            is_directed: true,
            is_weighted: false,
        }
    }

    pub fn undirected() -> Self {
        Traits {
            is_directed: false,
            is_weighted: false,
        }
    }

    pub fn weighted(self) -> Self {
        Traits {
            is_weighted: true,
            ..self
        }
    }
}

/// Point-in-time view of a graph's edges.
///
/// For an adjacency snapshot, `map[v][w]` is the edge `v -> w`; for a
/// predecessor snapshot, `map[v][u]` is the edge `u -> v`. Every vertex of
/// the graph is a key, including vertices without any edges.
pub type AdjacencyMap<K> = HashMap<K, HashMap<K, Edge<K>>>;

/// A path together with the sum of its effective edge weights.
///
/// Fields:
/// - `path`: Vertex hashes from source to target, both inclusive.
/// - `weight`: Total weight; on unweighted graphs this is the edge count.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<K> {
    pub path: Vec<K>,
    pub weight: f64,
}

impl<K> WeightedPath<K> {
    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
