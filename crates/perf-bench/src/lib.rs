use common::error::GraphError;
use common::types::Traits;
use graph_walk_core::AdjacencyGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const NUM_VERTICES: usize = 50_000;
pub const NUM_EDGES: usize = 250_000;

/// Fixed seed so that every run times the same graph.
pub const SEED: u64 = 0x5eed;

/// Generates `num_edges` random edges over `num_vertices` vertices.
///
/// Weights are drawn from `[1, 100)`, so the edge list is valid input for
/// the shortest path search.
pub fn generate_edges(num_vertices: usize, num_edges: usize, seed: u64) -> Vec<(usize, usize, f64)> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..num_edges)
        .map(|_| {
            let from = rng.random_range(0..num_vertices);
            let to = rng.random_range(0..num_vertices);
            let weight = rng.random_range(1.0..100.0);
            (from, to, weight)
        })
        .collect()
}

/// Builds the benchmark graph; every vertex in `0..num_vertices` is present.
pub fn generate_graph(
    traits: Traits,
    num_vertices: usize,
    num_edges: usize,
) -> Result<AdjacencyGraph<usize, ()>, GraphError<usize>> {
    let edges = generate_edges(num_vertices, num_edges, SEED);
    AdjacencyGraph::from_edge_list(traits, 0..num_vertices, edges)
}
