use std::hint::black_box;
use std::time::Instant;

use common::types::Traits;
use graph_walk_core::shortest_path_with_weight;
use perf_bench::*;

fn main() {
    let graph = generate_graph(Traits::directed().weighted(), NUM_VERTICES, NUM_EDGES)
        .expect("Failed to generate benchmark graph");

    let start_time = Instant::now();
    let result = shortest_path_with_weight(&graph, &0, &(NUM_VERTICES - 1));
    let elapsed_time = start_time.elapsed();

    let result = black_box(result);

    println!(
        "--- Shortest Path Benchmark ({} Vertices, {} Edges) ---",
        NUM_VERTICES, NUM_EDGES
    );
    match result {
        Ok(found) => println!("Hops: {}, Weight: {:.3}", found.hops(), found.weight),
        Err(e) => println!("No path: {}", e),
    }
    println!("Elapsed Time: {:?}", elapsed_time);
}
