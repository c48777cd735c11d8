use std::hint::black_box;
use std::time::Instant;

use common::types::Traits;
use graph_walk_core::strongly_connected_components;
use perf_bench::*;

fn main() {
    let graph = generate_graph(Traits::directed(), NUM_VERTICES, NUM_EDGES)
        .expect("Failed to generate benchmark graph");

    let start_time = Instant::now();
    let result = strongly_connected_components(&graph);
    let elapsed_time = start_time.elapsed();

    let result = black_box(result);

    println!(
        "--- SCC Benchmark ({} Vertices, {} Edges) ---",
        NUM_VERTICES, NUM_EDGES
    );
    match result {
        Ok(components) => {
            let largest = components.iter().map(Vec::len).max().unwrap_or(0);
            println!("Components: {}, Largest: {}", components.len(), largest);
        }
        Err(e) => println!("SCC failed: {}", e),
    }
    println!("Elapsed Time: {:?}", elapsed_time);
}
