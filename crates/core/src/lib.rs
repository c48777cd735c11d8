//! Graph algorithms over an externally owned graph.
//!
//! The algorithms consume the [`Graph`] query facade and never mutate the
//! graph. Every call takes its own snapshot on entry and keeps all working
//! state local, so calls are independent of each other.

pub mod cycle;
pub mod graph;
pub mod paths;
pub mod queue;
pub mod scc;
pub mod shortest_path;
pub mod traits;

pub use cycle::creates_cycle;
pub use graph::AdjacencyGraph;
pub use paths::find_all_paths;
pub use queue::MinPriorityQueue;
pub use scc::strongly_connected_components;
pub use shortest_path::{shortest_path, shortest_path_with_queue, shortest_path_with_weight};
pub use traits::{Graph, PriorityQueue};
