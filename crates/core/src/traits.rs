use common::types::{AdjacencyMap, Traits};

/// Read-only query facade over an externally owned graph.
///
/// The algorithms in this crate fetch each snapshot exactly once per call
/// and never re-read the graph afterwards. If the underlying storage can
/// be mutated concurrently, the implementation is responsible for handing
/// out consistent snapshots.
pub trait Graph<K, T> {
    /// Looks up the value stored for `hash`.
    ///
    /// Returns `None` if the graph has no such vertex.
    fn vertex(&self, hash: &K) -> Option<&T>;

    /// Snapshot of every vertex's outgoing edges, keyed by target hash.
    fn adjacency_map(&self) -> AdjacencyMap<K>;

    /// Snapshot of every vertex's incoming edges, keyed by source hash.
    fn predecessor_map(&self) -> AdjacencyMap<K>;

    /// Structural flags of the graph.
    fn traits(&self) -> Traits;
}

/// Min-priority queue used by the shortest path search.
pub trait PriorityQueue<T> {
    /// Inserts `item` with the given priority.
    fn push(&mut self, item: T, priority: f64);

    /// Removes and returns the item with the lowest priority.
    ///
    /// Returns `None` if the queue is empty.
    fn pop(&mut self) -> Option<T>;

    /// Changes the priority of an item already in the queue.
    ///
    /// Items that are not present are ignored.
    fn update_priority(&mut self, item: &T, priority: f64);

    /// Number of items currently queued.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
