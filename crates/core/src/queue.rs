use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use super::traits::PriorityQueue;

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first, breaking ties by the lower insertion sequence.
#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary-heap priority queue with lazy invalidation.
///
/// `update_priority` pushes a fresh heap entry instead of sifting the old
/// one; outdated entries are discarded when they surface in `pop`. The
/// `live` map is the source of truth for which items are queued and at
/// which priority.
///
/// Each item keeps the sequence number of its first `push`, so items of
/// equal priority come out in insertion order.
#[derive(Debug)]
pub struct MinPriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    live: HashMap<T, (f64, u64)>,
    next_sequence: u64,
}

impl<T> MinPriorityQueue<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            live: HashMap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Current priority of `item`, if it is queued.
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.live.get(item).map(|&(priority, _)| priority)
    }

    fn is_current(&self, entry: &Entry<T>) -> bool {
        match self.live.get(&entry.item) {
            Some(&(priority, sequence)) => {
                priority.to_bits() == entry.priority.to_bits() && sequence == entry.sequence
            }
            None => false,
        }
    }
}

impl<T> Default for MinPriorityQueue<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> for MinPriorityQueue<T>
where
    T: Clone + Eq + Hash,
{
    /// Pushing an item that is already queued behaves like `update_priority`.
    fn push(&mut self, item: T, priority: f64) {
        if self.live.contains_key(&item) {
            self.update_priority(&item, priority);
            return;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.live.insert(item.clone(), (priority, sequence));
        self.heap.push(Entry {
            priority,
            sequence,
            item,
        });
    }

    fn pop(&mut self) -> Option<T> {
        while let Some(entry) = self.heap.pop() {
            if self.is_current(&entry) {
                self.live.remove(&entry.item);
                return Some(entry.item);
            }
        }
        None
    }

    fn update_priority(&mut self, item: &T, priority: f64) {
        let Some(slot) = self.live.get_mut(item) else {
            return;
        };
        slot.0 = priority;
        let sequence = slot.1;

        self.heap.push(Entry {
            priority,
            sequence,
            item: item.clone(),
        });
    }

    fn len(&self) -> usize {
        self.live.len()
    }
}
