//! Min-priority frontier with deterministic tie-breaking.
//!
//! Entries order by priority, then by node, then by payload. Equal-weight
//! graphs therefore always pop in the same sequence. There is no
//! decrease-key: callers push duplicates and drop stale pops themselves.

use crate::error::{GraphError, Result};
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A popped frontier entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry<N, T = ()> {
    pub priority: f64,
    pub node: N,
    pub payload: T,
}

#[derive(Debug)]
struct Keyed<N, T> {
    priority: OrderedFloat<f64>,
    node: N,
    payload: T,
}

impl<N: Ord, T: Ord> PartialEq for Keyed<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, T: Ord> Eq for Keyed<N, T> {}

impl<N: Ord, T: Ord> PartialOrd for Keyed<N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, T: Ord> Ord for Keyed<N, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.payload.cmp(&other.payload))
    }
}

/// Binary-heap backed min-priority queue over (priority, node) entries.
#[derive(Debug)]
pub struct PriorityFrontier<N, T = ()> {
    heap: BinaryHeap<Reverse<Keyed<N, T>>>,
}

impl<N: Ord, T: Ord> PriorityFrontier<N, T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Queue `node` with a caller payload carried alongside it.
    pub fn push_with(&mut self, priority: f64, node: N, payload: T) {
        self.heap.push(Reverse(Keyed {
            priority: OrderedFloat(priority),
            node,
            payload,
        }));
    }

    /// Remove and return the smallest entry, or `Empty` once drained.
    pub fn pop_min(&mut self) -> Result<FrontierEntry<N, T>> {
        let Reverse(entry) = self.heap.pop().ok_or(GraphError::Empty)?;
        Ok(FrontierEntry {
            priority: entry.priority.into_inner(),
            node: entry.node,
            payload: entry.payload,
        })
    }

    /// Smallest entry without removing it.
    pub fn peek_min(&self) -> Option<(f64, &N)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.priority.into_inner(), &entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<N: Ord> PriorityFrontier<N, ()> {
    pub fn push(&mut self, priority: f64, node: N) {
        self.push_with(priority, node, ());
    }
}

impl<N: Ord, T: Ord> Default for PriorityFrontier<N, T> {
    fn default() -> Self {
        Self::new()
    }
}
