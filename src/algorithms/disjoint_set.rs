//! Disjoint set (union-find) over arbitrary node identifiers.
//!
//! Tracks a partition of nodes into components. Kruskal uses it to reject
//! edges whose endpoints are already connected.
//!
//! Path compression and union by rank give near O(1) amortized operations.

use crate::error::{GraphError, Result};
use crate::graph::NodeKey;
use std::collections::HashMap;

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet<N> {
    /// Node identifiers by slot
    nodes: Vec<N>,
    /// Reverse lookup: node -> slot
    index: HashMap<N, usize>,
    /// parent[i] = parent slot of i, or i if root
    parent: Vec<usize>,
    /// Upper bound on tree height, only meaningful at roots
    rank: Vec<u32>,
    components: usize,
}

impl<N: NodeKey> DisjointSet<N> {
    /// One singleton set per node. Repeated nodes are ignored.
    pub fn new(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut set = DisjointSet {
            nodes: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            components: 0,
        };
        for node in nodes {
            if set.index.contains_key(&node) {
                continue;
            }
            let slot = set.nodes.len();
            set.index.insert(node.clone(), slot);
            set.nodes.push(node);
            set.parent.push(slot);
            set.rank.push(0);
            set.components += 1;
        }
        set
    }

    /// Representative of `node`'s component. Compresses the visited path.
    pub fn find(&mut self, node: &N) -> Result<N> {
        let slot = self.slot(node)?;
        let root = self.find_root(slot);
        Ok(self.nodes[root].clone())
    }

    /// Merge the components of `a` and `b`.
    ///
    /// Returns false if they were already in the same component.
    pub fn union(&mut self, a: &N, b: &N) -> Result<bool> {
        let root_a = self.find_root(self.slot(a)?);
        let root_b = self.find_root(self.slot(b)?);

        if root_a == root_b {
            return Ok(false);
        }

        let (rank_a, rank_b) = (self.rank[root_a], self.rank[root_b]);
        if rank_a < rank_b {
            self.parent[root_a] = root_b;
        } else if rank_a > rank_b {
            self.parent[root_b] = root_a;
        } else {
            // Same rank: a's root wins and grows
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }

        self.components -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, a: &N, b: &N) -> Result<bool> {
        let root_a = self.find_root(self.slot(a)?);
        let root_b = self.find_root(self.slot(b)?);
        Ok(root_a == root_b)
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn slot(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::unknown(node))
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point every node on the path directly at the root
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}
