//! Immutable weighted graph with indexed adjacency lists.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Node identifier accepted by the graph and every algorithm.
///
/// Any cloneable, hashable, totally ordered value works. The total order is
/// what breaks priority ties, so traces stay reproducible.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T: Clone + Eq + Hash + Ord + fmt::Display> NodeKey for T {}

/// Weighted graph built once from a matrix or an edge list.
/// Uses adjacency lists for O(1) neighbor access.
#[derive(Debug, Clone)]
pub struct GraphModel<N> {
    /// Node identifiers in construction order
    nodes: Vec<N>,

    /// Reverse lookup: node -> index
    node_index: HashMap<N, usize>,

    /// Forward adjacency: adj[u] = (v, weight) pairs in insertion order
    adj: Vec<Vec<(usize, f64)>>,

    /// Directed edge count
    edge_count: usize,
}

/// Serializable graph snapshot for import/export.
///
/// `labels` may be omitted, in which case nodes are lettered `A`, `B`, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub matrix: Vec<Vec<f64>>,
}

impl<N: NodeKey> GraphModel<N> {
    /// Build from a square adjacency matrix. `matrix[i][j] != 0` creates the
    /// directed edge `labels[i] -> labels[j]`.
    pub fn from_matrix(labels: Vec<N>, matrix: &[Vec<f64>]) -> Result<Self> {
        let n = labels.len();
        if matrix.len() != n {
            return Err(GraphError::InvalidGraph(format!(
                "matrix has {} rows but {} labels were given",
                matrix.len(),
                n
            )));
        }

        let mut graph = Self::with_labels(labels)?;
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::InvalidGraph(format!(
                    "matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    graph.insert_edge(i, j, weight)?;
                }
            }
        }
        Ok(graph)
    }

    /// Build from a directed edge list. Every endpoint must appear in `labels`
    /// and every weight must be non-zero, as in a matrix.
    pub fn from_edges(labels: Vec<N>, edges: &[(N, N, f64)]) -> Result<Self> {
        let mut graph = Self::with_labels(labels)?;
        for (from, to, weight) in edges {
            let u = graph.index_of(from)?;
            let v = graph.index_of(to)?;
            graph.insert_edge(u, v, *weight)?;
        }
        Ok(graph)
    }

    /// Build from an undirected edge list; each edge is stored in both directions.
    pub fn from_undirected_edges(labels: Vec<N>, edges: &[(N, N, f64)]) -> Result<Self> {
        let mut graph = Self::with_labels(labels)?;
        for (a, b, weight) in edges {
            let u = graph.index_of(a)?;
            let v = graph.index_of(b)?;
            graph.insert_edge(u, v, *weight)?;
            if u != v {
                graph.insert_edge(v, u, *weight)?;
            }
        }
        Ok(graph)
    }

    fn with_labels(labels: Vec<N>) -> Result<Self> {
        let mut node_index = HashMap::with_capacity(labels.len());
        for (idx, label) in labels.iter().enumerate() {
            if node_index.insert(label.clone(), idx).is_some() {
                return Err(GraphError::InvalidGraph(format!(
                    "duplicate node label {}",
                    label
                )));
            }
        }
        Ok(GraphModel {
            adj: vec![Vec::new(); labels.len()],
            nodes: labels,
            node_index,
            edge_count: 0,
        })
    }

    fn insert_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        // A stored zero would read back as "no edge" from a matrix snapshot
        if weight == 0.0 {
            return Err(GraphError::InvalidGraph(format!(
                "edge {} -> {} has zero weight",
                self.nodes[from], self.nodes[to]
            )));
        }
        if !weight.is_finite() {
            return Err(GraphError::InvalidGraph(format!(
                "weight of edge {} -> {} is not finite",
                self.nodes[from], self.nodes[to]
            )));
        }
        // Linear scan is fine for typical degree
        if self.adj[from].iter().any(|&(v, _)| v == to) {
            return Err(GraphError::InvalidGraph(format!(
                "parallel edge {} -> {}",
                self.nodes[from], self.nodes[to]
            )));
        }
        self.adj[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Nodes in construction order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: &N) -> bool {
        self.node_index.contains_key(node)
    }

    /// Neighbors of `node` with edge weights, in insertion order.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = (&N, f64)> + '_> {
        let u = self.index_of(node)?;
        Ok(self.adj[u].iter().map(move |&(v, w)| (&self.nodes[v], w)))
    }

    /// Weight of the edge `from -> to`.
    pub fn weight(&self, from: &N, to: &N) -> Result<f64> {
        let u = self.index_of(from)?;
        let v = self.index_of(to)?;
        self.adj[u]
            .iter()
            .find(|&&(w_to, _)| w_to == v)
            .map(|&(_, w)| w)
            .ok_or_else(|| GraphError::NoSuchEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// True when every edge `u -> v` has a matching `v -> u` of equal weight.
    pub fn is_symmetric(&self) -> bool {
        self.edges().all(|(u, v, w)| {
            self.adj[v]
                .iter()
                .any(|&(back, back_w)| back == u && back_w == w)
        })
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges().any(|(_, _, w)| w < 0.0)
    }

    /// Export as a dense matrix snapshot (0 for absent edges).
    pub fn to_snapshot(&self) -> GraphSnapshot {
        let n = self.node_count();
        let mut matrix = vec![vec![0.0; n]; n];
        for (u, v, w) in self.edges() {
            matrix[u][v] = w;
        }
        GraphSnapshot {
            labels: Some(self.nodes.iter().map(|n| n.to_string()).collect()),
            matrix,
        }
    }

    /// Export graph as JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }
}

// Index-level access for the algorithms
impl<N: NodeKey> GraphModel<N> {
    pub(crate) fn index_of(&self, node: &N) -> Result<usize> {
        self.node_index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::unknown(node))
    }

    pub(crate) fn node(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn neighbors_slice(&self, idx: usize) -> &[(usize, f64)] {
        self.adj.get(idx).map_or(&[], |v| v.as_slice())
    }

    /// Iterate over all directed edges as (from, to, weight) indices.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&(to, w)| (from, to, w)))
    }
}

impl GraphModel<String> {
    /// Build from a matrix using the default `A, B, ...` labels.
    pub fn lettered(matrix: &[Vec<f64>]) -> Result<Self> {
        Self::from_matrix(default_labels(matrix.len()), matrix)
    }

    /// Import graph from JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self> {
        let labels = snapshot
            .labels
            .unwrap_or_else(|| default_labels(snapshot.matrix.len()));
        Self::from_matrix(labels, &snapshot.matrix)
    }
}

/// Spreadsheet-style labels: `A`..`Z`, then `AA`, `AB`, ...
pub fn default_labels(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let mut letters = Vec::new();
            let mut rest = i + 1;
            while rest > 0 {
                rest -= 1;
                letters.push(char::from(b'A' + (rest % 26) as u8));
                rest /= 26;
            }
            letters.iter().rev().collect()
        })
        .collect()
}
