//! Algorithm results and the step-by-step traces handed to renderers.
//!
//! Every step is a self-contained snapshot: a renderer can draw frame `i`
//! from `trace[i]` alone, without replaying earlier steps.

use crate::graph::{GraphModel, NodeKey};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Best-known distance per node. Unreached nodes hold `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<N: Ord> {
    distances: BTreeMap<N, f64>,
}

impl<N: NodeKey> DistanceTable<N> {
    pub(crate) fn from_indexed(graph: &GraphModel<N>, distances: &[f64]) -> Self {
        DistanceTable {
            distances: graph
                .nodes()
                .iter()
                .cloned()
                .zip(distances.iter().copied())
                .collect(),
        }
    }

    /// Distance to `node`, `None` if the node is not in the table.
    pub fn get(&self, node: &N) -> Option<f64> {
        self.distances.get(node).copied()
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.get(node).is_some_and(f64::is_finite)
    }

    /// Entries in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.distances.iter().map(|(n, &d)| (n, d))
    }

    /// Number of nodes with a finite distance.
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

// Infinity has no JSON representation; unreachable nodes become null.
impl<N: Ord + Serialize> Serialize for DistanceTable<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.distances.len()))?;
        for (node, &distance) in &self.distances {
            let value = if distance.is_finite() {
                Some(distance)
            } else {
                None
            };
            map.serialize_entry(node, &value)?;
        }
        map.end()
    }
}

/// Predecessor of each reached node (the start node has none).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredecessorTree<N: Ord> {
    parents: BTreeMap<N, N>,
}

impl<N: NodeKey> PredecessorTree<N> {
    pub(crate) fn from_indexed(graph: &GraphModel<N>, parents: &[Option<usize>]) -> Self {
        PredecessorTree {
            parents: parents
                .iter()
                .enumerate()
                .filter_map(|(v, p)| p.map(|u| (graph.node(v).clone(), graph.node(u).clone())))
                .collect(),
        }
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node)
    }

    /// (node, parent) pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.parents.iter()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// An edge selected into a spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

impl<N> MstEdge<N> {
    pub fn new(from: N, to: N, weight: f64) -> Self {
        MstEdge { from, to, weight }
    }
}

/// Dijkstra frame: the node just finalized and the tables at that moment.
#[derive(Debug, Clone, Serialize)]
pub struct DijkstraStep<N: Ord> {
    pub node: N,
    pub distances: DistanceTable<N>,
    pub predecessors: PredecessorTree<N>,
}

/// Prim frame: the node just added and the tree so far.
#[derive(Debug, Clone, Serialize)]
pub struct PrimStep<N> {
    pub node: N,
    pub edges: Vec<MstEdge<N>>,
}

/// Kruskal frame: the edge just accepted and the forest so far.
#[derive(Debug, Clone, Serialize)]
pub struct KruskalStep<N> {
    pub edge: MstEdge<N>,
    pub edges: Vec<MstEdge<N>>,
}

/// Ordered, fully materialized sequence of algorithm steps.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    pub(crate) fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    pub(crate) fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }
}

impl<S> IntoIterator for Trace<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Spanning tree (or forest) with the trace that built it.
#[derive(Debug, Clone, Serialize)]
pub struct MstResult<N, S> {
    /// Selected edges in selection order
    pub edges: Vec<MstEdge<N>>,
    /// Sum of selected edge weights
    pub total_weight: f64,
    pub trace: Trace<S>,
}

impl<N, S> MstResult<N, S> {
    pub(crate) fn new(edges: Vec<MstEdge<N>>, trace: Trace<S>) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        MstResult {
            edges,
            total_weight,
            trace,
        }
    }
}
