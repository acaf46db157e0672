//! Kruskal's minimum spanning forest.
//!
//! Scans edges by ascending weight and keeps every edge that joins two
//! different components. On a disconnected graph this yields one tree per
//! component, unlike Prim which only spans the start node's component.

use crate::algorithms::disjoint_set::DisjointSet;
use crate::error::{GraphError, Result};
use crate::graph::{GraphModel, NodeKey};
use crate::trace::{KruskalStep, MstEdge, MstResult, Trace};
use tracing::{debug, trace};

/// Spanning forest produced by [`kruskal`].
pub type KruskalResult<N> = MstResult<N, KruskalStep<N>>;

/// Run Kruskal on an undirected (symmetric) graph.
///
/// # Errors
/// * `InvalidGraph` if some edge has no reverse edge of equal weight
pub fn kruskal<N: NodeKey>(graph: &GraphModel<N>) -> Result<KruskalResult<N>> {
    if !graph.is_symmetric() {
        return Err(GraphError::InvalidGraph(
            "spanning trees need a symmetric (undirected) graph".to_string(),
        ));
    }

    let candidates = sorted_edges(graph);
    debug!(
        nodes = graph.node_count(),
        candidates = candidates.len(),
        "running kruskal"
    );

    let mut components = DisjointSet::new(graph.nodes().iter().cloned());
    let mut edges: Vec<MstEdge<N>> = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut steps = Trace::new();

    for (u, v, weight) in candidates {
        if components.find(u)? == components.find(v)? {
            trace!(from = %u, to = %v, "edge would close a cycle");
            continue;
        }
        components.union(u, v)?;

        let edge = MstEdge::new(u.clone(), v.clone(), weight);
        edges.push(edge.clone());
        steps.record(KruskalStep {
            edge,
            edges: edges.clone(),
        });
    }

    debug!(
        edges = edges.len(),
        components = components.component_count(),
        "kruskal finished"
    );

    Ok(MstResult::new(edges, steps))
}

/// Each undirected edge once, with `u` the smaller endpoint in node order,
/// sorted by weight then by (u, v).
fn sorted_edges<N: NodeKey>(graph: &GraphModel<N>) -> Vec<(&N, &N, f64)> {
    let mut edges: Vec<(&N, &N, f64)> = graph
        .edges()
        .filter(|&(u, v, _)| u < v)
        .map(|(u, v, w)| {
            let (a, b) = (graph.node(u), graph.node(v));
            if a <= b {
                (a, b, w)
            } else {
                (b, a, w)
            }
        })
        .collect();

    edges.sort_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| a.0.cmp(b.0))
            .then_with(|| a.1.cmp(b.1))
    });
    edges
}
