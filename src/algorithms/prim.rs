//! Prim's minimum spanning tree, grown from a start node.
//!
//! Only the start node's connected component is spanned. Nodes in other
//! components never enter the frontier and are left out of the tree.

use crate::error::{GraphError, Result};
use crate::frontier::PriorityFrontier;
use crate::graph::{GraphModel, NodeKey};
use crate::trace::{MstEdge, MstResult, PrimStep, Trace};
use tracing::{debug, trace};

/// Spanning tree produced by [`prim`].
pub type PrimResult<N> = MstResult<N, PrimStep<N>>;

/// Run Prim from `start` on an undirected (symmetric) graph.
///
/// # Errors
/// * `UnknownNode` if `start` is not in the graph
/// * `InvalidGraph` if some edge has no reverse edge of equal weight
pub fn prim<N: NodeKey>(graph: &GraphModel<N>, start: &N) -> Result<PrimResult<N>> {
    let source = graph.index_of(start)?;
    if !graph.is_symmetric() {
        return Err(GraphError::InvalidGraph(
            "spanning trees need a symmetric (undirected) graph".to_string(),
        ));
    }

    let n = graph.node_count();
    debug!(start = %start, nodes = n, "running prim");

    let mut visited = vec![false; n];
    let mut edges: Vec<MstEdge<N>> = Vec::with_capacity(n.saturating_sub(1));
    let mut steps = Trace::new();

    // Payload is the node the entry was pushed from
    let mut frontier: PriorityFrontier<&N, Option<&N>> = PriorityFrontier::new();
    frontier.push_with(0.0, graph.node(source), None);

    while let Ok(entry) = frontier.pop_min() {
        let u = graph.index_of(entry.node)?;
        if visited[u] {
            trace!(node = %entry.node, "discarding entry for visited node");
            continue;
        }
        visited[u] = true;

        if let Some(previous) = entry.payload {
            edges.push(MstEdge::new(
                previous.clone(),
                entry.node.clone(),
                entry.priority,
            ));
        }
        steps.record(PrimStep {
            node: entry.node.clone(),
            edges: edges.clone(),
        });

        for &(v, weight) in graph.neighbors_slice(u) {
            if !visited[v] {
                frontier.push_with(weight, graph.node(v), Some(entry.node));
            }
        }
    }

    debug!(edges = edges.len(), spanned = steps.len(), "prim finished");

    Ok(MstResult::new(edges, steps))
}
