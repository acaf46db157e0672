//! Traced shortest-path and spanning-tree algorithms.
//!
//! Every algorithm returns its result plus an ordered trace of snapshots,
//! one per algorithm step, so a visualizer can animate the run frame by
//! frame. Included:
//!
//! - **GraphModel**: immutable weighted graph built from a matrix or edge list
//! - **PriorityFrontier**: min-heap with deterministic tie-breaking
//! - **Dijkstra**: distances, shortest-path tree, one frame per finalized node
//! - **Prim** / **Kruskal**: spanning tree (or forest) edges, one frame per pick
//! - **DisjointSet**: union-find used by Kruskal
//!
//! # Example
//!
//! ```
//! use graph_trace_wasm::{dijkstra, GraphModel};
//!
//! let graph = GraphModel::lettered(&[
//!     vec![0.0, 4.0, 0.0],
//!     vec![4.0, 0.0, 1.0],
//!     vec![0.0, 1.0, 0.0],
//! ])?;
//!
//! let result = dijkstra(&graph, &"A".to_string())?;
//! assert_eq!(result.distance_to(&"C".to_string())?, 5.0);
//! assert_eq!(result.trace.len(), 3);
//! # Ok::<(), graph_trace_wasm::GraphError>(())
//! ```

pub mod algorithms;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod trace;
mod wasm;

use wasm_bindgen::prelude::*;

// Re-export main types
pub use algorithms::dijkstra::{dijkstra, shortest_path, ShortestPathResult};
#[cfg(feature = "mst")]
pub use algorithms::disjoint_set::DisjointSet;
#[cfg(feature = "mst")]
pub use algorithms::kruskal::{kruskal, KruskalResult};
#[cfg(feature = "mst")]
pub use algorithms::prim::{prim, PrimResult};
pub use error::{GraphError, Result};
pub use frontier::{FrontierEntry, PriorityFrontier};
pub use graph::{default_labels, GraphModel, GraphSnapshot, NodeKey};
pub use trace::{
    DijkstraStep, DistanceTable, KruskalStep, MstEdge, MstResult, PredecessorTree, PrimStep,
    Trace,
};
pub use wasm::WeightedGraph;

/// Module start hook: routes Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
