//! JavaScript bindings for the graph engine.
//!
//! Results and traces cross the boundary as plain JS objects (maps become
//! objects, unreachable distances become `null`).

use crate::algorithms::dijkstra::{dijkstra, shortest_path};
use crate::error::GraphError;
use crate::graph::GraphModel;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Weighted graph with string labels, as seen from JavaScript.
#[wasm_bindgen]
pub struct WeightedGraph {
    inner: GraphModel<String>,
}

#[derive(Serialize)]
struct Neighbor<'a> {
    node: &'a str,
    weight: f64,
}

#[derive(Serialize)]
struct PathResult {
    path: Vec<String>,
    distance: f64,
}

#[wasm_bindgen]
impl WeightedGraph {
    /// Build from a row-major `size x size` matrix, nodes labeled `A`, `B`, ...
    #[wasm_bindgen(js_name = fromMatrix)]
    pub fn from_matrix(values: &[f64], size: usize) -> Result<WeightedGraph, JsError> {
        let matrix = square_rows(values, size)?;
        Ok(WeightedGraph {
            inner: GraphModel::lettered(&matrix)?,
        })
    }

    /// Build from a row-major matrix with explicit string labels.
    #[wasm_bindgen(js_name = fromLabeledMatrix)]
    pub fn from_labeled_matrix(
        labels: js_sys::Array,
        values: &[f64],
        size: usize,
    ) -> Result<WeightedGraph, JsError> {
        let labels = labels
            .iter()
            .map(|label| {
                label
                    .as_string()
                    .ok_or_else(|| JsError::new("node labels must be strings"))
            })
            .collect::<Result<Vec<String>, JsError>>()?;
        let matrix = square_rows(values, size)?;
        Ok(WeightedGraph {
            inner: GraphModel::from_matrix(labels, &matrix)?,
        })
    }

    /// Import graph from JSON snapshot: `{ labels?: string[], matrix: number[][] }`.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WeightedGraph, JsError> {
        Ok(WeightedGraph {
            inner: GraphModel::from_json(json)?,
        })
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        Ok(self.inner.to_json()?)
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of directed edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Get all node IDs as JSON array.
    #[wasm_bindgen(js_name = nodeIds)]
    pub fn node_ids(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.nodes()).unwrap_or(JsValue::NULL)
    }

    /// Neighbors of a node as `[{ node, weight }]`.
    pub fn neighbors(&self, node: &str) -> Result<JsValue, JsError> {
        let neighbors: Vec<Neighbor> = self
            .inner
            .neighbors(&node.to_string())?
            .map(|(n, weight)| Neighbor { node: n, weight })
            .collect();
        to_js(&neighbors)
    }

    /// Weight of the edge `from -> to`.
    pub fn weight(&self, from: &str, to: &str) -> Result<f64, JsError> {
        Ok(self.inner.weight(&from.to_string(), &to.to_string())?)
    }

    /// Whether the graph can be read as undirected.
    #[wasm_bindgen(js_name = isSymmetric)]
    pub fn is_symmetric(&self) -> bool {
        self.inner.is_symmetric()
    }

    /// Run Dijkstra from `start`.
    /// Returns JSON: { start, distances, predecessors, trace: [{ node, distances, predecessors }] }
    pub fn dijkstra(&self, start: &str) -> Result<JsValue, JsError> {
        let result = dijkstra(&self.inner, &start.to_string())?;
        to_js(&result)
    }

    /// Shortest path between two nodes.
    /// Returns JSON: { path: string[], distance: number }
    #[wasm_bindgen(js_name = shortestPath)]
    pub fn shortest_path(&self, start: &str, target: &str) -> Result<JsValue, JsError> {
        let (path, distance) = shortest_path(&self.inner, &start.to_string(), &target.to_string())?;
        to_js(&PathResult { path, distance })
    }
}

#[cfg(feature = "mst")]
#[wasm_bindgen]
impl WeightedGraph {
    /// Prim's spanning tree of the component containing `start`.
    /// Returns JSON: { edges, total_weight, trace: [{ node, edges }] }
    pub fn prim(&self, start: &str) -> Result<JsValue, JsError> {
        let result = crate::algorithms::prim::prim(&self.inner, &start.to_string())?;
        to_js(&result)
    }

    /// Kruskal's spanning forest.
    /// Returns JSON: { edges, total_weight, trace: [{ edge, edges }] }
    pub fn kruskal(&self) -> Result<JsValue, JsError> {
        let result = crate::algorithms::kruskal::kruskal(&self.inner)?;
        to_js(&result)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Split a flat row-major buffer into `size` rows.
fn square_rows(values: &[f64], size: usize) -> Result<Vec<Vec<f64>>, GraphError> {
    let expected = size.checked_mul(size).ok_or_else(|| {
        GraphError::InvalidGraph(format!("matrix size {} is too large", size))
    })?;
    if values.len() != expected {
        return Err(GraphError::InvalidGraph(format!(
            "expected {} matrix entries for {} nodes, got {}",
            expected,
            size,
            values.len()
        )));
    }
    if size == 0 {
        return Ok(Vec::new());
    }
    Ok(values.chunks(size).map(|row| row.to_vec()).collect())
}
