//! Error types shared by the graph model and every algorithm.

/// Graph algorithm error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Malformed input: non-square matrix, bad label set, non-finite or
    /// disallowed weights, duplicate edges.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// A start, target or referenced node is not part of the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Weight lookup on a pair of nodes that are not adjacent.
    #[error("No edge from {from} to {to}")]
    NoSuchEdge { from: String, to: String },

    /// Path reconstruction towards an unreachable target.
    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    /// Pop from an exhausted priority frontier.
    #[error("Priority frontier is empty")]
    Empty,

    /// Graph snapshot could not be parsed.
    #[error("Invalid graph snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn unknown(node: &impl std::fmt::Display) -> Self {
        GraphError::UnknownNode(node.to_string())
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
