//! Dijkstra's single-source shortest paths with a per-finalization trace.
//!
//! Every time a node's distance is confirmed the current distance and
//! predecessor tables are snapshotted, so a renderer can replay the search
//! one frame per finalized node.
//!
//! Requires non-negative edge weights.

use crate::error::{GraphError, Result};
use crate::frontier::PriorityFrontier;
use crate::graph::{GraphModel, NodeKey};
use crate::trace::{DijkstraStep, DistanceTable, PredecessorTree, Trace};
use serde::Serialize;
use tracing::{debug, trace};

/// Distances, shortest-path tree and trace of one Dijkstra run.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<N: Ord> {
    pub start: N,
    /// Final distances (infinite for unreachable nodes)
    pub distances: DistanceTable<N>,
    pub predecessors: PredecessorTree<N>,
    /// One step per finalized node, in finalization order
    pub trace: Trace<DijkstraStep<N>>,
}

impl<N: NodeKey> ShortestPathResult<N> {
    /// Final distance to `target`.
    pub fn distance_to(&self, target: &N) -> Result<f64> {
        self.distances
            .get(target)
            .ok_or_else(|| GraphError::unknown(target))
    }

    /// Nodes on the shortest path from the start to `target`, both included.
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        let no_path = || GraphError::NoPath {
            from: self.start.to_string(),
            to: target.to_string(),
        };

        if !self.distance_to(target)?.is_finite() {
            return Err(no_path());
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.start {
            current = self.predecessors.parent(current).ok_or_else(no_path)?;
            path.push(current.clone());
        }
        path.reverse();
        Ok(path)
    }
}

/// Run Dijkstra from `start`.
///
/// # Errors
/// * `UnknownNode` if `start` is not in the graph
/// * `InvalidGraph` if any edge weight is negative, or if a path length
///   overflows `f64`
///
/// Unreachable nodes are not an error; they keep an infinite distance.
pub fn dijkstra<N: NodeKey>(graph: &GraphModel<N>, start: &N) -> Result<ShortestPathResult<N>> {
    let source = graph.index_of(start)?;
    if graph.has_negative_weights() {
        return Err(GraphError::InvalidGraph(
            "negative edge weights are not supported for shortest paths".to_string(),
        ));
    }

    let n = graph.node_count();
    debug!(start = %start, nodes = n, "running dijkstra");

    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut steps = Trace::new();
    distances[source] = 0.0;

    let mut frontier: PriorityFrontier<&N> = PriorityFrontier::new();
    frontier.push(0.0, graph.node(source));

    while let Ok(entry) = frontier.pop_min() {
        let u = graph.index_of(entry.node)?;

        // Skip if we've already found a better path
        if entry.priority > distances[u] {
            trace!(node = %entry.node, stale = entry.priority, "discarding stale entry");
            continue;
        }

        steps.record(DijkstraStep {
            node: entry.node.clone(),
            distances: DistanceTable::from_indexed(graph, &distances),
            predecessors: PredecessorTree::from_indexed(graph, &predecessors),
        });

        for &(v, weight) in graph.neighbors_slice(u) {
            let candidate = entry.priority + weight;
            if candidate.is_infinite() {
                return Err(GraphError::InvalidGraph(format!(
                    "path length through {} -> {} overflows",
                    entry.node,
                    graph.node(v)
                )));
            }
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
                frontier.push(candidate, graph.node(v));
            }
        }
    }

    debug!(finalized = steps.len(), "dijkstra finished");

    Ok(ShortestPathResult {
        start: start.clone(),
        distances: DistanceTable::from_indexed(graph, &distances),
        predecessors: PredecessorTree::from_indexed(graph, &predecessors),
        trace: steps,
    })
}

/// Shortest path and its length between two nodes.
pub fn shortest_path<N: NodeKey>(
    graph: &GraphModel<N>,
    start: &N,
    target: &N,
) -> Result<(Vec<N>, f64)> {
    graph.index_of(target)?;
    let result = dijkstra(graph, start)?;
    let path = result.path_to(target)?;
    Ok((path, result.distance_to(target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::testing::random_matrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn s(label: &str) -> String {
        label.to_string()
    }

    fn path_graph() -> GraphModel<String> {
        GraphModel::lettered(&[
            vec![0.0, 4.0, 0.0],
            vec![4.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    /// Minimum weight over every simple path from `start`, by exhaustive DFS.
    fn brute_force(matrix: &[Vec<f64>], start: usize) -> Vec<f64> {
        fn walk(matrix: &[Vec<f64>], u: usize, cost: f64, seen: &mut Vec<bool>, best: &mut [f64]) {
            best[u] = best[u].min(cost);
            for (v, &w) in matrix[u].iter().enumerate() {
                if w != 0.0 && !seen[v] {
                    seen[v] = true;
                    walk(matrix, v, cost + w, seen, best);
                    seen[v] = false;
                }
            }
        }

        let mut best = vec![f64::INFINITY; matrix.len()];
        let mut seen = vec![false; matrix.len()];
        seen[start] = true;
        walk(matrix, start, 0.0, &mut seen, &mut best);
        best
    }

    #[test]
    fn test_three_node_path() {
        let g = path_graph();
        let result = dijkstra(&g, &s("A")).unwrap();

        assert_eq!(result.distances.get(&s("A")), Some(0.0));
        assert_eq!(result.distances.get(&s("B")), Some(4.0));
        assert_eq!(result.distances.get(&s("C")), Some(5.0));

        assert_eq!(result.predecessors.len(), 2);
        assert_eq!(result.predecessors.parent(&s("B")), Some(&s("A")));
        assert_eq!(result.predecessors.parent(&s("C")), Some(&s("B")));
        assert_eq!(result.predecessors.parent(&s("A")), None);
    }

    #[test]
    fn test_trace_follows_finalization() {
        let g = path_graph();
        let result = dijkstra(&g, &s("A")).unwrap();
        let order: Vec<&str> = result.trace.iter().map(|step| step.node.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);

        // First frame: only the start is known
        let first = &result.trace.as_slice()[0];
        assert_eq!(first.distances.reachable_count(), 1);
        assert!(first.predecessors.is_empty());

        // Frame for C sees the full table
        let last = result.trace.last().unwrap();
        assert_eq!(last.distances.get(&s("C")), Some(5.0));
        assert_eq!(last.predecessors.parent(&s("C")), Some(&s("B")));
    }

    #[test]
    fn test_shorter_path_replaces_first_found() {
        // A-B=10 direct, A-C=1, C-B=2: B is relaxed twice
        let g = GraphModel::from_undirected_edges(
            vec!['A', 'B', 'C'],
            &[('A', 'B', 10.0), ('A', 'C', 1.0), ('C', 'B', 2.0)],
        )
        .unwrap();
        let result = dijkstra(&g, &'A').unwrap();

        assert_eq!(result.distance_to(&'B').unwrap(), 3.0);
        assert_eq!(result.path_to(&'B').unwrap(), vec!['A', 'C', 'B']);
        // Stale (10, B) entry does not produce an extra frame
        assert_eq!(result.trace.len(), 3);
    }

    #[test]
    fn test_unreachable_nodes_stay_infinite() {
        let g = GraphModel::from_edges(vec![1, 2, 3, 4], &[(1, 2, 1.0), (3, 4, 1.0)]).unwrap();
        let result = dijkstra(&g, &1).unwrap();

        assert_eq!(result.distance_to(&2).unwrap(), 1.0);
        assert_eq!(result.distance_to(&3).unwrap(), f64::INFINITY);
        assert!(!result.distances.is_reachable(&4));
        assert_eq!(result.trace.len(), 2);

        assert!(matches!(result.path_to(&4), Err(GraphError::NoPath { .. })));
        assert!(matches!(result.path_to(&9), Err(GraphError::UnknownNode(_))));
    }

    #[test]
    fn test_directed_edges_respected() {
        let g = GraphModel::lettered(&[vec![0.0, 2.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(dijkstra(&g, &s("A")).unwrap().distance_to(&s("B")).unwrap(), 2.0);
        assert!(!dijkstra(&g, &s("B")).unwrap().distances.is_reachable(&s("A")));
    }

    #[test]
    fn test_path_to_start() {
        let g = path_graph();
        let result = dijkstra(&g, &s("B")).unwrap();
        assert_eq!(result.path_to(&s("B")).unwrap(), vec![s("B")]);
    }

    #[test]
    fn test_unknown_start() {
        let g = path_graph();
        let err = dijkstra(&g, &s("Q")).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode(ref n) if n == "Q"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let g = GraphModel::lettered(&[vec![0.0, -1.0], vec![0.0, 0.0]]).unwrap();
        assert!(matches!(dijkstra(&g, &s("A")), Err(GraphError::InvalidGraph(_))));
    }

    #[test]
    fn test_overflowing_path_length_rejected() {
        let g = GraphModel::lettered(&[
            vec![0.0, 1e308, 0.0],
            vec![0.0, 0.0, 1e308],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        assert!(matches!(dijkstra(&g, &s("A")), Err(GraphError::InvalidGraph(_))));

        // A single huge edge still fits
        let result = dijkstra(&g, &s("B")).unwrap();
        assert_eq!(result.distance_to(&s("C")).unwrap(), 1e308);
        assert_eq!(result.trace.len(), 2);
    }

    #[test]
    fn test_equal_weights_finalize_in_node_order() {
        //   A
        //  / \      all weights 1
        // C   B
        //  \ /
        //   D
        let g = GraphModel::from_undirected_edges(
            vec![s("A"), s("C"), s("B"), s("D")],
            &[
                (s("A"), s("C"), 1.0),
                (s("A"), s("B"), 1.0),
                (s("C"), s("D"), 1.0),
                (s("B"), s("D"), 1.0),
            ],
        )
        .unwrap();
        let result = dijkstra(&g, &s("A")).unwrap();

        let order: Vec<&str> = result.trace.iter().map(|step| step.node.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
        // B finalizes before C, so D keeps the path through B
        assert_eq!(result.predecessors.parent(&s("D")), Some(&s("B")));
    }

    #[test]
    fn test_shortest_path_helper() {
        let g = path_graph();
        let (path, distance) = shortest_path(&g, &s("C"), &s("A")).unwrap();
        assert_eq!(path, vec![s("C"), s("B"), s("A")]);
        assert_eq!(distance, 5.0);

        assert!(matches!(
            shortest_path(&g, &s("A"), &s("X")),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        for round in 0..200 {
            let n = 2 + (round % 7);
            let matrix = random_matrix(&mut rng, n, round % 2 == 0);
            let g = GraphModel::lettered(&matrix).unwrap();
            let start = rng.gen_range(0..n);

            let result = dijkstra(&g, &g.nodes()[start]).unwrap();
            let expected = brute_force(&matrix, start);

            for (idx, node) in g.nodes().iter().enumerate() {
                assert_eq!(
                    result.distance_to(node).unwrap(),
                    expected[idx],
                    "round {} node {}",
                    round,
                    node
                );
            }

            let reachable = expected.iter().filter(|d| d.is_finite()).count();
            assert_eq!(result.trace.len(), reachable);
        }
    }

    #[test]
    fn test_distances_monotone_and_frozen() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..50 {
            let n = 3 + (round % 6);
            let matrix = random_matrix(&mut rng, n, false);
            let g = GraphModel::lettered(&matrix).unwrap();
            let result = dijkstra(&g, &g.nodes()[0]).unwrap();

            let steps = result.trace.as_slice();
            for pair in steps.windows(2) {
                for node in g.nodes() {
                    let before = pair[0].distances.get(node).unwrap();
                    let after = pair[1].distances.get(node).unwrap();
                    assert!(after <= before);
                }
            }

            // Once a node has its frame its distance never changes again
            for (i, step) in steps.iter().enumerate() {
                let settled = step.distances.get(&step.node).unwrap();
                for later in &steps[i..] {
                    assert_eq!(later.distances.get(&step.node), Some(settled));
                }
                assert_eq!(result.distance_to(&step.node).unwrap(), settled);
            }
        }
    }

    #[test]
    fn test_graph_reusable_across_runs() {
        let g = path_graph();
        let from_a = dijkstra(&g, &s("A")).unwrap();
        let from_c = dijkstra(&g, &s("C")).unwrap();
        assert_eq!(from_a.distance_to(&s("C")).unwrap(), 5.0);
        assert_eq!(from_c.distance_to(&s("A")).unwrap(), 5.0);
        assert_eq!(dijkstra(&g, &s("A")).unwrap().trace.len(), from_a.trace.len());
    }
}
