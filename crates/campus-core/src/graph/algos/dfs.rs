use crate::error::{CampusError, Result};
use crate::graph::types::{Strategy, Traversal};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Stack frame: a node and the index of the next neighbor to try
struct Frame<'a> {
    code: &'a str,
    next: usize,
}

/// Depth-first (pre-order) visiting order from `start`.
///
/// Produces the same order as the recursive formulation: visit a node, then
/// fully descend into each unvisited neighbor in stored order before moving
/// to the next sibling. An explicit stack keeps memory bounded by the number
/// of reachable nodes regardless of path depth.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: &str) -> Result<Traversal> {
    if !provider.contains(start) {
        return Err(CampusError::unknown_building(start));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![Frame {
        code: start,
        next: 0,
    }];
    let mut order = vec![start.to_string()];
    visited.insert(start);

    while let Some(frame) = stack.last_mut() {
        let neighbors = provider.neighbors(frame.code);

        let Some(road) = neighbors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let neighbor = road.to.as_str();
        if visited.insert(neighbor) {
            order.push(neighbor.to_string());
            stack.push(Frame {
                code: neighbor,
                next: 0,
            });
        }
    }

    tracing::debug!(visited = order.len(), "dfs complete");

    Ok(Traversal {
        start: start.to_string(),
        strategy: Strategy::Dfs,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::test_support::TestGraph;

    fn recursive_order(graph: &TestGraph, start: &str) -> Vec<String> {
        fn visit(graph: &TestGraph, code: &str, seen: &mut Vec<String>) {
            seen.push(code.to_string());
            for road in graph.neighbors(code) {
                if !seen.contains(&road.to) {
                    visit(graph, &road.to, seen);
                }
            }
        }
        let mut seen = Vec::new();
        visit(graph, start, &mut seen);
        seen
    }

    #[test]
    fn test_dfs_unknown_start() {
        let graph = TestGraph::with_nodes(&["CS"]);
        assert!(matches!(
            dfs_traverse(&graph, "LIB"),
            Err(CampusError::UnknownBuilding { .. })
        ));
    }

    #[test]
    fn test_dfs_descends_before_siblings() {
        // CS - LIB - ADM
        //  \
        //   HOS - GYM
        let graph = TestGraph::with_nodes(&["CS", "LIB", "ADM", "HOS", "GYM"])
            .road("CS", "LIB", 1.0)
            .road("CS", "HOS", 1.0)
            .road("LIB", "ADM", 1.0)
            .road("HOS", "GYM", 1.0);

        let result = dfs_traverse(&graph, "CS").unwrap();
        assert_eq!(result.order, vec!["CS", "LIB", "ADM", "HOS", "GYM"]);
        assert_eq!(result.strategy, Strategy::Dfs);
    }

    #[test]
    fn test_dfs_cycle_visits_each_once() {
        let graph = TestGraph::with_nodes(&["A", "B", "C", "D"])
            .road("A", "B", 1.0)
            .road("B", "C", 1.0)
            .road("C", "A", 1.0)
            .road("C", "D", 1.0);

        let result = dfs_traverse(&graph, "A").unwrap();
        assert_eq!(result.order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        let graph = TestGraph::with_nodes(&["A", "B", "C", "D", "E", "F", "G", "H"])
            .road("A", "E", 1.0)
            .road("A", "B", 1.0)
            .road("B", "C", 1.0)
            .road("E", "C", 1.0)
            .road("C", "D", 1.0)
            .road("D", "A", 1.0)
            .road("F", "G", 1.0)
            .road("E", "F", 1.0)
            .road("B", "B", 1.0);

        let result = dfs_traverse(&graph, "A").unwrap();
        assert_eq!(result.order, recursive_order(&graph, "A"));
        assert!(!result.order.contains(&"H".to_string()));
    }

    #[test]
    fn test_dfs_long_chain_does_not_recurse() {
        let codes: Vec<String> = (0..50_000).map(|i| format!("N{}", i)).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let mut graph = TestGraph::with_nodes(&refs);
        for pair in refs.windows(2) {
            graph = graph.road(pair[0], pair[1], 1.0);
        }

        let result = dfs_traverse(&graph, "N0").unwrap();
        assert_eq!(result.order.len(), 50_000);
        assert_eq!(result.order.last().unwrap(), "N49999");
    }
}
