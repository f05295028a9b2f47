use crate::error::{CampusError, Result};
use crate::graph::types::{Strategy, Traversal};
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first visiting order from `start`.
///
/// Neighbors are enqueued in stored order and marked visited when enqueued,
/// so a node reachable along several paths is listed once, at its first
/// discovery. Nodes outside the start's component never appear.
#[tracing::instrument(skip(provider), fields(start = %start))]
pub fn bfs_traverse(provider: &dyn GraphProvider, start: &str) -> Result<Traversal> {
    if !provider.contains(start) {
        return Err(CampusError::unknown_building(start));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());

        for road in provider.neighbors(current) {
            if visited.insert(road.to.as_str()) {
                queue.push_back(road.to.as_str());
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs complete");

    Ok(Traversal {
        start: start.to_string(),
        strategy: Strategy::Bfs,
        order,
    })
}
