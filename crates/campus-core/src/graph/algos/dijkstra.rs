use crate::error::{CampusError, Result};
use crate::graph::types::{Distance, PathResult};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
///
/// Entries with equal cost are ordered by push sequence so that pops are
/// deterministic for a fixed graph.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub code: String,
    pub accumulated_cost: Distance,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during Dijkstra search
struct DijkstraState {
    best: HashMap<String, Distance>,
    predecessors: HashMap<String, String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            best: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, code: &str, cost: Distance) {
        self.heap.push(Reverse(HeapEntry {
            code: code.to_string(),
            accumulated_cost: cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Record `candidate` for `code` if it beats the best known distance.
    ///
    /// Unreached nodes sit at infinity, so an overflowed sum never lands.
    fn relax(&mut self, from: &str, code: &str, candidate: Distance) -> bool {
        let current = self
            .best
            .get(code)
            .map_or(f64::INFINITY, Distance::value);
        let improved = candidate.value() < current;
        if improved {
            self.best.insert(code.to_string(), candidate);
            self.predecessors.insert(code.to_string(), from.to_string());
        }
        improved
    }
}

/// Walk predecessor links from `to` back to `from` and return the path in
/// travel order.
fn reconstruct_path(from: &str, to: &str, predecessors: &HashMap<String, String>) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    // Bounded walk: a predecessor cycle (only possible with negative weights)
    // must not hang the caller.
    while current != from && path.len() <= predecessors.len() {
        match predecessors.get(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// Shortest path from `from` to `to` using Dijkstra with lazy deletion.
///
/// Stale heap entries (popped cost above the best known distance) are
/// skipped instead of being decreased in place. The search stops as soon as
/// `to` is popped. All stored distances must be non-negative; negative
/// weights give wrong answers rather than an error.
///
/// Returns `PathResult::not_found` when `to` is unreachable.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn dijkstra_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    for code in [from, to] {
        if !provider.contains(code) {
            return Err(CampusError::unknown_building(code));
        }
    }

    if from == to {
        return Ok(PathResult::found(
            from,
            to,
            vec![from.to_string()],
            Distance::ZERO,
        ));
    }

    let mut state = DijkstraState::new();
    state.best.insert(from.to_string(), Distance::ZERO);
    state.push(from, Distance::ZERO);

    let mut pops = 0usize;
    while let Some(Reverse(HeapEntry {
        code: current,
        accumulated_cost,
        ..
    })) = state.heap.pop()
    {
        pops += 1;

        if state
            .best
            .get(&current)
            .is_some_and(|best| accumulated_cost > *best)
        {
            continue;
        }

        if current == to {
            break;
        }

        for road in provider.neighbors(&current) {
            let candidate = accumulated_cost + road.distance;
            if state.relax(&current, &road.to, candidate) {
                state.push(&road.to, candidate);
            }
        }
    }

    tracing::debug!(pops, settled = state.best.len(), "dijkstra complete");

    match state.best.get(to) {
        Some(total) => {
            let path = reconstruct_path(from, to, &state.predecessors);
            Ok(PathResult::found(from, to, path, *total))
        }
        None => Ok(PathResult::not_found(from, to)),
    }
}
