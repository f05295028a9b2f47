//! Campus map: the building registry and the road network
//!
//! `CampusGraph` owns both halves of the map. Buildings are keyed by their
//! normalized code; every registered code has an adjacency entry, possibly
//! empty. Roads are undirected and stored once per direction.

pub mod building;
pub mod network;
pub mod registry;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::types::{PathResult, Road, Traversal};
use crate::graph::{bfs_traverse, dfs_traverse, dijkstra_path, GraphProvider};

pub use building::{normalize_code, Building, BuildingKind};
pub use network::{AdjacencyEntry, CampusSnapshot};
pub use registry::Registration;

/// Weighted, undirected campus map
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    buildings: BTreeMap<String, Building>,
    adjacency: BTreeMap<String, Vec<Road>>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breadth-first visiting order from `start` (case-insensitive code)
    pub fn breadth_first(&self, start: &str) -> Result<Traversal> {
        bfs_traverse(self, &normalize_code(start))
    }

    /// Depth-first visiting order from `start` (case-insensitive code)
    pub fn depth_first(&self, start: &str) -> Result<Traversal> {
        dfs_traverse(self, &normalize_code(start))
    }

    /// Shortest path between two buildings (case-insensitive codes)
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        dijkstra_path(self, &normalize_code(from), &normalize_code(to))
    }
}

impl GraphProvider for CampusGraph {
    fn contains(&self, code: &str) -> bool {
        self.buildings.contains_key(code)
    }

    fn neighbors(&self, code: &str) -> &[Road] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}
