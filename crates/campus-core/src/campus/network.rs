use serde::Serialize;

use super::{normalize_code, Building, CampusGraph};
use crate::error::{CampusError, Result};
use crate::graph::types::{Distance, Road};

/// Adjacency list of one building, for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry {
    pub code: String,
    pub roads: Vec<Road>,
}

/// Read-only copy of the whole map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampusSnapshot {
    pub buildings: Vec<Building>,
    pub adjacency: Vec<AdjacencyEntry>,
}

impl CampusSnapshot {
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl CampusGraph {
    /// Add an undirected road between two registered buildings.
    ///
    /// Both directions are appended together. Self-loops and repeated
    /// connections between the same pair are kept as separate roads.
    ///
    /// `distance` must be finite and non-negative (see [`Distance::try_new`]);
    /// it is not re-checked here.
    ///
    /// Fails with `UnknownBuilding` without touching the map if either code is
    /// not registered.
    #[tracing::instrument(skip(self), fields(distance = %distance))]
    pub fn connect(&mut self, code_a: &str, code_b: &str, distance: Distance) -> Result<()> {
        let a = normalize_code(code_a);
        let b = normalize_code(code_b);

        for code in [&a, &b] {
            if !self.buildings.contains_key(code) {
                return Err(CampusError::unknown_building(code.as_str()));
            }
        }

        self.adjacency
            .entry(a.clone())
            .or_default()
            .push(Road::new(b.clone(), distance));
        self.adjacency
            .entry(b)
            .or_default()
            .push(Road::new(a, distance));

        tracing::debug!("road added");
        Ok(())
    }

    /// Stored roads leaving a (case-insensitive) code, in insertion order
    pub fn roads_from(&self, code: &str) -> &[Road] {
        self.adjacency
            .get(&normalize_code(code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of undirected roads
    pub fn road_count(&self) -> usize {
        // Every road is stored twice, a self-loop twice in the same list.
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Copy of all buildings and adjacency lists, ordered by code
    pub fn snapshot(&self) -> CampusSnapshot {
        CampusSnapshot {
            buildings: self.buildings.values().cloned().collect(),
            adjacency: self
                .adjacency
                .iter()
                .map(|(code, roads)| AdjacencyEntry {
                    code: code.clone(),
                    roads: roads.clone(),
                })
                .collect(),
        }
    }
}
