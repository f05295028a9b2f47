use serde::Serialize;

/// Length of a road, or an accumulated path length.
///
/// Distances are expected to be finite and non-negative. The shortest-path
/// engine relies on this and does not re-check it; use [`Distance::try_new`]
/// at input boundaries.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    /// Validate a raw value as a road distance
    pub fn try_new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            crate::bail_invalid!("distance", value);
        }
        Ok(Distance(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One direction of a road as stored in an adjacency list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Road {
    pub to: String,
    pub distance: Distance,
}

impl Road {
    pub fn new(to: impl Into<String>, distance: Distance) -> Self {
        Self {
            to: to.into(),
            distance,
        }
    }
}

/// Traversal strategy used to produce a visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first (level order)
    Bfs,
    /// Depth-first (pre-order)
    Dfs,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "BFS"),
            Strategy::Dfs => write!(f, "DFS"),
        }
    }
}

/// Visiting order produced by a traversal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traversal {
    pub start: String,
    pub strategy: Strategy,
    pub order: Vec<String>,
}

/// Path result
///
/// `found == false` means the endpoints lie in different components; the
/// path is then empty and `total_distance` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
    pub total_distance: Option<Distance>,
}

impl PathResult {
    pub fn found(from: &str, to: &str, path: Vec<String>, total_distance: Distance) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            path,
            total_distance: Some(total_distance),
        }
    }

    pub fn not_found(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            path: Vec::new(),
            total_distance: None,
        }
    }
}
