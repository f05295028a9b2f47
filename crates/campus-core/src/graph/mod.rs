//! Graph traversal and path-finding operations
//!
//! Provides graph algorithms for navigating the campus map:
//! - BFS and DFS traversal orders
//! - Dijkstra path-finding for weighted shortest paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod traversal;
pub mod types;

pub use algos::{bfs_traverse, dfs_traverse, dijkstra_path};
pub use traversal::GraphProvider;
pub use types::{Distance, PathResult, Road, Strategy, Traversal};
