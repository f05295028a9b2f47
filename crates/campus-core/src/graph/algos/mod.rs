//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal order
//! - `dfs`: Depth-first (pre-order) traversal order
//! - `dijkstra`: Weighted shortest path finding

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra_path;
