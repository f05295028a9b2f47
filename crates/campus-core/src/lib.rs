//! Campus Core Library
//!
//! Core domain logic for the campus navigation planner: the building
//! registry, the road network, traversal and shortest-path algorithms, and
//! the building hierarchy tree.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod logging;
