use crate::graph::types::Road;

/// Trait for providing graph adjacency to the traversal algorithms.
///
/// Codes passed in are expected to be canonical (already normalized).
pub trait GraphProvider {
    /// Whether the code names a registered node
    fn contains(&self, code: &str) -> bool;

    /// Stored roads leaving `code`, in insertion order
    fn neighbors(&self, code: &str) -> &[Road];
}
