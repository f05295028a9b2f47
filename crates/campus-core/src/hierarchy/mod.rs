//! Building hierarchy tree
//!
//! An independent rooted tree of names (campus → zones → buildings, or any
//! other categorisation). Names need not be unique; lookups return the first
//! match in pre-order. All walks use explicit stacks.

use std::fmt;

use crate::error::{CampusError, Result};

/// A named node owning its children.
///
/// The derived `Debug` recurses; format a deep tree through [`HierarchyTree`].
#[derive(Debug)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }
}

/// Outcome of `set_root`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootChange {
    /// The tree was empty and now has a root
    Created,
    /// The existing root was renamed; its children are kept
    Renamed { previous: String },
}

/// Rooted tree of names.
///
/// Not `Clone` or comparable: those would recurse per level. Walk it with
/// [`HierarchyTree::display`] instead.
#[derive(Default)]
pub struct HierarchyTree {
    root: Option<TreeNode>,
}

impl HierarchyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    pub fn root_name(&self) -> Option<&str> {
        self.root.as_ref().map(|node| node.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.display().count()
    }

    /// Create the root, or rename it if one exists.
    ///
    /// Renaming keeps every existing child.
    pub fn set_root(&mut self, name: &str) -> RootChange {
        match &mut self.root {
            Some(root) => {
                let previous = std::mem::replace(&mut root.name, name.to_string());
                tracing::debug!(%previous, root = %name, "hierarchy root renamed");
                RootChange::Renamed { previous }
            }
            None => {
                self.root = Some(TreeNode::new(name));
                tracing::debug!(root = %name, "hierarchy root created");
                RootChange::Created
            }
        }
    }

    /// Append a new leaf under the first node named `parent` (pre-order).
    pub fn add_child(&mut self, parent: &str, child: &str) -> Result<()> {
        let root = self.root.as_mut().ok_or(CampusError::NoRoot)?;

        let path = find_path(root, parent).ok_or_else(|| CampusError::ParentNotFound {
            name: parent.to_string(),
        })?;

        let mut node = root;
        for index in path {
            node = &mut node.children[index];
        }
        node.children.push(TreeNode::new(child));

        tracing::debug!(%parent, %child, "hierarchy child added");
        Ok(())
    }

    /// Whether some node carries `name`
    pub fn contains(&self, name: &str) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| find_path(root, name).is_some())
    }

    /// Lazy pre-order walk yielding `(depth, name)`, root at depth 0.
    ///
    /// Each call starts a fresh walk.
    pub fn display(&self) -> HierarchyIter<'_> {
        HierarchyIter {
            stack: self.root.iter().map(|root| (0, root)).collect(),
        }
    }
}

impl fmt::Debug for HierarchyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyTree")
            .field("root", &self.root_name())
            .field("len", &self.len())
            .finish()
    }
}

impl Drop for HierarchyTree {
    fn drop(&mut self) {
        // Flatten before dropping so deep trees do not exhaust the stack.
        let mut pending: Vec<TreeNode> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Child-index path from `root` to the first pre-order node named `name`
fn find_path(root: &TreeNode, name: &str) -> Option<Vec<usize>> {
    // Frames hold a node and the index of the next child to visit; the
    // indices on the stack spell the path to the current node.
    let mut stack: Vec<(&TreeNode, usize)> = vec![(root, 0)];
    if root.name == name {
        return Some(Vec::new());
    }

    while let Some(frame) = stack.last_mut() {
        let node: &TreeNode = frame.0;
        let Some(child) = node.children.get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if child.name == name {
            return Some(stack.iter().map(|(_, next)| next - 1).collect());
        }
        stack.push((child, 0));
    }

    None
}

/// Pre-order iterator over a hierarchy
pub struct HierarchyIter<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for HierarchyIter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node.name.as_str()))
    }
}
