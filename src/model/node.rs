use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::level::Level;

/// A node in a nested forest.
///
/// Children are reference-counted so a transform can rebuild just the path
/// from a root down to the changed node and share every untouched subtree
/// with the previous snapshot. Callers can rely on `Rc::ptr_eq` to detect
/// what actually changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique across the whole forest — a caller-maintained invariant,
    /// never auto-checked
    pub id: String,
    /// Heading level, present only in leveled trees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// Display title
    pub title: String,
    /// Ordered children; insertion index is document order
    pub children: Vec<Rc<Node>>,
}

impl Node {
    /// Create a level-less leaf node
    pub fn new(id: String, title: String) -> Self {
        Node {
            id,
            level: None,
            title,
            children: Vec::new(),
        }
    }

    /// Create a leveled leaf node
    pub fn with_level(id: String, level: Level, title: String) -> Self {
        Node {
            id,
            level: Some(level),
            title,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_len()).sum::<usize>()
    }
}
