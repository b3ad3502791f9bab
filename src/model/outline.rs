use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::level::Level;

/// A single leveled item — the flat counterpart of a node, minus its children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub id: String,
    pub level: Level,
    pub title: String,
}

impl Heading {
    pub fn new(id: String, level: Level, title: String) -> Self {
        Heading { id, level, title }
    }
}

/// A forest grouped by level: an ordered mapping from each level to the items
/// at that level, in document order.
///
/// Invariant: a heading's `level` field equals the key of the group holding
/// it. `push` upholds this; direct `group_mut` edits are the caller's
/// responsibility (see `ops::check::check_outline`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    groups: IndexMap<Level, Vec<Rc<Heading>>>,
}

impl Outline {
    /// Create an empty outline with all six groups present, in level order
    pub fn new() -> Self {
        let mut groups = IndexMap::new();
        for level in Level::ALL {
            groups.insert(level, Vec::new());
        }
        Outline { groups }
    }

    /// Items at a level. Empty when the group is absent (possible after
    /// deserializing a partial map).
    pub fn group(&self, level: Level) -> &[Rc<Heading>] {
        self.groups.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to a level's group, created on demand
    pub fn group_mut(&mut self, level: Level) -> &mut Vec<Rc<Heading>> {
        self.groups.entry(level).or_default()
    }

    /// Append a heading to the group named by its own level
    pub fn push(&mut self, heading: Heading) {
        self.group_mut(heading.level).push(Rc::new(heading));
    }

    /// Find an item by id, scanning groups in level order.
    /// With duplicate ids the first match wins.
    pub fn find(&self, id: &str) -> Option<(Level, &Rc<Heading>)> {
        for level in Level::ALL {
            if let Some(heading) = self.group(level).iter().find(|h| h.id == id) {
                return Some((level, heading));
            }
        }
        None
    }

    /// Total item count across all groups
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Outline {
    fn default() -> Self {
        Outline::new()
    }
}
