//! Thin state containers over the pure transforms.
//!
//! Each editor owns the latest committed snapshot and applies boundary events
//! against it one at a time: an `apply` always reads the current snapshot,
//! never a stale copy, so rapid-fire events compose in arrival order. The
//! transforms themselves live in `ops` and never touch the containers.

use std::rc::Rc;

use crate::model::{Node, Outline};
use crate::ops::convert::nest;
use crate::ops::reorder::reorder;
use crate::ops::tree_ops::add_child;
use crate::ops::update::update_node;

/// Drag-end event from the drag layer. `target_slot_id` is `None` when the
/// drag was aborted or released outside any slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub dragged_id: String,
    pub target_slot_id: Option<String>,
}

/// Request to append a synthesized child under an existing node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddChildRequest {
    pub parent_id: String,
}

/// Owns the committed outline snapshot and applies drag events against it
#[derive(Debug, Clone, Default)]
pub struct OutlineEditor {
    outline: Outline,
}

impl OutlineEditor {
    pub fn new(outline: Outline) -> Self {
        OutlineEditor { outline }
    }

    /// The committed snapshot
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The committed snapshot as a nested forest
    pub fn nested(&self) -> Vec<Rc<Node>> {
        nest(&self.outline)
    }

    /// Commit the result of a drag-end event. Aborted and invalid drags
    /// commit a structurally unchanged snapshot — never a partial move.
    pub fn apply(&mut self, event: &DragEnd) {
        self.outline = reorder(
            &self.outline,
            &event.dragged_id,
            event.target_slot_id.as_deref(),
        );
    }
}

/// Owns a free-form forest and applies child-append and update events
#[derive(Debug, Clone, Default)]
pub struct TreeEditor {
    roots: Vec<Rc<Node>>,
}

impl TreeEditor {
    pub fn new(roots: Vec<Rc<Node>>) -> Self {
        TreeEditor { roots }
    }

    pub fn roots(&self) -> &[Rc<Node>] {
        &self.roots
    }

    /// Commit an add-child request. Unknown parents commit an unchanged
    /// forest.
    pub fn apply(&mut self, event: &AddChildRequest) {
        self.roots = add_child(&self.roots, &event.parent_id);
    }

    /// Commit a single-node transform against the current forest
    pub fn update<F>(&mut self, target_id: &str, transform: F)
    where
        F: FnOnce(&Node) -> Node,
    {
        self.roots = update_node(&self.roots, target_id, transform);
    }
}
