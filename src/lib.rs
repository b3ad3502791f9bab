//! Hierarchical reordering engine for drag-and-drop outlines and trees.
//!
//! Three independent pieces over in-memory forests: a copy-on-write node
//! updater, a level-constrained reorder engine driven by drop slots, and a
//! converter between level-grouped outlines and nested trees. Every transform
//! is a pure function from the previous snapshot to a new one, sharing each
//! untouched subtree with the input — rendering and drag capture stay outside
//! the crate.

pub mod engine;
pub mod model;
pub mod ops;
pub mod parse;
