pub mod check;
pub mod convert;
pub mod reorder;
pub mod tree_ops;
pub mod update;
