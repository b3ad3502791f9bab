pub mod serializer;
pub mod slot;

pub use serializer::{serialize_forest, serialize_outline};
pub use slot::{Slot, parse_slot, slot_id};
