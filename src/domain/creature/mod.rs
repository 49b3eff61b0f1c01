// Creature domain module
// Contains the creature value object and the fixed roster catalog

pub mod catalog;
pub mod value_objects;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use value_objects::{Creature, CreatureId};
