// Team domain module
// Contains team aggregate root, intent actions, domain events,
// and the derived view computations

#![allow(clippy::module_inception)]

pub mod actions;
pub mod events;
pub mod team;
pub mod views;

// Re-export main types for convenience
pub use actions::TeamAction;
pub use events::TeamEvent;
pub use team::Team;
