// Presentation layer module exports
// View models over the domain, consumed by a rendering front end.
// Depends on the domain; the domain never depends on this layer.

pub mod card;
pub mod screen;

pub use card::{CardAction, CreatureCard};
pub use screen::{PlannerScreen, RosterSection, ScreenView, SummaryCard};
