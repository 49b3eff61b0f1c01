use crate::domain::creature::CreatureId;
use serde::{Deserialize, Serialize};

/// Domain events that occur within the Team aggregate
///
/// An event is emitted only when a transition actually changed the
/// state: a duplicate catch or an absent-id release is a silent no-op
/// and produces nothing. They are used for:
/// - Driving presentation refreshes
/// - Logging team activity
///
/// # Example
/// ```
/// use poke_planner::domain::team::TeamEvent;
///
/// let event = TeamEvent::Caught {
///     creature_id: "025".into(),
///     name: "Pikachu".to_string(),
/// };
/// assert_eq!(event.creature_id().as_str(), "025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamEvent {
    /// Fired when a creature joins the team
    Caught {
        /// Id of the recruited creature
        creature_id: CreatureId,
        /// Display name of the recruited creature
        name: String,
    },
    /// Fired when a member is removed from the team
    Released {
        /// Id of the released creature
        creature_id: CreatureId,
    },
}

impl TeamEvent {
    /// Returns the creature_id for this event
    pub fn creature_id(&self) -> &CreatureId {
        match self {
            TeamEvent::Caught { creature_id, .. } => creature_id,
            TeamEvent::Released { creature_id } => creature_id,
        }
    }
}
