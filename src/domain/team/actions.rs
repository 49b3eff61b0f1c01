use crate::domain::creature::{Creature, CreatureId};

/// User intents against the Team aggregate
///
/// A closed sum type: every tap the presentation layer forwards is one
/// of these two cases, dispatched by a pure match in [`Team::apply`].
///
/// [`Team::apply`]: super::Team::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    /// Recruit a creature onto the team
    Catch(Creature),
    /// Remove the member with the given id from the team
    Release(CreatureId),
}
