use super::actions::TeamAction;
use super::events::TeamEvent;
use crate::domain::creature::{Creature, CreatureId};

/// Team aggregate root
///
/// Represents the user's current squad of recruited creatures.
/// Transitions are applied as a pure reducer over [`TeamAction`]
/// intents; prior states are never mutated, which keeps them
/// trivially comparable in tests and leaves the door open for undo.
///
/// # Invariants
/// - No two members share the same id
/// - Insertion order is preserved
///
/// # Example
/// ```
/// use poke_planner::domain::creature::Creature;
/// use poke_planner::domain::team::{Team, TeamAction};
///
/// let pikachu = Creature::new("025", "Pikachu", "Electric", 50);
/// let (team, event) = Team::new().apply(TeamAction::Catch(pikachu));
///
/// assert_eq!(team.len(), 1);
/// assert!(event.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Team {
    members: Vec<Creature>,
}

impl Team {
    /// Creates an empty team
    ///
    /// Every session starts here; there is no persisted team state.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Applies an intent to the team, producing the next state
    ///
    /// # Returns
    /// The next state, plus the domain event for the transition when
    /// the state actually changed. Invalid intents degrade to silent
    /// no-ops rather than errors:
    /// - `Catch` of a creature already on the team returns the state
    ///   unchanged with no event
    /// - `Release` of an id not on the team returns the state
    ///   unchanged with no event
    ///
    /// Both operations are therefore idempotent and total.
    pub fn apply(&self, action: TeamAction) -> (Team, Option<TeamEvent>) {
        match action {
            TeamAction::Catch(creature) => {
                if self.contains(&creature.id) {
                    return (self.clone(), None);
                }

                let event = TeamEvent::Caught {
                    creature_id: creature.id.clone(),
                    name: creature.name.clone(),
                };

                let mut members = self.members.clone();
                members.push(creature);

                (Team { members }, Some(event))
            }
            TeamAction::Release(id) => {
                if !self.contains(&id) {
                    return (self.clone(), None);
                }

                let members = self
                    .members
                    .iter()
                    .filter(|member| member.id != id)
                    .cloned()
                    .collect();

                (Team { members }, Some(TeamEvent::Released { creature_id: id }))
            }
        }
    }

    /// Returns true if a member with the given id is on the team
    pub fn contains(&self, id: &CreatureId) -> bool {
        self.members.iter().any(|member| &member.id == id)
    }

    /// Returns the members in insertion order
    pub fn members(&self) -> &[Creature] {
        &self.members
    }

    /// Returns the number of members on the team
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the team has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
