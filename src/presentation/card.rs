use crate::domain::creature::{Creature, CreatureId};
use std::fmt;

/// The tap action a card offers
///
/// Cards in the available roster offer `Catch`; cards on the team
/// offer `Release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Catch,
    Release,
}

impl CardAction {
    /// Returns the action label shown on the card
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Catch => "Catch",
            CardAction::Release => "Release",
        }
    }
}

/// View model for a single creature card
///
/// Carries everything the front end needs to draw one pressable card:
/// the creature's display fields plus the action a tap triggers.
///
/// # Example
/// ```
/// use poke_planner::domain::creature::Creature;
/// use poke_planner::presentation::{CardAction, CreatureCard};
///
/// let card = CreatureCard::new(
///     &Creature::new("025", "Pikachu", "Electric", 50),
///     CardAction::Catch,
/// );
/// assert_eq!(card.power_line(), "Power: 50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureCard {
    pub creature_id: CreatureId,
    pub name: String,
    pub category: String,
    pub power: u32,
    pub action: CardAction,
}

impl CreatureCard {
    /// Builds a card for a creature with the given tap action
    pub fn new(creature: &Creature, action: CardAction) -> Self {
        Self {
            creature_id: creature.id.clone(),
            name: creature.name.clone(),
            category: creature.category.clone(),
            power: creature.power,
            action,
        }
    }

    /// Returns the power line as displayed on the card
    pub fn power_line(&self) -> String {
        format!("Power: {}", self.power)
    }
}

impl fmt::Display for CreatureCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.category)?;
        writeln!(f, "{}", self.power_line())?;
        write!(f, "[{}]", self.action.label())
    }
}
