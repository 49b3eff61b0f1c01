use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a creature within the catalog
///
/// # Invariants
/// - Unique within a [`Catalog`](super::Catalog) (enforced at catalog
///   construction, not here)
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(String);

impl CreatureId {
    /// Creates a new CreatureId
    ///
    /// Any non-structured string is accepted; ids are opaque labels
    /// such as the original roster's `"025"`.
    ///
    /// # Example
    /// ```
    /// use poke_planner::domain::creature::CreatureId;
    ///
    /// let id = CreatureId::new("025");
    /// assert_eq!(id.as_str(), "025");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        CreatureId(id.into())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CreatureId {
    fn from(id: &str) -> Self {
        CreatureId::new(id)
    }
}

impl From<String> for CreatureId {
    fn from(id: String) -> Self {
        CreatureId(id)
    }
}

/// A recruitable creature from the fixed roster
///
/// Immutable value object: created once as part of the static catalog,
/// never mutated, copied freely between the catalog and the team.
///
/// The category is a free-form label and may encode multiple tags
/// joined by `" / "` (e.g. `"Grass / Poison"`); it is never parsed,
/// only compared and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub category: String,
    pub power: u32,
}

impl Creature {
    /// Creates a new Creature value object
    ///
    /// # Example
    /// ```
    /// use poke_planner::domain::creature::Creature;
    ///
    /// let pikachu = Creature::new("025", "Pikachu", "Electric", 50);
    /// assert_eq!(pikachu.power, 50);
    /// ```
    pub fn new(
        id: impl Into<CreatureId>,
        name: impl Into<String>,
        category: impl Into<String>,
        power: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creature_id_as_str() {
        let id = CreatureId::new("001");
        assert_eq!(id.as_str(), "001");
    }

    #[test]
    fn creature_id_display() {
        let id = CreatureId::new("133");
        assert_eq!(format!("{}", id), "133");
    }

    #[test]
    fn creature_id_equality() {
        assert_eq!(CreatureId::new("025"), CreatureId::from("025"));
        assert_ne!(CreatureId::new("025"), CreatureId::new("026"));
    }

    #[test]
    fn creature_construction() {
        let bulbasaur = Creature::new("001", "Bulbasaur", "Grass / Poison", 42);

        assert_eq!(bulbasaur.id.as_str(), "001");
        assert_eq!(bulbasaur.name, "Bulbasaur");
        assert_eq!(bulbasaur.category, "Grass / Poison");
        assert_eq!(bulbasaur.power, 42);
    }

    #[test]
    fn creature_clone_equality() {
        let eevee = Creature::new("133", "Eevee", "Normal", 46);
        let copy = eevee.clone();
        assert_eq!(eevee, copy);
    }

    #[test]
    fn creature_serde_round_trip() {
        let squirtle = Creature::new("007", "Squirtle", "Water", 44);
        let json = serde_json::to_string(&squirtle).unwrap();
        let back: Creature = serde_json::from_str(&json).unwrap();
        assert_eq!(squirtle, back);
    }

    #[test]
    fn creature_id_serializes_transparently() {
        let json = serde_json::to_string(&CreatureId::new("025")).unwrap();
        assert_eq!(json, "\"025\"");
    }
}
