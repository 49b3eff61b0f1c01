use super::value_objects::{Creature, CreatureId};
use crate::domain::errors::{CatalogError, CatalogResult};

/// The fixed, immutable roster of creatures available to recruit
///
/// Built once at startup from configuration data and never mutated
/// afterwards. Roster order is preserved and is the order in which
/// available creatures are presented.
///
/// # Invariants
/// - No two entries share the same id
///
/// # Example
/// ```
/// use poke_planner::domain::creature::Catalog;
///
/// let catalog = Catalog::starter();
/// assert_eq!(catalog.len(), 6);
/// assert!(catalog.get(&"025".into()).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Creature>,
}

impl Catalog {
    /// Creates a catalog from a list of creatures
    ///
    /// # Returns
    /// * `Ok(Catalog)` - If all ids are distinct
    /// * `Err(CatalogError::DuplicateId)` - On the first repeated id
    pub fn new(entries: Vec<Creature>) -> CatalogResult<Self> {
        for (i, creature) in entries.iter().enumerate() {
            if entries[..i].iter().any(|c| c.id == creature.id) {
                return Err(CatalogError::DuplicateId(creature.id.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// Parses a catalog from a JSON array of creatures
    ///
    /// # Returns
    /// * `Ok(Catalog)` - If the JSON is well formed and ids are distinct
    /// * `Err(CatalogError)` - On malformed JSON or a repeated id
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let entries: Vec<Creature> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Returns the built-in starter roster
    ///
    /// The six-creature roster the planner ships with. Infallible by
    /// construction: the ids are distinct.
    pub fn starter() -> Self {
        Self {
            entries: vec![
                Creature::new("001", "Bulbasaur", "Grass / Poison", 42),
                Creature::new("004", "Charmander", "Fire", 48),
                Creature::new("007", "Squirtle", "Water", 44),
                Creature::new("025", "Pikachu", "Electric", 50),
                Creature::new("039", "Jigglypuff", "Fairy", 38),
                Creature::new("133", "Eevee", "Normal", 46),
            ],
        }
    }

    /// Looks up a creature by id
    pub fn get(&self, id: &CreatureId) -> Option<&Creature> {
        self.entries.iter().find(|c| &c.id == id)
    }

    /// Iterates over the roster in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.entries.iter()
    }

    /// Returns the number of creatures in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
