//! Derived read views over the team and the catalog
//!
//! Pure functions recomputed eagerly after every state change. Roster
//! sizes are single digits, so there is no caching or incremental
//! aggregation here on purpose.

use super::team::Team;
use crate::domain::creature::{Catalog, Creature};

/// Summary text shown while the team is empty
pub const EMPTY_TEAM_SUMMARY: &str =
    "No Pokémon recruited yet. Catch a partner to start your team!";

/// Separator between category entries in the summary line
const CATEGORY_SEPARATOR: &str = " • ";

/// Returns the catalog entries not currently on the team
///
/// Catalog order is preserved. Together with the team itself this
/// partitions the roster: every catalog creature is on exactly one
/// side at any time.
pub fn available_creatures(catalog: &Catalog, team: &Team) -> Vec<Creature> {
    catalog
        .iter()
        .filter(|creature| !team.contains(&creature.id))
        .cloned()
        .collect()
}

/// Returns the combined power of all members, 0 for an empty team
pub fn total_power(team: &Team) -> u32 {
    team.members().iter().map(|member| member.power).sum()
}

/// Renders the category distribution of the team as a single line
///
/// Members are grouped by exact category string in first-seen order
/// over insertion order, rendered as `"<category> ×<count>"` joined by
/// `" • "`. Category labels are used verbatim: one that happens to
/// contain the separator text is not escaped.
pub fn category_summary(team: &Team) -> String {
    if team.is_empty() {
        return EMPTY_TEAM_SUMMARY.to_string();
    }

    let mut counts: Vec<(&str, u32)> = Vec::new();
    for member in team.members() {
        match counts.iter_mut().find(|(category, _)| *category == member.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((member.category.as_str(), 1)),
        }
    }

    counts
        .iter()
        .map(|(category, count)| format!("{} ×{}", category, count))
        .collect::<Vec<_>>()
        .join(CATEGORY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamAction;

    fn team_of(creatures: Vec<Creature>) -> Team {
        creatures.into_iter().fold(Team::new(), |team, creature| {
            team.apply(TeamAction::Catch(creature)).0
        })
    }

    #[test]
    fn available_creatures_excludes_members() {
        let catalog = Catalog::starter();
        let pikachu = catalog.get(&"025".into()).unwrap().clone();
        let team = team_of(vec![pikachu]);

        let available = available_creatures(&catalog, &team);

        assert_eq!(available.len(), 5);
        assert!(available.iter().all(|c| c.id.as_str() != "025"));
    }

    #[test]
    fn available_creatures_preserves_catalog_order() {
        let catalog = Catalog::starter();
        let charmander = catalog.get(&"004".into()).unwrap().clone();
        let team = team_of(vec![charmander]);

        let names: Vec<String> = available_creatures(&catalog, &team)
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(
            names,
            vec!["Bulbasaur", "Squirtle", "Pikachu", "Jigglypuff", "Eevee"]
        );
    }

    #[test]
    fn empty_team_leaves_whole_catalog_available() {
        let catalog = Catalog::starter();
        let available = available_creatures(&catalog, &Team::new());

        assert_eq!(available.len(), catalog.len());
    }

    #[test]
    fn catalog_partitions_between_team_and_available() {
        let catalog = Catalog::starter();
        let squirtle = catalog.get(&"007".into()).unwrap().clone();
        let eevee = catalog.get(&"133".into()).unwrap().clone();
        let team = team_of(vec![squirtle, eevee]);

        let available = available_creatures(&catalog, &team);

        for creature in catalog.iter() {
            let on_team = team.contains(&creature.id);
            let listed = available.iter().any(|c| c.id == creature.id);
            assert!(on_team != listed, "creature {} on both sides", creature.id);
        }
    }

    #[test]
    fn total_power_of_empty_team_is_zero() {
        assert_eq!(total_power(&Team::new()), 0);
    }

    #[test]
    fn total_power_sums_member_power() {
        let team = team_of(vec![
            Creature::new("001", "Bulbasaur", "Grass / Poison", 42),
            Creature::new("004", "Charmander", "Fire", 48),
        ]);

        assert_eq!(total_power(&team), 90);
    }

    #[test]
    fn category_summary_of_empty_team_is_the_placeholder() {
        assert_eq!(category_summary(&Team::new()), EMPTY_TEAM_SUMMARY);
    }

    #[test]
    fn category_summary_in_first_seen_order() {
        let team = team_of(vec![
            Creature::new("001", "Bulbasaur", "Grass / Poison", 42),
            Creature::new("004", "Charmander", "Fire", 48),
        ]);

        assert_eq!(category_summary(&team), "Grass / Poison ×1 • Fire ×1");
    }

    #[test]
    fn category_summary_counts_repeated_categories() {
        let team = team_of(vec![
            Creature::new("004", "Charmander", "Fire", 48),
            Creature::new("058", "Growlithe", "Fire", 45),
            Creature::new("007", "Squirtle", "Water", 44),
        ]);

        assert_eq!(category_summary(&team), "Fire ×2 • Water ×1");
    }

    #[test]
    fn category_summary_uses_labels_verbatim() {
        // A label containing the separator text is not escaped.
        let team = team_of(vec![Creature::new("000", "Oddity", "A • B", 1)]);

        assert_eq!(category_summary(&team), "A • B ×1");
    }
}
