use std::fmt;

use crate::domain::creature::{Catalog, CreatureId};
use crate::domain::team::{views, Team, TeamAction, TeamEvent};

use super::card::{CardAction, CreatureCard};

const SCREEN_TITLE: &str = "Pokémon Team Planner";
const SCREEN_SUBTITLE: &str = "Build your dream squad with strategy in mind.";
const SUMMARY_TITLE: &str = "Team Snapshot";
const AVAILABLE_TITLE: &str = "Available Pokémon";
const AVAILABLE_EMPTY_HINT: &str = "Every Pokémon is already on your team. Time to train!";
const TEAM_TITLE: &str = "Your Team";
const TEAM_EMPTY_HINT: &str = "Your Poké Balls are ready. Catch a Pokémon to see it here!";

/// View model for the team snapshot card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub team_size: usize,
    pub total_power: u32,
    pub category_summary: String,
}

impl fmt::Display for SummaryCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", SUMMARY_TITLE)?;
        writeln!(f, "Members recruited: {}", self.team_size)?;
        writeln!(f, "Total combined power: {}", self.total_power)?;
        write!(f, "{}", self.category_summary)
    }
}

/// A titled stack of creature cards with an empty-state hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSection {
    pub title: &'static str,
    pub cards: Vec<CreatureCard>,
    pub empty_hint: &'static str,
}

impl fmt::Display for RosterSection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if self.cards.is_empty() {
            return write!(f, "{}", self.empty_hint);
        }

        let stack: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "{}", stack.join("\n\n"))
    }
}

/// Complete view model for one render of the planner screen
///
/// A pure snapshot of the current state: hero text, the summary card,
/// and both roster sections. The front end draws it; nothing in here
/// mutates anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub summary: SummaryCard,
    pub available: RosterSection,
    pub team: RosterSection,
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "{}", self.available)?;
        writeln!(f)?;
        write!(f, "{}", self.team)
    }
}

/// Presentation glue for the planner screen
///
/// Owns the catalog and the current team state, forwards user taps
/// into the domain reducer, and produces [`ScreenView`] snapshots for
/// the front end. Single-threaded and synchronous: each interaction is
/// processed to completion before the next is accepted, so the one
/// writer here never races its readers.
///
/// # Example
/// ```
/// use poke_planner::domain::creature::Catalog;
/// use poke_planner::presentation::PlannerScreen;
///
/// let mut screen = PlannerScreen::new(Catalog::starter());
/// screen.on_catch(&"025".into());
///
/// let view = screen.render();
/// assert_eq!(view.summary.total_power, 50);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerScreen {
    catalog: Catalog,
    team: Team,
}

impl PlannerScreen {
    /// Creates the screen over a catalog, with an empty team
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            team: Team::new(),
        }
    }

    /// Handles a tap on an available creature's Catch card
    ///
    /// An id not present in the catalog, or already on the team, is a
    /// silent no-op. Returns the event when the team changed.
    pub fn on_catch(&mut self, id: &CreatureId) -> Option<TeamEvent> {
        let Some(creature) = self.catalog.get(id) else {
            tracing::trace!(%id, "catch ignored: id not in catalog");
            return None;
        };

        self.dispatch(TeamAction::Catch(creature.clone()))
    }

    /// Handles a tap on a team member's Release card
    ///
    /// An id not on the team is a silent no-op. Returns the event when
    /// the team changed.
    pub fn on_release(&mut self, id: &CreatureId) -> Option<TeamEvent> {
        self.dispatch(TeamAction::Release(id.clone()))
    }

    fn dispatch(&mut self, action: TeamAction) -> Option<TeamEvent> {
        let (next, event) = self.team.apply(action);
        self.team = next;

        match &event {
            Some(TeamEvent::Caught { creature_id, name }) => {
                tracing::debug!(%creature_id, %name, "creature caught");
            }
            Some(TeamEvent::Released { creature_id }) => {
                tracing::debug!(%creature_id, "creature released");
            }
            None => tracing::trace!("intent was a no-op"),
        }

        event
    }

    /// Returns the current team state
    pub fn team(&self) -> &Team {
        &self.team
    }

    /// Returns the catalog the screen was built over
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Renders the current state into a view model
    ///
    /// Derived views are recomputed from scratch on every call.
    pub fn render(&self) -> ScreenView {
        let available = views::available_creatures(&self.catalog, &self.team)
            .iter()
            .map(|creature| CreatureCard::new(creature, CardAction::Catch))
            .collect();

        let team = self
            .team
            .members()
            .iter()
            .map(|member| CreatureCard::new(member, CardAction::Release))
            .collect();

        ScreenView {
            title: SCREEN_TITLE,
            subtitle: SCREEN_SUBTITLE,
            summary: SummaryCard {
                team_size: self.team.len(),
                total_power: views::total_power(&self.team),
                category_summary: views::category_summary(&self.team),
            },
            available: RosterSection {
                title: AVAILABLE_TITLE,
                cards: available,
                empty_hint: AVAILABLE_EMPTY_HINT,
            },
            team: RosterSection {
                title: TEAM_TITLE,
                cards: team,
                empty_hint: TEAM_EMPTY_HINT,
            },
        }
    }
}
