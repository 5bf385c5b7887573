//! Fixture (match) model.
//!
//! A fixture is one scheduled match: two teams, a venue, a league, a
//! kickoff time, and up to three official-role slots. The kickoff is
//! optional because records synced from the document store may carry an
//! unparseable timestamp; read-side components skip such records rather
//! than fail (see the workload modules).
//!
//! # Invariant
//! The same official identity must not occupy two role slots on one
//! fixture. The model does not enforce this on construction — noisy
//! synced records may violate it — but `validation::validate_fixture`
//! rejects it for any fixture an operator proposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::official::OfficialRef;

/// Official role slots on a fixture.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OfficialRole {
    /// Main (centre) referee.
    Main,
    /// First assistant referee.
    AssistantOne,
    /// Second assistant referee.
    AssistantTwo,
}

impl OfficialRole {
    /// All role slots in display order.
    pub const ALL: [OfficialRole; 3] = [
        OfficialRole::Main,
        OfficialRole::AssistantOne,
        OfficialRole::AssistantTwo,
    ];

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            OfficialRole::Main => "Main",
            OfficialRole::AssistantOne => "Assistant 1",
            OfficialRole::AssistantTwo => "Assistant 2",
        }
    }
}

/// Operator-set lifecycle override.
///
/// Once set it is authoritative: `status::derive_status` returns it
/// unchanged regardless of kickoff time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManualStatus {
    /// Explicitly reset to not started.
    NotStarted,
    /// Match in progress.
    Live,
    /// Match finished.
    Ended,
}

/// Displayed lifecycle state of a fixture.
///
/// `Upcoming` is the only time-derived state; the rest mirror
/// [`ManualStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    /// Not started and not inside the upcoming horizon.
    NotStarted,
    /// Kickoff lies within the upcoming horizon.
    Upcoming,
    /// Match in progress (manual only).
    Live,
    /// Match finished (manual only).
    Ended,
}

impl From<ManualStatus> for FixtureStatus {
    fn from(manual: ManualStatus) -> Self {
        match manual {
            ManualStatus::NotStarted => FixtureStatus::NotStarted,
            ManualStatus::Live => FixtureStatus::Live,
            ManualStatus::Ended => FixtureStatus::Ended,
        }
    }
}

/// A scheduled match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// Unique fixture identifier.
    pub id: String,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Venue name.
    pub venue: String,
    /// League or competition name.
    pub league: String,
    /// Kickoff time. `None` when the synced record had no parseable
    /// timestamp.
    pub kickoff: Option<DateTime<Utc>>,
    /// Operator-set lifecycle override.
    pub status_override: Option<ManualStatus>,
    /// Main referee slot.
    pub main_official: Option<OfficialRef>,
    /// First assistant slot.
    pub assistant_one: Option<OfficialRef>,
    /// Second assistant slot.
    pub assistant_two: Option<OfficialRef>,
}

impl Fixture {
    /// Creates a fixture with empty venue, league, and role slots.
    pub fn new(
        id: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            venue: String::new(),
            league: String::new(),
            kickoff: None,
            status_override: None,
            main_official: None,
            assistant_one: None,
            assistant_two: None,
        }
    }

    /// Sets the venue.
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Sets the league.
    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = league.into();
        self
    }

    /// Sets the kickoff time.
    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }

    /// Sets the manual status override.
    pub fn with_status(mut self, status: ManualStatus) -> Self {
        self.status_override = Some(status);
        self
    }

    /// Assigns an official to a role slot, replacing any holder.
    pub fn with_official(mut self, role: OfficialRole, official: OfficialRef) -> Self {
        *self.slot_mut(role) = Some(official);
        self
    }

    /// The reference occupying a role slot.
    pub fn official(&self, role: OfficialRole) -> Option<&OfficialRef> {
        match role {
            OfficialRole::Main => self.main_official.as_ref(),
            OfficialRole::AssistantOne => self.assistant_one.as_ref(),
            OfficialRole::AssistantTwo => self.assistant_two.as_ref(),
        }
    }

    /// Iterates the filled role slots in display order.
    pub fn officials(&self) -> impl Iterator<Item = (OfficialRole, &OfficialRef)> {
        OfficialRole::ALL
            .iter()
            .filter_map(move |&role| self.official(role).map(|r| (role, r)))
    }

    /// Canonical identity keys of the assigned crew.
    pub fn crew_keys(&self) -> HashSet<String> {
        self.officials().map(|(_, r)| r.canonical_key()).collect()
    }

    /// Whether the given canonical identity key is on the crew.
    pub fn has_official(&self, key: &str) -> bool {
        self.officials().any(|(_, r)| r.canonical_key() == key)
    }

    /// Whether the given team plays in this fixture.
    pub fn involves_team(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Number of filled role slots.
    pub fn crew_size(&self) -> usize {
        self.officials().count()
    }

    fn slot_mut(&mut self, role: OfficialRole) -> &mut Option<OfficialRef> {
        match role {
            OfficialRole::Main => &mut self.main_official,
            OfficialRole::AssistantOne => &mut self.assistant_one,
            OfficialRole::AssistantTwo => &mut self.assistant_two,
        }
    }
}
