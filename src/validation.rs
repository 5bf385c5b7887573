//! Fixture conflict validation.
//!
//! Gatekeeps an operator-proposed fixture against the existing snapshot
//! before the caller persists it. Checks run as ordered passes over the
//! full set and the first hit is returned, so a validation call reports
//! at most one conflict even when several apply.
//!
//! # Checks
//! 1. Same official identity in two role slots on the candidate
//! 2. Exact duplicate: identical teams, venue, and kickoff
//! 3. Same teams and kickoff at a different venue
//! 4. Same venue and kickoff sharing at least one team
//! 5. Shared official within the conflict window of another fixture
//!
//! The conflict window is a symmetric absolute time difference, not a
//! same-calendar-day rule: officials conflict across midnight.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Fixture, OfficialRole};

/// Conflict validation parameters.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Symmetric window around the candidate kickoff within which a
    /// shared official counts as double-booked. Boundary inclusive.
    pub conflict_window: Duration,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            conflict_window: Duration::hours(3),
        }
    }
}

impl ValidationConfig {
    /// Creates the default configuration (3-hour window).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conflict window.
    pub fn with_conflict_window(mut self, window: Duration) -> Self {
        self.conflict_window = window;
        self
    }
}

/// A conflict between a candidate fixture and the existing snapshot.
///
/// Variants carry the data the caller needs to build a user-facing
/// message; the engine itself never renders or logs one.
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictError {
    /// The same official identity occupies two role slots on the
    /// candidate.
    DuplicateRoleAssignment {
        /// Canonical identity key of the duplicated official.
        official: String,
        /// The two slots holding the same identity.
        roles: (OfficialRole, OfficialRole),
    },
    /// An existing fixture has identical teams, venue, and kickoff.
    DuplicateMatchSameVenueTime {
        /// Identifier of the existing fixture.
        existing_id: String,
    },
    /// The same two teams already meet at this kickoff at another venue.
    DuplicateMatchDifferentVenue {
        /// Identifier of the existing fixture.
        existing_id: String,
        /// Venue of the existing fixture.
        venue: String,
    },
    /// Another fixture at this venue and kickoff shares a team.
    DuplicateMatchSameTeam {
        /// Identifier of the existing fixture.
        existing_id: String,
        /// The shared team.
        team: String,
    },
    /// An official on the candidate is already booked near this kickoff.
    OfficialConflict {
        /// Identifier of the colliding fixture.
        existing_id: String,
        /// Canonical identity key of the double-booked official.
        official: String,
        /// Kickoff of the colliding fixture.
        kickoff: DateTime<Utc>,
    },
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoleAssignment { official, roles } => write!(
                f,
                "official '{official}' holds both the {} and {} slots",
                roles.0.label(),
                roles.1.label()
            ),
            Self::DuplicateMatchSameVenueTime { existing_id } => write!(
                f,
                "an identical fixture already exists ({existing_id})"
            ),
            Self::DuplicateMatchDifferentVenue { existing_id, venue } => write!(
                f,
                "these teams already meet at '{venue}' at this time ({existing_id})"
            ),
            Self::DuplicateMatchSameTeam { existing_id, team } => write!(
                f,
                "'{team}' already plays at this venue and time ({existing_id})"
            ),
            Self::OfficialConflict {
                existing_id,
                official,
                kickoff,
            } => write!(
                f,
                "official '{official}' is already booked for fixture {existing_id} at {kickoff}"
            ),
        }
    }
}

impl Error for ConflictError {}

/// Validates a candidate fixture against the existing snapshot.
///
/// `exclude_id` removes the fixture being edited from every pass so it
/// does not conflict with itself. Fixtures without a kickoff never
/// time-match: the role-uniqueness check still applies, the time-keyed
/// passes cannot.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fixture_engine::models::{Fixture, OfficialRef, OfficialRole};
/// use fixture_engine::validation::{validate_fixture, ConflictError, ValidationConfig};
///
/// let existing = vec![Fixture::new("F1", "Man Utd", "Liverpool")
///     .with_venue("Old Trafford")
///     .with_kickoff(Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap())
///     .with_official(OfficialRole::Main, OfficialRef::named("John Smith"))];
///
/// // Same official two hours later: inside the 3-hour window.
/// let candidate = Fixture::new("F2", "Arsenal", "Chelsea")
///     .with_venue("Emirates")
///     .with_kickoff(Utc.with_ymd_and_hms(2025, 3, 1, 17, 0, 0).unwrap())
///     .with_official(OfficialRole::Main, OfficialRef::named("John Smith"));
///
/// let result = validate_fixture(&candidate, &existing, None, &ValidationConfig::default());
/// assert!(matches!(result, Err(ConflictError::OfficialConflict { .. })));
/// ```
pub fn validate_fixture(
    candidate: &Fixture,
    existing: &[Fixture],
    exclude_id: Option<&str>,
    config: &ValidationConfig,
) -> Result<(), ConflictError> {
    check_role_uniqueness(candidate)?;

    let others: Vec<&Fixture> = existing
        .iter()
        .filter(|f| exclude_id != Some(f.id.as_str()))
        .collect();

    check_exact_duplicate(candidate, &others)?;
    check_teams_elsewhere(candidate, &others)?;
    check_venue_shared_team(candidate, &others)?;
    check_official_overlap(candidate, &others, config.conflict_window)?;

    Ok(())
}

/// Check 1: the same official identity in more than one role slot.
fn check_role_uniqueness(candidate: &Fixture) -> Result<(), ConflictError> {
    let mut seen: HashMap<String, OfficialRole> = HashMap::new();

    for (role, official) in candidate.officials() {
        let key = official.canonical_key();
        if let Some(&first) = seen.get(&key) {
            return Err(ConflictError::DuplicateRoleAssignment {
                official: key,
                roles: (first, role),
            });
        }
        seen.insert(key, role);
    }

    Ok(())
}

/// Check 2: identical home, away, venue, and kickoff.
fn check_exact_duplicate(candidate: &Fixture, others: &[&Fixture]) -> Result<(), ConflictError> {
    for f in others {
        if same_kickoff(candidate, f)
            && f.home_team == candidate.home_team
            && f.away_team == candidate.away_team
            && f.venue == candidate.venue
        {
            return Err(ConflictError::DuplicateMatchSameVenueTime {
                existing_id: f.id.clone(),
            });
        }
    }

    Ok(())
}

/// Check 3: same home/away pair and kickoff at a different venue.
fn check_teams_elsewhere(candidate: &Fixture, others: &[&Fixture]) -> Result<(), ConflictError> {
    for f in others {
        if same_kickoff(candidate, f)
            && f.home_team == candidate.home_team
            && f.away_team == candidate.away_team
            && f.venue != candidate.venue
        {
            return Err(ConflictError::DuplicateMatchDifferentVenue {
                existing_id: f.id.clone(),
                venue: f.venue.clone(),
            });
        }
    }

    Ok(())
}

/// Check 4: same venue and kickoff sharing at least one team.
///
/// Exact duplicates cannot reach this pass; check 2 reports them first.
fn check_venue_shared_team(candidate: &Fixture, others: &[&Fixture]) -> Result<(), ConflictError> {
    for f in others {
        if !same_kickoff(candidate, f) || f.venue != candidate.venue {
            continue;
        }

        let shared = [&candidate.home_team, &candidate.away_team]
            .into_iter()
            .find(|&team| f.involves_team(team));

        if let Some(team) = shared {
            return Err(ConflictError::DuplicateMatchSameTeam {
                existing_id: f.id.clone(),
                team: team.clone(),
            });
        }
    }

    Ok(())
}

/// Check 5: a shared official on a fixture inside the conflict window.
///
/// The first colliding fixture in snapshot order is reported, along with
/// its kickoff time.
fn check_official_overlap(
    candidate: &Fixture,
    others: &[&Fixture],
    window: Duration,
) -> Result<(), ConflictError> {
    let candidate_keys = candidate.crew_keys();
    if candidate_keys.is_empty() {
        return Ok(());
    }
    let Some(kickoff) = candidate.kickoff else {
        return Ok(());
    };

    for f in others {
        let Some(other_kickoff) = f.kickoff else {
            continue;
        };
        if (kickoff - other_kickoff).abs() > window {
            continue;
        }

        let collision = f
            .officials()
            .map(|(_, official)| official.canonical_key())
            .find(|key| candidate_keys.contains(key));

        if let Some(official) = collision {
            return Err(ConflictError::OfficialConflict {
                existing_id: f.id.clone(),
                official,
                kickoff: other_kickoff,
            });
        }
    }

    Ok(())
}

fn same_kickoff(a: &Fixture, b: &Fixture) -> bool {
    matches!((a.kickoff, b.kickoff), (Some(x), Some(y)) if x == y)
}
