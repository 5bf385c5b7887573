//! Fixture lifecycle status resolution.
//!
//! Derives the displayed state of a fixture from its manual override and
//! kickoff time.
//!
//! # Precedence
//! A manual override (`Live`, `Ended`, or an explicit `NotStarted`) is
//! checked first and returned unchanged. With no override set:
//! - kickoff within `[now, now + upcoming_horizon]` (inclusive) → `Upcoming`
//! - anything else (past kickoff, beyond the horizon, no kickoff) → `NotStarted`
//!
//! There is no time-based transition into `Live` or `Ended`; those
//! require explicit operator action.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Fixture, FixtureStatus};

/// Status resolution parameters.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// How far ahead of `now` a fixture counts as upcoming.
    pub upcoming_horizon: Duration,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            upcoming_horizon: Duration::days(3),
        }
    }
}

impl StatusConfig {
    /// Creates the default configuration (3-day horizon).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upcoming horizon.
    pub fn with_upcoming_horizon(mut self, horizon: Duration) -> Self {
        self.upcoming_horizon = horizon;
        self
    }
}

/// Resolves the displayed lifecycle state of a fixture.
///
/// Pure function of `(fixture, now)`: no persisted state, safe to call
/// at any rate, idempotent for fixed inputs.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use fixture_engine::models::{Fixture, FixtureStatus};
/// use fixture_engine::status::{derive_status, StatusConfig};
///
/// let now = Utc::now();
/// let fixture = Fixture::new("F1", "Arsenal", "Chelsea")
///     .with_kickoff(now + Duration::days(2));
///
/// let status = derive_status(&fixture, now, &StatusConfig::default());
/// assert_eq!(status, FixtureStatus::Upcoming);
/// ```
pub fn derive_status(
    fixture: &Fixture,
    now: DateTime<Utc>,
    config: &StatusConfig,
) -> FixtureStatus {
    if let Some(manual) = fixture.status_override {
        return manual.into();
    }

    match fixture.kickoff {
        Some(kickoff) if kickoff >= now && kickoff <= now + config.upcoming_horizon => {
            FixtureStatus::Upcoming
        }
        _ => FixtureStatus::NotStarted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ManualStatus;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn fixture_at(kickoff: DateTime<Utc>) -> Fixture {
        Fixture::new("F1", "Arsenal", "Chelsea").with_kickoff(kickoff)
    }

    #[test]
    fn test_manual_override_is_authoritative() {
        // A live override on a long-past kickoff still resolves to Live.
        let f = fixture_at(now() - Duration::days(400)).with_status(ManualStatus::Live);
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::Live
        );

        let f = fixture_at(now() + Duration::days(1)).with_status(ManualStatus::Ended);
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::Ended
        );
    }

    #[test]
    fn test_explicit_not_started_beats_upcoming_window() {
        let f = fixture_at(now() + Duration::days(1)).with_status(ManualStatus::NotStarted);
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::NotStarted
        );
    }

    #[test]
    fn test_upcoming_within_horizon() {
        let f = fixture_at(now() + Duration::days(2));
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::Upcoming
        );
    }

    #[test]
    fn test_kickoff_now_is_upcoming() {
        let f = fixture_at(now());
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::Upcoming
        );
    }

    #[test]
    fn test_horizon_boundary_inclusive() {
        let f = fixture_at(now() + Duration::days(3));
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::Upcoming
        );

        let f = fixture_at(now() + Duration::days(3) + Duration::minutes(1));
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::NotStarted
        );
    }

    #[test]
    fn test_past_kickoff_without_override() {
        let f = fixture_at(now() - Duration::hours(2));
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::NotStarted
        );
    }

    #[test]
    fn test_missing_kickoff() {
        let f = Fixture::new("F1", "Arsenal", "Chelsea");
        assert_eq!(
            derive_status(&f, now(), &StatusConfig::default()),
            FixtureStatus::NotStarted
        );
    }

    #[test]
    fn test_idempotent() {
        let f = fixture_at(now() + Duration::days(1));
        let config = StatusConfig::default();
        let first = derive_status(&f, now(), &config);
        let second = derive_status(&f, now(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_horizon() {
        let config = StatusConfig::new().with_upcoming_horizon(Duration::days(7));
        let f = fixture_at(now() + Duration::days(5));
        assert_eq!(derive_status(&f, now(), &config), FixtureStatus::Upcoming);
    }
}
