//! Workload distribution report.
//!
//! The engine never balances assignments across officials; this report
//! is how uneven distribution becomes visible to the operator. It is
//! read-only and, like the other workload views, skips records without
//! a usable kickoff instead of failing.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Fixture, OfficialRole};

/// Assignment distribution over an inclusive date range.
#[derive(Debug, Clone)]
pub struct WorkloadSummary {
    /// Fixtures whose kickoff day falls inside the range.
    pub fixture_count: usize,
    /// Fixtures with all three role slots filled.
    pub fully_crewed: usize,
    /// Fixtures with at least one but not all slots filled.
    pub partially_crewed: usize,
    /// Fraction of fixtures with a full crew (1.0 when no fixtures).
    pub crew_coverage: f64,
    /// Assignment totals per role slot.
    pub assignments_by_role: HashMap<OfficialRole, u32>,
    /// Distinct officials assigned in the range.
    pub official_count: usize,
    /// Mean assignments per assigned official.
    pub avg_assignments: f64,
    /// Largest assignment count held by a single official.
    pub max_assignments: u32,
    /// Canonical key of the most-assigned official (smallest key wins a
    /// tie, so the report is deterministic).
    pub busiest_official: Option<String>,
}

impl WorkloadSummary {
    /// Computes the distribution report for fixtures in the range.
    pub fn calculate(fixtures: &[Fixture], range_start: NaiveDate, range_end: NaiveDate) -> Self {
        let mut fixture_count = 0;
        let mut fully_crewed = 0;
        let mut partially_crewed = 0;
        let mut assignments_by_role: HashMap<OfficialRole, u32> = HashMap::new();
        let mut per_official: HashMap<String, u32> = HashMap::new();

        for fixture in fixtures {
            let Some(kickoff) = fixture.kickoff else {
                continue;
            };
            let date = kickoff.date_naive();
            if date < range_start || date > range_end {
                continue;
            }

            fixture_count += 1;
            match fixture.crew_size() {
                3 => fully_crewed += 1,
                0 => {}
                _ => partially_crewed += 1,
            }

            for (role, official) in fixture.officials() {
                *assignments_by_role.entry(role).or_insert(0) += 1;
                *per_official.entry(official.canonical_key()).or_insert(0) += 1;
            }
        }

        let crew_coverage = if fixture_count == 0 {
            1.0
        } else {
            fully_crewed as f64 / fixture_count as f64
        };

        let total_assignments: u32 = per_official.values().sum();
        let avg_assignments = if per_official.is_empty() {
            0.0
        } else {
            total_assignments as f64 / per_official.len() as f64
        };

        let busiest_official = per_official
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(key, _)| key.clone());
        let max_assignments = per_official.values().copied().max().unwrap_or(0);

        Self {
            fixture_count,
            fully_crewed,
            partially_crewed,
            crew_coverage,
            assignments_by_role,
            official_count: per_official.len(),
            avg_assignments,
            max_assignments,
            busiest_official,
        }
    }

    /// Whether the busiest official holds at most `factor` times the
    /// mean load. A report, not a constraint: callers decide what to do
    /// with an unbalanced roster.
    pub fn is_balanced(&self, factor: f64) -> bool {
        if self.official_count == 0 {
            return true;
        }
        (self.max_assignments as f64) <= self.avg_assignments * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfficialRef;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).expect("valid test date")
    }

    fn fixture_on(id: &str, d: u32) -> Fixture {
        Fixture::new(id, "Home", "Away")
            .with_kickoff(Utc.with_ymd_and_hms(2025, 3, d, 15, 0, 0).unwrap())
    }

    fn full_crew(f: Fixture, main: &str, a1: &str, a2: &str) -> Fixture {
        f.with_official(OfficialRole::Main, OfficialRef::named(main))
            .with_official(OfficialRole::AssistantOne, OfficialRef::named(a1))
            .with_official(OfficialRole::AssistantTwo, OfficialRef::named(a2))
    }

    #[test]
    fn test_crew_coverage() {
        let fixtures = vec![
            full_crew(fixture_on("F1", 10), "Ann", "Ben", "Cara"),
            fixture_on("F2", 11), // no crew at all
        ];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(31));
        assert_eq!(summary.fixture_count, 2);
        assert_eq!(summary.fully_crewed, 1);
        assert_eq!(summary.partially_crewed, 0);
        assert!((summary.crew_coverage - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_partial_crew_counted_separately() {
        let fixtures = vec![fixture_on("F1", 10)
            .with_official(OfficialRole::Main, OfficialRef::named("Ann"))];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(31));
        assert_eq!(summary.partially_crewed, 1);
        assert_eq!(summary.fully_crewed, 0);
    }

    #[test]
    fn test_role_totals_and_busiest() {
        let fixtures = vec![
            full_crew(fixture_on("F1", 10), "Ann", "Ben", "Cara"),
            fixture_on("F2", 11)
                .with_official(OfficialRole::Main, OfficialRef::named("Ann")),
        ];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(31));
        assert_eq!(summary.assignments_by_role[&OfficialRole::Main], 2);
        assert_eq!(summary.assignments_by_role[&OfficialRole::AssistantOne], 1);
        assert_eq!(summary.official_count, 3);
        assert_eq!(summary.max_assignments, 2);
        assert_eq!(summary.busiest_official.as_deref(), Some("ann"));
        // 4 assignments over 3 officials
        assert!((summary.avg_assignments - 4.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_busiest_tie_breaks_on_key() {
        let fixtures = vec![
            fixture_on("F1", 10).with_official(OfficialRole::Main, OfficialRef::named("Zoe")),
            fixture_on("F2", 11).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
        ];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(31));
        assert_eq!(summary.busiest_official.as_deref(), Some("ann"));
    }

    #[test]
    fn test_out_of_range_and_undated_skipped() {
        let fixtures = vec![
            fixture_on("F1", 10).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
            fixture_on("F2", 25).with_official(OfficialRole::Main, OfficialRef::named("Ben")),
            Fixture::new("F3", "Home", "Away")
                .with_official(OfficialRole::Main, OfficialRef::named("Cara")),
        ];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(14));
        assert_eq!(summary.fixture_count, 1);
        assert_eq!(summary.official_count, 1);
    }

    #[test]
    fn test_is_balanced() {
        let fixtures = vec![
            fixture_on("F1", 10).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
            fixture_on("F2", 11).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
            fixture_on("F3", 12).with_official(OfficialRole::Main, OfficialRef::named("Ben")),
        ];

        let summary = WorkloadSummary::calculate(&fixtures, day(1), day(31));
        // max 2 vs mean 1.5
        assert!(summary.is_balanced(1.5));
        assert!(!summary.is_balanced(1.2));
    }

    #[test]
    fn test_empty_range() {
        let summary = WorkloadSummary::calculate(&[], day(1), day(31));
        assert_eq!(summary.fixture_count, 0);
        assert!((summary.crew_coverage - 1.0).abs() < 1e-10);
        assert!(summary.busiest_official.is_none());
        assert!(summary.is_balanced(1.0));
    }
}
