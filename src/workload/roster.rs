//! Per-day roster aggregation.
//!
//! Buckets official assignments by calendar day for planner and heatmap
//! views. One contract serves both renderings: the month grid reads the
//! per-day totals, the week planner reads the per-official chips.
//!
//! Days are UTC calendar dates taken from the kickoff; fixtures without
//! a kickoff are skipped.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{resolve_display_name, Fixture, OfficialRole};

/// One official's presence on a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfficial {
    /// Best-known display name (capitalized variant preferred).
    pub name: String,
    /// Roles held that day.
    pub roles: BTreeSet<OfficialRole>,
    /// Assignments that day.
    pub assignments: u32,
}

/// All official assignments on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    /// The day (UTC).
    pub date: NaiveDate,
    /// Officials active that day, by canonical identity key.
    pub officials: HashMap<String, DayOfficial>,
}

impl DayEntry {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            officials: HashMap::new(),
        }
    }

    /// Total assignments across all officials that day.
    pub fn total_assignments(&self) -> u32 {
        self.officials.values().map(|o| o.assignments).sum()
    }

    /// Number of distinct officials active that day.
    pub fn official_count(&self) -> usize {
        self.officials.len()
    }
}

/// Buckets official assignments per calendar day.
///
/// The range is inclusive on both ends. For each in-range fixture and
/// filled role slot, the official's day entry gains the role and one
/// assignment. The returned map iterates in date order.
pub fn aggregate_roster(
    fixtures: &[Fixture],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> BTreeMap<NaiveDate, DayEntry> {
    let mut days: BTreeMap<NaiveDate, DayEntry> = BTreeMap::new();

    for fixture in fixtures {
        let Some(kickoff) = fixture.kickoff else {
            continue;
        };
        let date = kickoff.date_naive();
        if date < range_start || date > range_end {
            continue;
        }

        for (role, official) in fixture.officials() {
            let entry = days
                .entry(date)
                .or_insert_with(|| DayEntry::new(date))
                .officials
                .entry(official.canonical_key())
                .or_insert_with(|| DayOfficial {
                    name: official.name.clone(),
                    roles: BTreeSet::new(),
                    assignments: 0,
                });
            entry.roles.insert(role);
            entry.assignments += 1;
            resolve_display_name(&mut entry.name, &official.name);
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfficialRef;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).expect("valid test date")
    }

    fn fixture_on(id: &str, d: u32, hour: u32) -> Fixture {
        Fixture::new(id, "Home", "Away")
            .with_kickoff(Utc.with_ymd_and_hms(2025, 3, d, hour, 0, 0).unwrap())
    }

    #[test]
    fn test_single_fixture_two_officials() {
        let fixtures = vec![fixture_on("F1", 10, 15)
            .with_official(OfficialRole::Main, OfficialRef::named("John Smith"))
            .with_official(OfficialRole::AssistantOne, OfficialRef::named("Jane Doe"))];

        let days = aggregate_roster(&fixtures, day(8), day(14));
        assert_eq!(days.len(), 1);

        let entry = &days[&day(10)];
        assert_eq!(entry.official_count(), 2);
        assert_eq!(entry.officials["john smith"].assignments, 1);
        assert_eq!(entry.officials["jane doe"].assignments, 1);
    }

    #[test]
    fn test_range_is_inclusive() {
        let fixtures = vec![
            fixture_on("F1", 8, 12),  // range start
            fixture_on("F2", 14, 12), // range end
            fixture_on("F3", 7, 12),  // before
            fixture_on("F4", 15, 12), // after
        ]
        .into_iter()
        .map(|f| f.with_official(OfficialRole::Main, OfficialRef::named("Ann")))
        .collect::<Vec<_>>();

        let days = aggregate_roster(&fixtures, day(8), day(14));
        assert_eq!(days.len(), 2);
        assert!(days.contains_key(&day(8)));
        assert!(days.contains_key(&day(14)));
    }

    #[test]
    fn test_same_official_accumulates_roles_and_count() {
        let fixtures = vec![
            fixture_on("F1", 10, 12)
                .with_official(OfficialRole::Main, OfficialRef::named("Ann")),
            fixture_on("F2", 10, 18)
                .with_official(OfficialRole::AssistantOne, OfficialRef::named("ann")),
        ];

        let days = aggregate_roster(&fixtures, day(1), day(31));
        let ann = &days[&day(10)].officials["ann"];
        assert_eq!(ann.assignments, 2);
        assert_eq!(
            ann.roles,
            BTreeSet::from([OfficialRole::Main, OfficialRole::AssistantOne])
        );
        // The capitalized variant seen on F1 is retained.
        assert_eq!(ann.name, "Ann");
    }

    #[test]
    fn test_days_iterate_in_order() {
        let fixtures = vec![
            fixture_on("F1", 20, 12).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
            fixture_on("F2", 5, 12).with_official(OfficialRole::Main, OfficialRef::named("Ben")),
        ];

        let days = aggregate_roster(&fixtures, day(1), day(31));
        let dates: Vec<NaiveDate> = days.keys().copied().collect();
        assert_eq!(dates, vec![day(5), day(20)]);
    }

    #[test]
    fn test_fixture_without_officials_produces_no_entry() {
        let days = aggregate_roster(&[fixture_on("F1", 10, 12)], day(1), day(31));
        assert!(days.is_empty());
    }

    #[test]
    fn test_fixture_without_kickoff_is_skipped() {
        let fixtures = vec![Fixture::new("F1", "Home", "Away")
            .with_official(OfficialRole::Main, OfficialRef::named("Ann"))];

        assert!(aggregate_roster(&fixtures, day(1), day(31)).is_empty());
    }

    #[test]
    fn test_day_entry_totals() {
        let fixtures = vec![
            fixture_on("F1", 10, 12)
                .with_official(OfficialRole::Main, OfficialRef::named("Ann"))
                .with_official(OfficialRole::AssistantOne, OfficialRef::named("Ben")),
            fixture_on("F2", 10, 18).with_official(OfficialRole::Main, OfficialRef::named("Ann")),
        ];

        let days = aggregate_roster(&fixtures, day(1), day(31));
        let entry = &days[&day(10)];
        assert_eq!(entry.total_assignments(), 3);
        assert_eq!(entry.official_count(), 2);
    }
}
