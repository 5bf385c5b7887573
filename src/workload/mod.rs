//! Referee workload analytics.
//!
//! Read-only summaries over the fixture snapshot:
//!
//! - **`score_activity`**: recency-weighted activity ranking with
//!   half-life decay and percentile tiers
//! - **`aggregate_roster`**: per-calendar-day assignment buckets for
//!   planner and heatmap views
//! - **`WorkloadSummary`**: assignment distribution report (coverage,
//!   per-role totals, busiest official)
//!
//! None of these gatekeep anything, so none of them fail: records
//! without a usable kickoff are skipped and a best-effort result is
//! returned. Identity is merged through the canonical name key (see
//! `models`), a deliberate compromise for records that carry no stable
//! identifier.

mod activity;
mod roster;
mod summary;

pub use activity::{score_activity, ActivityEntry, ActivityTier, ScoreParams};
pub use roster::{aggregate_roster, DayEntry, DayOfficial};
pub use summary::WorkloadSummary;
