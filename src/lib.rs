//! Scheduling and referee workload engine for football fixtures.
//!
//! Pure, stateless decision logic over an in-memory snapshot of fixtures
//! and officials supplied by the caller: conflict validation for
//! proposed fixtures, lifecycle status resolution, recency-weighted
//! official activity ranking, and per-day roster aggregation.
//! Persistence, sync, notifications, and presentation belong to the
//! surrounding application — this crate never performs I/O, reads a
//! clock, or logs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Fixture`, `Official`, `OfficialRef`,
//!   role slots and lifecycle states
//! - **`validation`**: Conflict checks for a proposed fixture
//!   (duplicates, double-booked officials)
//! - **`status`**: Display lifecycle state from manual overrides and time
//! - **`workload`**: Read-only analytics — activity ranking, per-day
//!   roster buckets, distribution report
//!
//! # Architecture
//!
//! Every entry point is a pure function of its arguments plus an
//! explicit `now`, so results are deterministic and callers may invoke
//! them concurrently without coordination. Recomputation is the only
//! cancellation mechanism: when the snapshot refreshes, call again.

pub mod models;
pub mod status;
pub mod validation;
pub mod workload;
