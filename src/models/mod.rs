//! Fixture and official domain models.
//!
//! The snapshot shape shared by every engine component. Records arrive
//! read-only from the persistence collaborator; all derived views are
//! recomputed from them on each call and nothing is cached here.
//!
//! # Identity
//!
//! Assignment records may carry a free-text name without a stable
//! identifier, so officiating identity is merged through
//! [`canonical_identity`] (case/whitespace-normalized name). See
//! `official` for the limitation this implies.

mod fixture;
mod official;

pub use fixture::{Fixture, FixtureStatus, ManualStatus, OfficialRole};
pub use official::{canonical_identity, resolve_display_name, Official, OfficialRef};
