//! Official (match referee) models.
//!
//! Officials are the people occupying fixture role slots. Assignment
//! records synced from the document store sometimes carry only a
//! free-text name, so identity is merged through a normalized name key
//! rather than a stable identifier.
//!
//! # Identity
//! `canonical_identity` is the single place the key is produced. Two
//! distinct officials sharing a normalized name collapse into one key;
//! a future stable-ID source can replace this function without touching
//! scoring or aggregation.

use serde::{Deserialize, Serialize};

/// An official in the snapshot roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Official {
    /// Unique official identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the official can currently be assigned.
    pub available: bool,
}

/// A reference to an official occupying a fixture role slot.
///
/// Unlike [`Official`], the stable identifier is optional: historical
/// assignment records may carry only the name an operator typed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialRef {
    /// Stable identifier, when the record carries one.
    pub id: Option<String>,
    /// Display name as recorded.
    pub name: String,
    /// Profile image URL, if any.
    pub image_url: Option<String>,
}

impl Official {
    /// Creates an available official.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: true,
        }
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Canonical identity key for this official.
    pub fn canonical_key(&self) -> String {
        canonical_identity(&self.name)
    }
}

impl OfficialRef {
    /// Creates a reference carrying a stable identifier.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            image_url: None,
        }
    }

    /// Creates a name-only reference (no stable identifier).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            image_url: None,
        }
    }

    /// Sets the profile image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Canonical identity key for this reference.
    pub fn canonical_key(&self) -> String {
        canonical_identity(&self.name)
    }
}

/// Produces the canonical identity key for an official name.
///
/// Trims surrounding whitespace and lowercases. All identity merging in
/// the engine flows through this one function.
///
/// Known limitation: distinct officials sharing a normalized name merge
/// into one identity.
pub fn canonical_identity(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Updates `current` in place when `candidate` is a better display
/// variant for the same canonical key.
///
/// A variant whose first character is uppercase beats one whose first
/// character is not; otherwise the current variant is kept.
pub fn resolve_display_name(current: &mut String, candidate: &str) {
    fn capitalized(s: &str) -> bool {
        s.chars().next().is_some_and(char::is_uppercase)
    }

    if !capitalized(current) && capitalized(candidate) {
        *current = candidate.to_string();
    }
}
