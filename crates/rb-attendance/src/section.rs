//! Section identifiers and the year-level directory.
//!
//! Which sections exist, and under which year level, is deployment
//! configuration: the directory deserializes from an injected table such as
//!
//! ```json
//! { "1st Year": ["101", "102", "103", "104"], "2nd Year": ["201"] }
//! ```
//!
//! and is never hardcoded here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a class section (e.g. `"101"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Year level → sections lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionDirectory {
    levels: BTreeMap<String, Vec<SectionId>>,
}

impl SectionDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section under a year level.
    pub fn insert(&mut self, level: impl Into<String>, section: SectionId) {
        self.levels.entry(level.into()).or_default().push(section);
    }

    /// Return the sections of a year level, if the level exists.
    pub fn sections_of(&self, level: &str) -> Option<&[SectionId]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Return `true` if any level lists `section`.
    pub fn contains(&self, section: &SectionId) -> bool {
        self.levels.values().any(|s| s.contains(section))
    }

    /// Iterate over `(level, sections)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SectionId])> {
        self.levels.iter().map(|(l, s)| (l.as_str(), s.as_slice()))
    }

    /// Iterate over every section of every level.
    pub fn all_sections(&self) -> impl Iterator<Item = &SectionId> {
        self.levels.values().flatten()
    }

    /// Return `true` if the directory has no levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
