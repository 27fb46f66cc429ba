//! Sectioned list snapshots and the operations that move between them.
//!
//! A [`Snapshot`] is what the list renderer shows: an ordered run of named
//! sections, each holding an ordered run of items. [`partition`] builds one
//! from a flat collection, [`diff`] computes the edit script between two of
//! them and [`apply`] replays such a script.

use serde::Serialize;
use std::fmt;

pub mod apply;
pub mod diff;
pub mod error;
mod lis;
pub mod partition;

pub use apply::apply;
pub use diff::{diff, EditOp, EditSummary};
pub use error::{ApplyError, PartitionError};
pub use partition::{partition, partition_report, PartitionReport, PartitionStrategy};

/// Label of one section: an alphabet letter or a team title.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    pub fn new(key: impl Into<String>) -> Self {
        SectionKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionKey {
    fn from(s: &str) -> Self {
        SectionKey(s.to_string())
    }
}

impl From<String> for SectionKey {
    fn from(s: String) -> Self {
        SectionKey(s)
    }
}

/// One named section and the items it contains, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub key: SectionKey,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(key: impl Into<SectionKey>, items: Vec<T>) -> Self {
        Section {
            key: key.into(),
            items,
        }
    }
}

/// Ordered sections as currently rendered (or about to be).
///
/// Keys are unique within a snapshot and sections are never empty when the
/// snapshot comes out of [`partition`]. Hand-built snapshots used in tests
/// and intermediate states during [`apply`] may hold empty sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot<T> {
    sections: Vec<Section<T>>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Snapshot {
            sections: Vec::new(),
        }
    }
}

impl<T> Snapshot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(key, items)` pairs.
    ///
    /// Returns `PartitionError::DuplicateKey` if a key repeats, since a
    /// snapshot with two sections of the same name cannot be rendered.
    pub fn from_sections<K, I>(sections: I) -> Result<Self, PartitionError>
    where
        K: Into<SectionKey>,
        I: IntoIterator<Item = (K, Vec<T>)>,
    {
        let mut snapshot = Snapshot::new();
        for (key, items) in sections {
            let key = key.into();
            if snapshot.position(&key).is_some() {
                return Err(PartitionError::DuplicateKey { key });
            }
            snapshot.sections.push(Section { key, items });
        }
        Ok(snapshot)
    }

    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section<T>> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of items across every section.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SectionKey> {
        self.sections.iter().map(|s| &s.key)
    }

    /// Header titles, one per section, in snapshot order.
    pub fn section_titles(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.key.to_string()).collect()
    }

    pub fn position(&self, key: &SectionKey) -> Option<usize> {
        self.sections.iter().position(|s| &s.key == key)
    }

    pub fn section(&self, key: &SectionKey) -> Option<&Section<T>> {
        self.sections.iter().find(|s| &s.key == key)
    }

    pub(crate) fn sections_mut(&mut self) -> &mut Vec<Section<T>> {
        &mut self.sections
    }

    pub(crate) fn push_section(&mut self, section: Section<T>) {
        self.sections.push(section);
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a Section<T>;
    type IntoIter = std::slice::Iter<'a, Section<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
