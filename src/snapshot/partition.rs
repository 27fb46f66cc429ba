//! Grouping a flat collection of people into a [`Snapshot`].

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PartitionError, Section, SectionKey, Snapshot};
use crate::model::{Person, Team};

/// Rule used to assign people to section keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionStrategy {
    /// Sections are letters; a person lands under the first letter of their name.
    #[default]
    ByNameFirstLetter,
    /// Sections are team titles.
    ByCategory,
}

impl PartitionStrategy {
    /// Default candidate key universe for this strategy.
    ///
    /// Letters run `A..Z`, reversed when `ascending` is false. Team order is
    /// fixed and ignores the direction.
    pub fn candidate_keys(self, ascending: bool) -> Vec<SectionKey> {
        match self {
            PartitionStrategy::ByNameFirstLetter => {
                let mut keys: Vec<SectionKey> =
                    ('A'..='Z').map(|c| SectionKey::new(c.to_string())).collect();
                if !ascending {
                    keys.reverse();
                }
                keys
            }
            PartitionStrategy::ByCategory => {
                Team::ALL.iter().map(|t| SectionKey::from(t.title())).collect()
            }
        }
    }

    /// Does `person` belong under `key`?
    pub fn accepts(self, key: &SectionKey, person: &Person) -> bool {
        match self {
            PartitionStrategy::ByNameFirstLetter => {
                let prefix = key.as_str().to_uppercase();
                !prefix.is_empty() && person.name.to_uppercase().starts_with(&prefix)
            }
            PartitionStrategy::ByCategory => person.team.title() == display_case(key.as_str()),
        }
    }
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionStrategy::ByNameFirstLetter => f.write_str("name"),
            PartitionStrategy::ByCategory => f.write_str("team"),
        }
    }
}

/// First letter upper-case, the rest lower-case.
fn display_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// A snapshot together with the people no candidate key accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionReport {
    pub snapshot: Snapshot<Person>,
    pub unassigned: Vec<Person>,
}

/// Group `items` into sections named by `ordered_keys`, in key order.
///
/// Each person goes to the first key that accepts them; input order is kept
/// inside a section and sections nobody landed in are left out.
pub fn partition(
    items: &[Person],
    strategy: PartitionStrategy,
    ordered_keys: &[SectionKey],
) -> Result<Snapshot<Person>, PartitionError> {
    partition_report(items, strategy, ordered_keys).map(|r| r.snapshot)
}

/// Like [`partition`] but also returns the people that matched no key.
pub fn partition_report(
    items: &[Person],
    strategy: PartitionStrategy,
    ordered_keys: &[SectionKey],
) -> Result<PartitionReport, PartitionError> {
    let mut seen = HashSet::with_capacity(ordered_keys.len());
    for key in ordered_keys {
        if !seen.insert(key) {
            return Err(PartitionError::DuplicateKey { key: key.clone() });
        }
    }

    let mut buckets: Vec<Vec<Person>> = vec![Vec::new(); ordered_keys.len()];
    let mut unassigned = Vec::new();
    for person in items {
        match ordered_keys.iter().position(|k| strategy.accepts(k, person)) {
            Some(slot) => buckets[slot].push(person.clone()),
            None => unassigned.push(person.clone()),
        }
    }

    let mut snapshot = Snapshot::new();
    for (key, bucket) in ordered_keys.iter().zip(buckets) {
        if !bucket.is_empty() {
            snapshot.push_section(Section {
                key: key.clone(),
                items: bucket,
            });
        }
    }

    tracing::debug!(
        %strategy,
        people = items.len(),
        sections = snapshot.len(),
        unassigned = unassigned.len(),
        "partitioned people"
    );
    Ok(PartitionReport {
        snapshot,
        unassigned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ks: &[&str]) -> Vec<SectionKey> {
        ks.iter().map(|k| SectionKey::from(*k)).collect()
    }

    #[test]
    fn display_case_capitalizes() {
        assert_eq!(display_case("blue"), "Blue");
        assert_eq!(display_case("GREEN"), "Green");
        assert_eq!(display_case(""), "");
    }

    #[test]
    fn name_match_ignores_case() {
        let p = Person::new("amy lee", Team::Blue);
        assert!(PartitionStrategy::ByNameFirstLetter.accepts(&SectionKey::from("A"), &p));
        assert!(PartitionStrategy::ByNameFirstLetter.accepts(&SectionKey::from("a"), &p));
        assert!(!PartitionStrategy::ByNameFirstLetter.accepts(&SectionKey::from(""), &p));
    }

    #[test]
    fn duplicate_key_fails_fast() {
        let people = vec![Person::new("Amy", Team::Blue)];
        let err = partition(&people, PartitionStrategy::ByNameFirstLetter, &keys(&["A", "B", "A"]))
            .unwrap_err();
        assert_eq!(err, PartitionError::DuplicateKey { key: "A".into() });
    }

    #[test]
    fn unmatched_people_are_reported() {
        let people = vec![Person::new("7even", Team::Red), Person::new("Bo", Team::Red)];
        let report =
            partition_report(&people, PartitionStrategy::ByNameFirstLetter, &keys(&["A", "B"]))
                .unwrap();
        assert_eq!(report.unassigned, vec![Person::new("7even", Team::Red)]);
        assert_eq!(report.snapshot.section_titles(), vec!["B".to_string()]);
    }

    #[test]
    fn candidate_letters_reverse_when_descending() {
        let asc = PartitionStrategy::ByNameFirstLetter.candidate_keys(true);
        let desc = PartitionStrategy::ByNameFirstLetter.candidate_keys(false);
        assert_eq!(asc.len(), 26);
        assert_eq!(asc.first().map(SectionKey::as_str), Some("A"));
        assert_eq!(desc.first().map(SectionKey::as_str), Some("Z"));
        assert_eq!(
            PartitionStrategy::ByCategory.candidate_keys(false),
            keys(&["Blue", "Green", "Red"])
        );
    }
}
