//! User commands on `App`: the add, remove and sort buttons of the screen.
//!
//! Each command mutates the people or the grouping, bumps the generation
//! and refreshes, so the list always animates from what is on screen.

use rand::seq::IndexedRandom;

use super::App;
use crate::app::roster;
use crate::model::Person;
use crate::snapshot::{PartitionError, PartitionStrategy};

impl App {
    /// Append `n` random people with a single refresh.
    pub fn seed_people(&mut self, n: usize) -> Result<(), PartitionError> {
        for _ in 0..n {
            let person = roster::random_person(self.rng());
            self.people.push(person);
        }
        tracing::info!(count = n, "seeded people");
        self.bump_generation();
        self.refresh()
    }

    /// Append one random person.
    pub fn add(&mut self) -> Result<Person, PartitionError> {
        let person = roster::random_person(self.rng());
        self.add_person(person.clone())?;
        Ok(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), PartitionError> {
        tracing::info!(%person, "add");
        self.people.push(person);
        self.bump_generation();
        self.refresh()
    }

    /// Pick a random person and remove everyone equal to them.
    /// Does nothing when the list is empty.
    pub fn remove_random(&mut self) -> Result<Option<Person>, PartitionError> {
        let victim = {
            let people = &self.people;
            people.choose(&mut self.rng).cloned()
        };
        match victim {
            Some(person) => {
                self.remove_person(&person)?;
                Ok(Some(person))
            }
            None => Ok(None),
        }
    }

    /// Remove every person equal to `person`; returns how many went.
    pub fn remove_person(&mut self, person: &Person) -> Result<usize, PartitionError> {
        let before = self.people.len();
        self.people.retain(|p| p != person);
        let removed = before - self.people.len();
        tracing::info!(%person, removed, "remove");
        if removed > 0 {
            self.bump_generation();
            self.refresh()?;
        }
        Ok(removed)
    }

    /// Group by first letter and flip the letter order.
    pub fn sort_by_name(&mut self) -> Result<(), PartitionError> {
        self.strategy = PartitionStrategy::ByNameFirstLetter;
        self.alphabet.reverse();
        self.sort_ascending = !self.sort_ascending;
        tracing::info!(ascending = self.sort_ascending, "sort by name");
        self.bump_generation();
        self.refresh()
    }

    /// Group by team.
    pub fn sort_by_team(&mut self) -> Result<(), PartitionError> {
        self.strategy = PartitionStrategy::ByCategory;
        tracing::info!("sort by team");
        self.bump_generation();
        self.refresh()
    }

    /// Start with letters in descending order without an update.
    pub fn set_descending(&mut self) {
        if self.sort_ascending {
            self.alphabet.reverse();
            self.sort_ascending = false;
        }
    }
}
