//! Random people for seeding the demo list.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::{Person, Team};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `len` random lower-case ASCII letters.
pub fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(LETTERS[rng.random_range(0..LETTERS.len())]))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "First Last" with a 2-5 letter first name and a 2-7 letter last name.
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = rng.random_range(2..6);
    let last = rng.random_range(2..8);
    format!(
        "{} {}",
        capitalize(&random_word(rng, first)),
        capitalize(&random_word(rng, last))
    )
}

pub fn random_person<R: Rng>(rng: &mut R) -> Person {
    let name = random_name(rng);
    let team = Team::ALL.choose(rng).copied().unwrap_or(Team::Blue);
    Person::new(name, team)
}
