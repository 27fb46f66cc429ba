//! The values shown in the list: people and the team each belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of teams a person can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Green,
    Red,
}

impl Team {
    /// Every team, in display order.
    pub const ALL: [Team; 3] = [Team::Blue, Team::Green, Team::Red];

    /// Lower-case tag, e.g. `blue`.
    pub fn tag(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Green => "green",
            Team::Red => "red",
        }
    }

    /// Capitalized title used as section header, e.g. `Blue`.
    pub fn title(self) -> &'static str {
        match self {
            Team::Blue => "Blue",
            Team::Green => "Green",
            Team::Red => "Red",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown team `{0}` (expected blue, green or red)")]
pub struct ParseTeamError(pub String);

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTeamError(s.to_string()))
    }
}

/// One row of the list. Identity is the value: two people with the same
/// name and team are indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub team: Team,
}

impl Person {
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Person {
            name: name.into(),
            team,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_parses_case_insensitively() {
        assert_eq!("Blue".parse::<Team>(), Ok(Team::Blue));
        assert_eq!(" RED ".parse::<Team>(), Ok(Team::Red));
        assert!("purple".parse::<Team>().is_err());
    }

    #[test]
    fn person_display_shows_team_tag() {
        assert_eq!(Person::new("Amy", Team::Green).to_string(), "Amy (green)");
    }
}
