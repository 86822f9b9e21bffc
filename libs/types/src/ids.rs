//! Identifier types for scoreboard entities
//!
//! A match is looked up by its exact team pair (`MatchKey`). `MatchId` is a
//! UUID v7 assigned at kick-off and carried unchanged through every score
//! replacement, so log lines about the same fixture correlate.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a match
///
/// Uses UUID v7 for time-based sorting. A replaced match keeps the id of
/// the value it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Create a new MatchId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team name
///
/// Never empty or whitespace-only. Compared byte-wise, so "Spain" and
/// "spain" are different teams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Create a new TeamName
    ///
    /// # Panics
    /// Panics if the name is empty or whitespace-only
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        assert!(!s.trim().is_empty(), "TeamName must not be empty");
        Self(s)
    }

    /// Try to create a TeamName, returning None if blank
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Exact identity of a match: the ordered (home, away) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    pub home: TeamName,
    pub away: TeamName,
}

impl MatchKey {
    pub fn new(home: TeamName, away: TeamName) -> Self {
        Self { home, away }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}
