//! Goal counts
//!
//! A `Score` is a non-negative goal count for one side of a match. Totals
//! are widened to `u64` so summing two scores can never overflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Goals scored by one team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    /// Score every match starts with
    pub const ZERO: Score = Score(0);

    pub fn new(goals: u32) -> Self {
        Self(goals)
    }

    /// Convert a signed count, returning None if negative
    pub fn try_from_signed(goals: i32) -> Option<Self> {
        u32::try_from(goals).ok().map(Self)
    }

    pub fn goals(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Score {
    fn from(goals: u32) -> Self {
        Self(goals)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Combined goals of both sides
pub fn total(home: Score, away: Score) -> u64 {
    u64::from(home.0) + u64::from(away.0)
}
