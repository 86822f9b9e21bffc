//! Match entity
//!
//! A `Match` is an immutable value. Score changes never mutate a stored
//! match: `with_score` builds a replacement that keeps the id, teams and
//! kick-off time of the original, and the board swaps the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{MatchId, MatchKey, TeamName};
use crate::score::{self, Score};

/// A match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_score: Score,
    pub away_score: Score,
    pub started_at: i64, // Unix nanos
}

impl Match {
    /// Kick off a new match at 0-0
    pub fn start(home_team: TeamName, away_team: TeamName, started_at: i64) -> Self {
        Self {
            id: MatchId::new(),
            home_team,
            away_team,
            home_score: Score::ZERO,
            away_score: Score::ZERO,
            started_at,
        }
    }

    /// Build the replacement value carrying a new scoreline
    pub fn with_score(&self, home_score: Score, away_score: Score) -> Self {
        Self {
            id: self.id,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score,
            away_score,
            started_at: self.started_at,
        }
    }

    /// Combined goals of both teams
    pub fn total_score(&self) -> u64 {
        score::total(self.home_score, self.away_score)
    }

    /// Exact (home, away) identity
    pub fn key(&self) -> MatchKey {
        MatchKey::new(self.home_team.clone(), self.away_team.clone())
    }

    /// Check if this match is exactly the (home, away) pair
    pub fn is(&self, home: &TeamName, away: &TeamName) -> bool {
        &self.home_team == home && &self.away_team == away
    }

    /// Check if any team of `self` also plays in `other`
    pub fn shares_team_with(&self, other: &Match) -> bool {
        self.home_team == other.home_team
            || self.home_team == other.away_team
            || self.away_team == other.home_team
            || self.away_team == other.away_team
    }

    pub fn started_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.started_at)
    }
}
