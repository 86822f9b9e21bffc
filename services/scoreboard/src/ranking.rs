//! Ranking order for the scoreboard
//!
//! One comparison function decides both where a match sits in the summary
//! and whether two matches may coexist at all:
//!
//! 1. Matches that collide under the active `ConflictPolicy` are reported
//!    as `Verdict::Collides` before any ordering is considered.
//! 2. Higher total score ranks first.
//! 3. On equal totals, the more recently started match ranks first.
//! 4. Remaining ties fall back to home team then away team, ascending.
//!
//! Steps 2-4 form a strict total order over distinct matches, so sorted
//! storage never holds two entries that compare equal.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use types::fixture::Match;

/// Rule deciding when two matches may not be on the board together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// A team can only play in one match at a time
    #[default]
    SharedTeam,
    /// Only the exact same (home, away) pairing is a duplicate
    ExactPair,
}

/// Outcome of comparing two matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The two matches cannot both be active
    Collides,
    /// Position of the left match relative to the right one
    Ranked(Ordering),
}

impl Verdict {
    pub fn collides(&self) -> bool {
        matches!(self, Verdict::Collides)
    }
}

/// Summary ordering with the conflict short-circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingComparator {
    policy: ConflictPolicy,
}

impl RankingComparator {
    pub fn new(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Compare `a` against `b`
    ///
    /// `Ranked(Less)` means `a` is listed before `b` in the summary.
    pub fn compare(&self, a: &Match, b: &Match) -> Verdict {
        let collides = match self.policy {
            ConflictPolicy::SharedTeam => a.shares_team_with(b),
            ConflictPolicy::ExactPair => a.home_team == b.home_team && a.away_team == b.away_team,
        };
        if collides {
            return Verdict::Collides;
        }
        Verdict::Ranked(rank(a, b))
    }
}

/// Summary position of `a` relative to `b`, ignoring conflicts
pub fn rank(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at.cmp(&a.started_at))
        .then_with(|| a.home_team.cmp(&b.home_team))
        .then_with(|| a.away_team.cmp(&b.away_team))
}
