//! Scenario simulation modules
//!
//! Each scenario hammers one shared board from many threads and checks the
//! board's invariants afterwards.

pub mod kickoff_burst;
pub mod goal_flood;
pub mod rivalry_clash;

use std::cmp::Ordering;

use scoreboard::ranking::rank;
use scoreboard::ScoreBoard;
use serde::{Deserialize, Serialize};

/// Result of a scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub threads: usize,
    pub operations: u64,
    pub rejected: u64,
    pub final_matches: usize,
    pub passed: bool,
    pub details: String,
}

/// Check the summary is strictly ranked and holds no conflicting pair
pub(crate) fn board_is_consistent(board: &ScoreBoard) -> bool {
    let summary = board.summary();
    let ranked = summary
        .windows(2)
        .all(|pair| rank(&pair[0], &pair[1]) == Ordering::Less);
    let comparator = scoreboard::RankingComparator::new(board.config().conflict_policy);
    let unique = summary.iter().enumerate().all(|(i, a)| {
        summary[i + 1..]
            .iter()
            .all(|b| !comparator.compare(a, b).collides())
    });
    ranked && unique
}
