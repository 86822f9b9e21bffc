//! Kick-off burst scenario
//!
//! Starts many disjoint matches at once from several threads and verifies
//! every one of them lands on the board exactly once.

use std::sync::{Arc, Barrier};
use std::thread;

use scoreboard::ScoreBoard;
use tracing::info;

use crate::scenarios::{board_is_consistent, ScenarioResult};
use crate::tournament::disjoint_fixtures;

/// Configuration for the kick-off burst scenario.
#[derive(Debug, Clone)]
pub struct KickoffBurstConfig {
    /// Number of matches to start
    pub matches: usize,
    /// Worker threads sharing the work
    pub threads: usize,
}

impl Default for KickoffBurstConfig {
    fn default() -> Self {
        Self {
            matches: 1000,
            threads: 16,
        }
    }
}

/// Run the kick-off burst scenario against `board`.
pub fn run(board: &Arc<ScoreBoard>, config: &KickoffBurstConfig) -> ScenarioResult {
    let threads = config.threads.max(1);
    let fixtures = Arc::new(disjoint_fixtures(config.matches));
    let barrier = Arc::new(Barrier::new(threads));
    let before = board.len();

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let board = Arc::clone(board);
            let fixtures = Arc::clone(&fixtures);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                fixtures
                    .iter()
                    .skip(t)
                    .step_by(threads)
                    .filter(|f| board.start_match(&f.home, &f.away).is_err())
                    .count() as u64
            })
        })
        .collect();

    let mut rejected = 0;
    let mut crashed = false;
    for handle in handles {
        match handle.join() {
            Ok(count) => rejected += count,
            Err(_) => crashed = true,
        }
    }

    let final_matches = board.len();
    let passed = !crashed
        && rejected == 0
        && final_matches == before + config.matches
        && board_is_consistent(board);

    info!(
        matches = config.matches,
        threads,
        rejected,
        final_matches,
        passed,
        "Kick-off burst complete"
    );

    ScenarioResult {
        name: "kickoff_burst".to_string(),
        threads,
        operations: config.matches as u64,
        rejected,
        final_matches,
        passed,
        details: format!(
            "{} matches started from {} threads, {} rejected, {} on the board.",
            config.matches, threads, rejected, final_matches
        ),
    }
}
