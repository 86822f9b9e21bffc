//! Rivalry clash scenario
//!
//! Threads repeatedly try to kick off random pairings drawn from a small
//! pool of teams, so most attempts overlap a match already in progress.
//! Under the shared-team policy the board must never let one team play
//! two matches at once.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use scoreboard::{ConflictPolicy, ScoreBoard};
use tracing::info;

use crate::scenarios::{board_is_consistent, ScenarioResult};
use crate::tournament::Tournament;

/// Configuration for the rivalry clash scenario.
#[derive(Debug, Clone)]
pub struct RivalryClashConfig {
    /// Number of distinct teams to draw from
    pub team_pool: usize,
    pub threads: usize,
    /// Start attempts per thread
    pub attempts_per_thread: usize,
    /// Finish every n-th accepted match to free its teams again
    pub finish_every: usize,
    pub seed: u64,
}

impl Default for RivalryClashConfig {
    fn default() -> Self {
        Self {
            team_pool: 12,
            threads: 8,
            attempts_per_thread: 500,
            finish_every: 3,
            seed: 7,
        }
    }
}

#[derive(Debug, Default)]
struct Outcome {
    accepted: u64,
    conflicts: u64,
    errors: u64,
}

/// Run the rivalry clash scenario against `board`.
pub fn run(board: &Arc<ScoreBoard>, config: &RivalryClashConfig) -> ScenarioResult {
    let threads = config.threads.max(1);
    let pool = config.team_pool.max(2);
    let finish_every = config.finish_every.max(1);
    let mut seeder = Tournament::new(Arc::clone(board), config.seed);
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let mut tournament = Tournament::new(Arc::clone(board), seeder.worker_seed());
            let barrier = Arc::clone(&barrier);
            let attempts = config.attempts_per_thread;
            thread::spawn(move || {
                let mut outcome = Outcome::default();
                barrier.wait();
                for _ in 0..attempts {
                    let fixture = tournament.random_fixture(pool);
                    match tournament.board().start_match(&fixture.home, &fixture.away) {
                        Ok(()) => {
                            outcome.accepted += 1;
                            if outcome.accepted % finish_every as u64 == 0
                                && tournament.board().finish_match(&fixture.home, &fixture.away).is_err()
                            {
                                outcome.errors += 1;
                            }
                        }
                        Err(e) if e.is_conflict() => outcome.conflicts += 1,
                        Err(_) => outcome.errors += 1,
                    }
                }
                outcome
            })
        })
        .collect();

    let mut total = Outcome::default();
    for handle in handles {
        match handle.join() {
            Ok(outcome) => {
                total.accepted += outcome.accepted;
                total.conflicts += outcome.conflicts;
                total.errors += outcome.errors;
            }
            Err(_) => total.errors += 1,
        }
    }

    let summary = board.summary();
    let one_match_per_team = match board.config().conflict_policy {
        ConflictPolicy::SharedTeam => {
            let mut teams = HashSet::new();
            summary.len() <= pool / 2
                && summary
                    .iter()
                    .all(|m| teams.insert(m.home_team.clone()) && teams.insert(m.away_team.clone()))
        }
        ConflictPolicy::ExactPair => true,
    };

    let operations = (threads * config.attempts_per_thread) as u64;
    let passed = total.errors == 0
        && total.accepted + total.conflicts == operations
        && one_match_per_team
        && board_is_consistent(board);

    info!(
        team_pool = pool,
        threads,
        accepted = total.accepted,
        conflicts = total.conflicts,
        passed,
        "Rivalry clash complete"
    );

    ScenarioResult {
        name: "rivalry_clash".to_string(),
        threads,
        operations,
        rejected: total.conflicts,
        final_matches: summary.len(),
        passed,
        details: format!(
            "{} kick-offs accepted, {} rejected as clashes, {} matches running from a pool of {} teams.",
            total.accepted,
            total.conflicts,
            summary.len(),
            pool
        ),
    }
}
