//! Goal flood scenario
//!
//! Starts a set of matches, then races score updates against finishes on
//! every one of them. Updates that lose the race to a finish are expected
//! to be rejected as not found; anything else is a failure. The board must
//! end up empty.

use std::sync::{Arc, Barrier};
use std::thread;

use scoreboard::ScoreBoard;
use tracing::{info, warn};

use crate::scenarios::ScenarioResult;
use crate::tournament::{disjoint_fixtures, Fixture, Tournament};

/// Configuration for the goal flood scenario.
#[derive(Debug, Clone)]
pub struct GoalFloodConfig {
    /// Matches started before the flood
    pub matches: usize,
    /// Number of updater/finisher thread pairs
    pub thread_pairs: usize,
    /// Upper bound for random goals per side
    pub max_goals: u32,
    pub seed: u64,
}

impl Default for GoalFloodConfig {
    fn default() -> Self {
        Self {
            matches: 100,
            thread_pairs: 50,
            max_goals: 9,
            seed: 42,
        }
    }
}

#[derive(Debug, Default)]
struct WorkerTally {
    operations: u64,
    not_found: u64,
    failures: u64,
}

/// Run the goal flood scenario against `board`.
pub fn run(board: &Arc<ScoreBoard>, config: &GoalFloodConfig) -> ScenarioResult {
    let fixtures = Arc::new(disjoint_fixtures(config.matches));
    let mut started_failures = 0u64;
    for f in fixtures.iter() {
        if board.start_match(&f.home, &f.away).is_err() {
            started_failures += 1;
        }
    }

    let pairs = config.thread_pairs.max(1);
    let mut tournament = Tournament::new(Arc::clone(board), config.seed);
    let barrier = Arc::new(Barrier::new(pairs * 2));
    let mut handles = Vec::with_capacity(pairs * 2);

    for _ in 0..pairs {
        let updater_seed = tournament.worker_seed();
        handles.push(spawn_updater(board, &fixtures, &barrier, updater_seed, config.max_goals));
        handles.push(spawn_finisher(board, &fixtures, &barrier));
    }

    let mut tally = WorkerTally {
        failures: started_failures,
        ..Default::default()
    };
    for handle in handles {
        match handle.join() {
            Ok(worker) => {
                tally.operations += worker.operations;
                tally.not_found += worker.not_found;
                tally.failures += worker.failures;
            }
            Err(_) => tally.failures += 1,
        }
    }

    let final_matches = board.len();
    let passed = tally.failures == 0 && final_matches == 0;

    if !passed {
        warn!(failures = tally.failures, final_matches, "Goal flood left the board inconsistent");
    }
    info!(
        matches = config.matches,
        thread_pairs = pairs,
        operations = tally.operations,
        late_updates = tally.not_found,
        passed,
        "Goal flood complete"
    );

    ScenarioResult {
        name: "goal_flood".to_string(),
        threads: pairs * 2,
        operations: tally.operations,
        rejected: tally.not_found,
        final_matches,
        passed,
        details: format!(
            "{} operations on {} matches, {} updates arrived after the final whistle, {} failures.",
            tally.operations, config.matches, tally.not_found, tally.failures
        ),
    }
}

fn spawn_updater(
    board: &Arc<ScoreBoard>,
    fixtures: &Arc<Vec<Fixture>>,
    barrier: &Arc<Barrier>,
    seed: u64,
    max_goals: u32,
) -> thread::JoinHandle<WorkerTally> {
    let mut tournament = Tournament::new(Arc::clone(board), seed);
    let fixtures = Arc::clone(fixtures);
    let barrier = Arc::clone(barrier);
    thread::spawn(move || {
        let mut tally = WorkerTally::default();
        barrier.wait();
        for f in fixtures.iter() {
            let (home_goals, away_goals) = tournament.scoreline(max_goals);
            tally.operations += 1;
            match tournament.board().update_score(&f.home, &f.away, home_goals, away_goals) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => tally.not_found += 1,
                Err(_) => tally.failures += 1,
            }
        }
        tally
    })
}

fn spawn_finisher(
    board: &Arc<ScoreBoard>,
    fixtures: &Arc<Vec<Fixture>>,
    barrier: &Arc<Barrier>,
) -> thread::JoinHandle<WorkerTally> {
    let board = Arc::clone(board);
    let fixtures = Arc::clone(fixtures);
    let barrier = Arc::clone(barrier);
    thread::spawn(move || {
        let mut tally = WorkerTally::default();
        barrier.wait();
        for f in fixtures.iter() {
            tally.operations += 1;
            if board.finish_match(&f.home, &f.away).is_err() {
                tally.failures += 1;
            }
        }
        tally
    })
}
