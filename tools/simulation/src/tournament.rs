//! Tournament driver
//!
//! Generates fixtures and scorelines from a seeded RNG so every scenario
//! run is reproducible, and hands out a shared board for worker threads.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scoreboard::ScoreBoard;
use serde::{Deserialize, Serialize};

/// A (home, away) pairing to be played
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fixture {
    pub home: String,
    pub away: String,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

/// Name of the `index`-th generated team
pub fn team_name(index: usize) -> String {
    format!("Team{:04}", index)
}

/// `count` fixtures with no team appearing twice
pub fn disjoint_fixtures(count: usize) -> Vec<Fixture> {
    (0..count)
        .map(|i| Fixture::new(team_name(2 * i), team_name(2 * i + 1)))
        .collect()
}

/// Shared board plus a deterministic source of fixtures and scores
pub struct Tournament {
    board: Arc<ScoreBoard>,
    rng: ChaCha8Rng,
}

impl Tournament {
    /// Create a tournament around `board` with a deterministic seed
    pub fn new(board: Arc<ScoreBoard>, seed: u64) -> Self {
        Self {
            board,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Arc<ScoreBoard> {
        &self.board
    }

    /// Random goals for both sides, each in `0..=max_goals`
    pub fn scoreline(&mut self, max_goals: u32) -> (i32, i32) {
        let max = max_goals.min(i32::MAX as u32) as i32;
        (self.rng.gen_range(0..=max), self.rng.gen_range(0..=max))
    }

    /// Random pairing of two different teams from a pool of `pool_size`
    ///
    /// # Panics
    /// Panics if the pool has fewer than two teams
    pub fn random_fixture(&mut self, pool_size: usize) -> Fixture {
        assert!(pool_size >= 2, "Need at least two teams");
        let teams: Vec<usize> = (0..pool_size).collect();
        let picked: Vec<usize> = teams.choose_multiple(&mut self.rng, 2).copied().collect();
        Fixture::new(team_name(picked[0]), team_name(picked[1]))
    }

    /// Seed for a worker thread, derived from this tournament's RNG
    pub fn worker_seed(&mut self) -> u64 {
        self.rng.gen()
    }
}
