//! Scoreboard façade
//!
//! Validates raw caller input, stamps kick-off times and drives the
//! registry. Every failed call leaves the board exactly as it was.
//!
//! A board is an explicitly owned value; share it across threads with
//! `Arc<ScoreBoard>`.

use tracing::{debug, info, warn};
use types::errors::ScoreBoardError;
use types::fixture::Match;
use types::ids::MatchKey;
use types::validation::Validator;

use crate::clock::KickoffClock;
use crate::config::{BoardConfig, FinishPolicy};
use crate::ranking::RankingComparator;
use crate::registry::OrderedUniqueRegistry;

const HOME_TEAM: &str = "Home team name";
const AWAY_TEAM: &str = "Away team name";
const HOME_SCORE: &str = "Home score";
const AWAY_SCORE: &str = "Away score";

/// Live scoreboard of matches in progress
#[derive(Debug)]
pub struct ScoreBoard {
    config: BoardConfig,
    validator: Validator,
    clock: KickoffClock,
    registry: OrderedUniqueRegistry,
}

impl ScoreBoard {
    /// Create an empty board with the given configuration
    pub fn new(config: BoardConfig) -> Self {
        Self::with_clock(config, KickoffClock::new())
    }

    /// Create an empty board stamping kick-offs from `clock`
    pub fn with_clock(config: BoardConfig, clock: KickoffClock) -> Self {
        info!(
            conflict_policy = ?config.conflict_policy,
            finish_policy = ?config.finish_policy,
            "ScoreBoard initialized"
        );

        Self {
            config,
            validator: Validator::new(),
            clock,
            registry: OrderedUniqueRegistry::new(RankingComparator::new(config.conflict_policy)),
        }
    }

    /// World cup board: one match per team, lenient finish
    pub fn world_cup() -> Self {
        Self::new(BoardConfig::default())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Start a new match at 0-0
    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<(), ScoreBoardError> {
        let key = self.validate_key(home_team, away_team)?;

        let kickoff = Match::start(key.home, key.away, self.clock.stamp());
        let match_id = kickoff.id;

        self.registry.insert(kickoff).map_err(|err| {
            warn!(home_team, away_team, "Start rejected: team already playing");
            ScoreBoardError::from(err)
        })?;

        debug!(%match_id, home_team, away_team, "Match started");
        Ok(())
    }

    /// Replace the scoreline of a running match
    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), ScoreBoardError> {
        let key = self.validate_key(home_team, away_team)?;
        let home_score = self.validator.check_non_negative(home_score, HOME_SCORE)?;
        let away_score = self.validator.check_non_negative(away_score, AWAY_SCORE)?;

        let updated = self
            .registry
            .replace_score(&key, home_score, away_score)
            .map_err(|err| {
                warn!(home_team, away_team, error = %err, "Score update rejected");
                ScoreBoardError::from(err)
            })?;

        debug!(
            match_id = %updated.id,
            home_team,
            away_team,
            home_score = home_score.goals(),
            away_score = away_score.goals(),
            "Score updated"
        );
        Ok(())
    }

    /// Remove a match from the board
    ///
    /// An unknown pair is a no-op under `FinishPolicy::Lenient` and a
    /// `NotFound` error under `FinishPolicy::Strict`.
    pub fn finish_match(&self, home_team: &str, away_team: &str) -> Result<(), ScoreBoardError> {
        let key = self.validate_key(home_team, away_team)?;

        match self.registry.remove(&key) {
            Some(finished) => {
                debug!(
                    match_id = %finished.id,
                    home_team,
                    away_team,
                    home_score = finished.home_score.goals(),
                    away_score = finished.away_score.goals(),
                    "Match finished"
                );
                Ok(())
            }
            None => match self.config.finish_policy {
                FinishPolicy::Lenient => {
                    debug!(home_team, away_team, "Finish for unknown match ignored");
                    Ok(())
                }
                FinishPolicy::Strict => {
                    warn!(home_team, away_team, "Finish for unknown match");
                    Err(ScoreBoardError::NotFound {
                        home: home_team.to_string(),
                        away: away_team.to_string(),
                    })
                }
            },
        }
    }

    /// Ranked copy of every running match
    ///
    /// Highest total first, then most recently started.
    pub fn summary(&self) -> Vec<Match> {
        self.registry.snapshot()
    }

    /// Copy of one running match, if the pair is on the board
    pub fn get_match(&self, home_team: &str, away_team: &str) -> Option<Match> {
        let key = self.validate_key(home_team, away_team).ok()?;
        self.registry.get(&key)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn validate_key(&self, home_team: &str, away_team: &str) -> Result<MatchKey, ScoreBoardError> {
        let home = self.validator.check_non_empty(home_team, HOME_TEAM)?;
        let away = self.validator.check_non_empty(away_team, AWAY_TEAM)?;
        self.validator.check_distinct(&home, &away)?;
        Ok(MatchKey::new(home, away))
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::world_cup()
    }
}
