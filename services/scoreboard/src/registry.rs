//! Ordered unique registry
//!
//! Holds the active matches sorted by `RankingComparator`, behind a single
//! `RwLock`. Writers take the lock for the whole of one logical change, so
//! a remove+insert replacement is a single step to every reader. Readers
//! only ever receive cloned snapshots.

use std::cmp::Ordering;

use parking_lot::RwLock;
use types::errors::RegistryError;
use types::fixture::Match;
use types::ids::MatchKey;
use types::score::Score;

use crate::ranking::{RankingComparator, Verdict};

/// Thread-safe, ranked set of active matches
///
/// Entries are kept in summary order at all times. No two entries collide
/// under the comparator's conflict policy.
#[derive(Debug, Default)]
pub struct OrderedUniqueRegistry {
    comparator: RankingComparator,
    /// Ranked entries, best first
    entries: RwLock<Vec<Match>>,
}

impl OrderedUniqueRegistry {
    /// Create an empty registry ordered by `comparator`
    pub fn new(comparator: RankingComparator) -> Self {
        Self {
            comparator,
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn comparator(&self) -> &RankingComparator {
        &self.comparator
    }

    /// Insert a match unless it collides with an active one
    pub fn insert(&self, candidate: Match) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        place(&self.comparator, &mut entries, candidate)
    }

    /// Set the scoreline of the match at `key` in one critical section
    ///
    /// The stored replacement keeps the id, teams and kick-off time of the
    /// old entry and is moved to its new ranked position. Returns it.
    pub fn replace_score(
        &self,
        key: &MatchKey,
        home_score: Score,
        away_score: Score,
    ) -> Result<Match, RegistryError> {
        let mut entries = self.entries.write();
        let index = position(&entries, key).ok_or_else(|| not_found(key))?;

        let old = entries.remove(index);
        let replacement = old.with_score(home_score, away_score);

        match place(&self.comparator, &mut entries, replacement.clone()) {
            Ok(()) => Ok(replacement),
            Err(err) => {
                // Put the original back where it was
                entries.insert(index, old);
                Err(err)
            }
        }
    }

    /// Remove the match at `key`, returning it if it was active
    pub fn remove(&self, key: &MatchKey) -> Option<Match> {
        let mut entries = self.entries.write();
        let index = position(&entries, key)?;
        Some(entries.remove(index))
    }

    /// Copy of the match at `key`
    pub fn get(&self, key: &MatchKey) -> Option<Match> {
        let entries = self.entries.read();
        position(&entries, key).map(|index| entries[index].clone())
    }

    /// Point-in-time copy of every active match, best first
    pub fn snapshot(&self) -> Vec<Match> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every active match
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Insert `candidate` at its ranked position
///
/// A single pass both rejects collisions and counts the entries ranked
/// ahead of the candidate.
fn place(
    comparator: &RankingComparator,
    entries: &mut Vec<Match>,
    candidate: Match,
) -> Result<(), RegistryError> {
    let mut ahead = 0;
    for existing in entries.iter() {
        match comparator.compare(&candidate, existing) {
            Verdict::Collides => {
                return Err(RegistryError::Conflict {
                    home: candidate.home_team.to_string(),
                    away: candidate.away_team.to_string(),
                })
            }
            Verdict::Ranked(Ordering::Greater) => ahead += 1,
            Verdict::Ranked(_) => {}
        }
    }
    entries.insert(ahead, candidate);
    Ok(())
}

fn position(entries: &[Match], key: &MatchKey) -> Option<usize> {
    entries.iter().position(|m| m.is(&key.home, &key.away))
}

fn not_found(key: &MatchKey) -> RegistryError {
    RegistryError::NotFound {
        home: key.home.to_string(),
        away: key.away.to_string(),
    }
}
