//! Board configuration
//!
//! Chosen once at construction; a board never changes policy while it
//! holds matches.

use serde::{Deserialize, Serialize};

use crate::ranking::ConflictPolicy;

/// What `finish_match` does when the pair is not on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishPolicy {
    /// Finishing an absent match is a no-op
    #[default]
    Lenient,
    /// Finishing an absent match fails with `NotFound`
    Strict,
}

/// Configuration for a scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Which matches may not run at the same time
    pub conflict_policy: ConflictPolicy,
    /// Handling of finish calls for unknown pairs
    pub finish_policy: FinishPolicy,
}

impl BoardConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn with_finish_policy(mut self, policy: FinishPolicy) -> Self {
        self.finish_policy = policy;
        self
    }
}
