//! Error types for the scoreboard
//!
//! Error taxonomy using thiserror. Every error is a precondition failure
//! reported to the caller; none is retried.

use thiserror::Error;

/// Top-level scoreboard error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreBoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("One or both teams of {home} vs {away} are already participating in another match")]
    Conflict { home: String, away: String },

    #[error("No match found for {home} and {away}")]
    NotFound { home: String, away: String },
}

impl ScoreBoardError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoreBoardError::Validation(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ScoreBoardError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScoreBoardError::NotFound { .. })
    }
}

/// Input rejected before the registry is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} must not be null or empty")]
    EmptyField { label: String },

    #[error("{label} must not be negative")]
    NegativeValue { label: String, value: i64 },

    #[error("{team} cannot play against itself")]
    SameTeam { team: String },
}

/// Registry-level rejections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{home} vs {away} collides with an active match")]
    Conflict { home: String, away: String },

    #[error("{home} vs {away} is not on the board")]
    NotFound { home: String, away: String },
}

impl From<RegistryError> for ScoreBoardError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Conflict { home, away } => ScoreBoardError::Conflict { home, away },
            RegistryError::NotFound { home, away } => ScoreBoardError::NotFound { home, away },
        }
    }
}
