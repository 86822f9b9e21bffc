//! Input validation guard
//!
//! Checks raw caller input and converts it into the scoreboard's typed
//! values. Runs before any registry access, so a rejected call never
//! changes board state.

use crate::errors::ValidationError;
use crate::ids::TeamName;
use crate::score::Score;

/// Stateless validator for team names and scores
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Require a non-blank value, labelled `label` in the error message
    pub fn check_non_empty(&self, value: &str, label: &str) -> Result<TeamName, ValidationError> {
        TeamName::try_new(value).ok_or_else(|| ValidationError::EmptyField {
            label: label.to_string(),
        })
    }

    /// Require two different teams
    pub fn check_distinct(&self, home: &TeamName, away: &TeamName) -> Result<(), ValidationError> {
        if home == away {
            return Err(ValidationError::SameTeam {
                team: home.to_string(),
            });
        }
        Ok(())
    }

    /// Require a count of zero or more, labelled `label` in the error message
    pub fn check_non_negative(&self, value: i32, label: &str) -> Result<Score, ValidationError> {
        Score::try_from_signed(value).ok_or_else(|| ValidationError::NegativeValue {
            label: label.to_string(),
            value: i64::from(value),
        })
    }
}
