//! Types library for the live scoreboard
//!
//! Core type definitions shared by the scoreboard service and the
//! simulation tooling.
//!
//! # Modules
//! - `ids`: Identifiers (MatchId, TeamName, MatchKey)
//! - `score`: Goal counts
//! - `fixture`: The immutable `Match` entity
//! - `validation`: Input guard for names and scores
//! - `errors`: Error taxonomy

pub mod ids;
pub mod score;
pub mod fixture;
pub mod validation;
pub mod errors;
