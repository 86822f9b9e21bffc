//! Scoreboard Service
//!
//! In-memory registry of matches in progress, shared between threads.
//!
//! **Key Invariants:**
//! - Summary order is strict: total score descending, then most recent
//!   start, then team names
//! - No two running matches conflict under the configured policy
//! - A score update is never visible half-applied
//! - Callers only ever hold copies of stored matches

pub mod ranking;
pub mod registry;
pub mod clock;
pub mod config;
pub mod board;

pub use board::ScoreBoard;
pub use config::{BoardConfig, FinishPolicy};
pub use ranking::{ConflictPolicy, RankingComparator, Verdict};
pub use registry::OrderedUniqueRegistry;
