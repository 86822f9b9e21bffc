//! Concurrent tournament simulation
//!
//! Drives a shared scoreboard from many threads with seeded, reproducible
//! workloads and checks the board's ordering and uniqueness guarantees.
//!
//! # Modules
//! - `tournament` — Seeded fixture and scoreline generation
//! - `scenarios` — Kick-off burst, goal flood, rivalry clash
//! - `export` — Scenario results and board summary as JSON

pub mod tournament;
pub mod scenarios;
pub mod export;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
