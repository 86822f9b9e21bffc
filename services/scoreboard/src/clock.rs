//! Kick-off clock
//!
//! Issues strictly increasing Unix-nanosecond timestamps, even when several
//! threads start matches within the same wall-clock tick. The ranking
//! tie-break on start time relies on this.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// Wall clock, bumped forward on collisions
    Wall,
    /// Fixed base plus one per stamp
    Sequential,
}

/// Monotonic timestamp source shared by one board
#[derive(Debug)]
pub struct KickoffClock {
    source: Source,
    last: AtomicI64,
}

impl KickoffClock {
    /// Wall-clock timestamps
    pub fn new() -> Self {
        Self {
            source: Source::Wall,
            last: AtomicI64::new(i64::MIN),
        }
    }

    /// Deterministic timestamps `base`, `base + 1`, ...
    pub fn sequential(base: i64) -> Self {
        Self {
            source: Source::Sequential,
            last: AtomicI64::new(base.saturating_sub(1)),
        }
    }

    /// Next timestamp, strictly greater than every one issued before
    pub fn stamp(&self) -> i64 {
        let floor = match self.source {
            Source::Wall => Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX),
            Source::Sequential => i64::MIN,
        };
        let next = |last: i64| floor.max(last.saturating_add(1));

        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        next(previous)
    }
}

impl Default for KickoffClock {
    fn default() -> Self {
        Self::new()
    }
}
