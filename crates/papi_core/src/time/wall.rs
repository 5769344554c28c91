//! Wall-clock readings in Unix epoch milliseconds.
//!
//! The wall clock is only used to anchor origins and to drive the software
//! fallback. It may jump backward (NTP correction, manual change); callers
//! that need ordering must clamp.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of absolute epoch-millisecond readings.
pub trait WallClock: Send + Sync {
    /// Current Unix epoch time in whole milliseconds.
    fn now_millis(&self) -> i64;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven wall clock for deterministic callers and tests.
///
/// Can be moved in either direction, including backward.
#[derive(Debug, Default)]
pub struct ManualWallClock {
    millis: AtomicI64,
}

impl ManualWallClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(start_millis),
        }
    }

    /// Sets the absolute reading returned by the next `now_millis`.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Moves the reading by `delta` milliseconds (negative moves backward).
    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl WallClock for ManualWallClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualWallClock, SystemWallClock, WallClock};

    #[test]
    fn manual_clock_moves_both_ways() {
        let clock = ManualWallClock::new(1_000);
        clock.advance(25);
        assert_eq!(clock.now_millis(), 1_025);
        clock.advance(-50);
        assert_eq!(clock.now_millis(), 975);
        clock.set(42);
        assert_eq!(clock.now_millis(), 42);
    }

    #[test]
    fn system_clock_reads_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemWallClock.now_millis() > 1_577_836_800_000);
    }
}
