//! Software monotonic clock built over a wall clock.
//!
//! # Invariants
//! - `now()` never returns less than a previous `now()` of the same instance.
//! - A backward wall-clock jump returns the last value unchanged; the size of
//!   the jump is discarded, not interpolated.
//! - `time_origin()` is the wall reading taken at construction.

use crate::time::wall::WallClock;
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Non-decreasing elapsed-time clock used when no native timer is usable.
pub struct MonotonicFallback {
    wall_clock: Arc<dyn WallClock>,
    origin_millis: i64,
    last_returned: AtomicI64,
}

impl MonotonicFallback {
    /// Creates a fallback anchored at the wall clock's current reading.
    pub fn new(wall_clock: Arc<dyn WallClock>) -> Self {
        let origin_millis = wall_clock.now_millis();
        Self::with_origin(wall_clock, origin_millis)
    }

    /// Creates a fallback anchored at an already captured origin.
    pub fn with_origin(wall_clock: Arc<dyn WallClock>, origin_millis: i64) -> Self {
        Self {
            wall_clock,
            origin_millis,
            last_returned: AtomicI64::new(0),
        }
    }

    /// Elapsed milliseconds since the origin, clamped to be non-decreasing.
    pub fn now(&self) -> f64 {
        let candidate = self
            .wall_clock
            .now_millis()
            .saturating_sub(self.origin_millis);
        // fetch_max keeps compare-and-store atomic across threads.
        let previous = self.last_returned.fetch_max(candidate, Ordering::AcqRel);
        previous.max(candidate) as f64
    }

    /// Epoch milliseconds observed at construction.
    pub fn time_origin(&self) -> f64 {
        self.origin_millis as f64
    }
}

impl Debug for MonotonicFallback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonotonicFallback")
            .field("origin_millis", &self.origin_millis)
            .field("last_returned", &self.last_returned.load(Ordering::Acquire))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::MonotonicFallback;
    use crate::time::wall::ManualWallClock;
    use std::sync::Arc;

    #[test]
    fn clamps_backward_wall_clock_jump() {
        let wall = Arc::new(ManualWallClock::new(1_000_000));
        let fallback = MonotonicFallback::new(wall.clone());

        wall.set(1_000_010);
        assert_eq!(fallback.now(), 10.0);
        wall.set(1_000_005);
        assert_eq!(fallback.now(), 10.0);
        wall.set(1_000_020);
        assert_eq!(fallback.now(), 20.0);
    }

    #[test]
    fn reading_below_origin_stays_at_zero() {
        let wall = Arc::new(ManualWallClock::new(5_000));
        let fallback = MonotonicFallback::new(wall.clone());

        wall.set(4_000);
        assert_eq!(fallback.now(), 0.0);
        assert_eq!(fallback.time_origin(), 5_000.0);
    }

    #[test]
    fn origin_ignores_later_wall_changes() {
        let wall = Arc::new(ManualWallClock::new(77));
        let fallback = MonotonicFallback::new(wall.clone());
        wall.set(1_000);
        fallback.now();
        assert_eq!(fallback.time_origin(), 77.0);
    }

    #[test]
    fn stays_monotonic_across_threads() {
        let wall = Arc::new(ManualWallClock::new(0));
        let fallback = Arc::new(MonotonicFallback::new(wall.clone()));

        let handles: Vec<_> = (0..4_i64)
            .map(|worker| {
                let wall = wall.clone();
                let fallback = fallback.clone();
                std::thread::spawn(move || {
                    let mut previous = 0.0;
                    for step in 0..500_i64 {
                        // Workers push the shared wall clock in opposite directions.
                        wall.advance(if (step + worker) % 3 == 0 { -2 } else { 3 });
                        let value = fallback.now();
                        assert!(value >= previous, "{value} < {previous}");
                        previous = value;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker should not panic");
        }
    }
}
