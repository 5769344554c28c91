//! Cross-platform elapsed-time clock.
//!
//! # Responsibility
//! - Classify the host and locate its global object.
//! - Resolve one monotonic, non-failing clock per process.
//!
//! # Invariants
//! - The process clock is resolved at most once and never re-resolved.
//! - `now()` is non-decreasing; `time_origin()` is fixed after first read.
//! - Source failures are absorbed during resolution; reads cannot fail.
//!
//! Components that need timing should take a `&Clock`. The free functions
//! below read the process clock for callers without one.

pub mod clock;
pub mod environment;
pub mod fallback;
pub mod global_scope;
pub mod native;
pub mod performance;
pub mod resolver;
pub mod wall;

pub use clock::{Clock, ClockInitError, TimeSource, TimeSourceKind};
pub use environment::HostEnvironment;
pub use fallback::MonotonicFallback;
pub use global_scope::{locate_global, GlobalObject, HostGlobals, ScopeKind};
pub use native::{NativeTimer, NativeTimerLoader, QuantaLoader, SourceUnavailable};
pub use performance::{Performance, PerformanceFacility};
pub use resolver::PerformanceSourceResolver;
pub use wall::{ManualWallClock, SystemWallClock, WallClock};

use once_cell::sync::OnceCell;

static PROCESS_CLOCK: OnceCell<Clock> = OnceCell::new();

/// Installs `clock` as the process clock.
///
/// Intended for startup, before anything has read the time. Fails when a
/// process clock already exists, including one resolved lazily by `now()`.
pub fn init_clock(clock: Clock) -> Result<&'static Clock, ClockInitError> {
    let mut installed = false;
    let active = PROCESS_CLOCK.get_or_init(|| {
        installed = true;
        clock
    });
    if installed {
        Ok(active)
    } else {
        Err(ClockInitError::AlreadyInitialized {
            active: active.source_kind(),
        })
    }
}

/// The process clock, resolved for the current host on first use.
pub fn process_clock() -> &'static Clock {
    PROCESS_CLOCK.get_or_init(|| PerformanceSourceResolver::for_current_host().resolve())
}

/// Elapsed milliseconds on the process clock.
pub fn now() -> f64 {
    process_clock().now()
}

/// Epoch milliseconds at which the process clock started measuring.
pub fn time_origin() -> f64 {
    process_clock().time_origin()
}
