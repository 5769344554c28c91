//! Core library for PAPI addons.
//! Provides the cross-platform elapsed-time clock and the host data contracts.

pub mod entities;
pub mod logging;
pub mod time;

pub use entities::EntityValidationError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use time::{
    init_clock, now, process_clock, time_origin, Clock, ClockInitError, HostEnvironment,
    HostGlobals, PerformanceSourceResolver, TimeSourceKind,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
