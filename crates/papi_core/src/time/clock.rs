//! Resolved clock and the sources it can be backed by.
//!
//! # Invariants
//! - `Clock::now()` is non-decreasing for the lifetime of a `Clock`.
//! - `Clock::time_origin()` is computed on first access and cached; later
//!   reads return the identical value.
//! - Neither read can fail.

use crate::time::fallback::MonotonicFallback;
use crate::time::native::NativeTimer;
use crate::time::performance::Performance;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Kind of source backing a `Clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSourceKind {
    NativeHighRes,
    BrowserPerformance,
    SoftwareFallback,
}

impl TimeSourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NativeHighRes => "native_high_res",
            Self::BrowserPerformance => "browser_performance",
            Self::SoftwareFallback => "software_fallback",
        }
    }
}

impl Display for TimeSourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time source selected by the resolver.
#[derive(Debug)]
pub enum TimeSource {
    /// Process-local high-resolution counter.
    NativeHighRes(NativeTimer),
    /// Host performance facility; `initial_time` feeds the origin polyfill.
    BrowserPerformance {
        performance: Arc<Performance>,
        initial_time: f64,
    },
    /// Wall-clock based clamp.
    SoftwareFallback(MonotonicFallback),
}

impl TimeSource {
    pub fn kind(&self) -> TimeSourceKind {
        match self {
            Self::NativeHighRes(_) => TimeSourceKind::NativeHighRes,
            Self::BrowserPerformance { .. } => TimeSourceKind::BrowserPerformance,
            Self::SoftwareFallback(_) => TimeSourceKind::SoftwareFallback,
        }
    }

    fn now(&self) -> f64 {
        match self {
            Self::NativeHighRes(timer) => timer.now(),
            Self::BrowserPerformance { performance, .. } => performance.now(),
            Self::SoftwareFallback(fallback) => fallback.now(),
        }
    }

    fn time_origin(&self) -> f64 {
        match self {
            Self::NativeHighRes(timer) => timer.time_origin(),
            Self::BrowserPerformance {
                performance,
                initial_time,
            } => performance.polyfill_time_origin(*initial_time),
            Self::SoftwareFallback(fallback) => fallback.time_origin(),
        }
    }
}

/// Elapsed-time clock with a fixed epoch origin.
#[derive(Debug)]
pub struct Clock {
    source: TimeSource,
    time_origin: OnceCell<f64>,
}

impl Clock {
    pub fn new(source: TimeSource) -> Self {
        Self {
            source,
            time_origin: OnceCell::new(),
        }
    }

    /// Elapsed milliseconds since `time_origin`, fractional when available.
    pub fn now(&self) -> f64 {
        self.source.now()
    }

    /// Epoch milliseconds at which measurement began.
    pub fn time_origin(&self) -> f64 {
        *self.time_origin.get_or_init(|| self.source.time_origin())
    }

    pub fn source_kind(&self) -> TimeSourceKind {
        self.source.kind()
    }
}

/// Process clock installation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockInitError {
    /// A process clock already exists; it keeps running unchanged.
    AlreadyInitialized { active: TimeSourceKind },
}

impl Display for ClockInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized { active } => write!(
                f,
                "process clock already initialized with source `{active}`"
            ),
        }
    }
}

impl std::error::Error for ClockInitError {}
