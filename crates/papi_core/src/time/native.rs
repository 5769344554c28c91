//! Native high-resolution timer for server-like hosts.
//!
//! The loader is selected at build time. Loading may still fail (target
//! without a usable counter, injected failure), and that failure is reported
//! as `SourceUnavailable` for the resolver to absorb.

use crate::time::wall::WallClock;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Why a preferred time source could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUnavailable {
    /// The facility does not exist for this target.
    ModuleMissing,
    /// The facility exists but failed to initialize.
    LoadFailed(String),
    /// The global that should carry the facility is absent.
    GlobalAbsent,
}

impl Display for SourceUnavailable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModuleMissing => write!(f, "high-resolution timer is not available on this target"),
            Self::LoadFailed(reason) => write!(f, "high-resolution timer failed to load: {reason}"),
            Self::GlobalAbsent => write!(f, "no global object carries a timer facility"),
        }
    }
}

impl Error for SourceUnavailable {}

/// Loaded high-resolution timer anchored at its load instant.
#[derive(Clone)]
pub struct NativeTimer {
    clock: quanta::Clock,
    start: quanta::Instant,
    time_origin: f64,
}

impl NativeTimer {
    /// Anchors `clock` at its current reading, with `time_origin` as the
    /// matching epoch milliseconds.
    pub fn new(clock: quanta::Clock, time_origin: f64) -> Self {
        let start = clock.now();
        Self {
            clock,
            start,
            time_origin,
        }
    }

    /// Milliseconds since load, sub-millisecond precision.
    pub fn now(&self) -> f64 {
        self.clock.now().duration_since(self.start).as_secs_f64() * 1_000.0
    }

    pub fn time_origin(&self) -> f64 {
        self.time_origin
    }
}

impl Debug for NativeTimer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeTimer")
            .field("time_origin", &self.time_origin)
            .finish()
    }
}

/// Obtains the native timer, or reports why it is unavailable.
pub trait NativeTimerLoader: Send + Sync {
    fn load(&self, wall_clock: &dyn WallClock) -> Result<NativeTimer, SourceUnavailable>;
}

/// Default loader backed by `quanta`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantaLoader;

impl NativeTimerLoader for QuantaLoader {
    #[cfg(not(target_arch = "wasm32"))]
    fn load(&self, wall_clock: &dyn WallClock) -> Result<NativeTimer, SourceUnavailable> {
        let time_origin = wall_clock.now_millis() as f64;
        Ok(NativeTimer::new(quanta::Clock::new(), time_origin))
    }

    #[cfg(target_arch = "wasm32")]
    fn load(&self, _wall_clock: &dyn WallClock) -> Result<NativeTimer, SourceUnavailable> {
        Err(SourceUnavailable::ModuleMissing)
    }
}
