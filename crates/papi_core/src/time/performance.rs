//! Host-provided performance facility and its origin polyfill.
//!
//! # Invariants
//! - A polyfilled origin is derived at most once per `Performance` and then
//!   read back unchanged.
//! - An origin reported by the facility itself always wins over the polyfill.

use once_cell::sync::OnceCell;
use std::fmt::{Debug, Formatter};

/// Performance timer exposed by a browser-like or worker-like host.
pub trait PerformanceFacility: Send + Sync {
    /// Milliseconds since the facility's origin.
    fn now(&self) -> f64;

    /// Epoch milliseconds of the facility's origin, when the host exposes one.
    fn time_origin(&self) -> Option<f64> {
        None
    }

    /// Legacy navigation start timestamp, when the host still exposes it.
    fn navigation_start(&self) -> Option<f64> {
        None
    }
}

/// A performance facility as it sits on a global object.
///
/// Holds the origin written back by the polyfill.
pub struct Performance {
    facility: Box<dyn PerformanceFacility>,
    polyfilled_origin: OnceCell<f64>,
}

impl Performance {
    pub fn new(facility: impl PerformanceFacility + 'static) -> Self {
        Self {
            facility: Box::new(facility),
            polyfilled_origin: OnceCell::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.facility.now()
    }

    /// Origin as currently visible on the facility, polyfilled or native.
    pub fn time_origin(&self) -> Option<f64> {
        self.facility
            .time_origin()
            .or_else(|| self.polyfilled_origin.get().copied())
    }

    /// Ensures an origin exists and returns it.
    ///
    /// Uses, in order: the facility's own origin, a non-zero navigation start,
    /// then `initial_time`. The derived value is stored on first call.
    pub fn polyfill_time_origin(&self, initial_time: f64) -> f64 {
        if let Some(origin) = self.facility.time_origin() {
            return origin;
        }
        *self.polyfilled_origin.get_or_init(|| {
            self.facility
                .navigation_start()
                .filter(|start| *start != 0.0)
                .unwrap_or(initial_time)
        })
    }
}

impl Debug for Performance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Performance")
            .field("native_origin", &self.facility.time_origin())
            .field("polyfilled_origin", &self.polyfilled_origin.get())
            .finish()
    }
}
