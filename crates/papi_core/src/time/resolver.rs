//! Time source selection.
//!
//! # Responsibility
//! - Pick the best available source for the detected host, once.
//! - Absorb every `SourceUnavailable` and degrade to the next step.
//!
//! # Invariants
//! - `resolve` never fails and never panics.
//! - A server-like host whose native timer fails goes straight to the
//!   software fallback; it does not look for a performance facility.

use crate::time::clock::{Clock, TimeSource};
use crate::time::environment::HostEnvironment;
use crate::time::fallback::MonotonicFallback;
use crate::time::global_scope::{locate_global, HostGlobals};
use crate::time::native::{NativeTimerLoader, QuantaLoader, SourceUnavailable};
use crate::time::wall::{SystemWallClock, WallClock};
use log::{debug, info, warn};
use std::sync::Arc;

/// Builds a `Clock` from a globals snapshot and injectable collaborators.
pub struct PerformanceSourceResolver {
    globals: HostGlobals,
    native_loader: Box<dyn NativeTimerLoader>,
    wall_clock: Arc<dyn WallClock>,
}

impl PerformanceSourceResolver {
    /// Resolver over `globals` with the build-time native loader and the
    /// system wall clock.
    pub fn new(globals: HostGlobals) -> Self {
        Self {
            globals,
            native_loader: Box::new(QuantaLoader),
            wall_clock: Arc::new(SystemWallClock),
        }
    }

    /// Resolver for the host this binary was compiled for.
    pub fn for_current_host() -> Self {
        Self::new(HostGlobals::probe())
    }

    pub fn with_native_loader(mut self, loader: impl NativeTimerLoader + 'static) -> Self {
        self.native_loader = Box::new(loader);
        self
    }

    pub fn with_wall_clock(mut self, wall_clock: Arc<dyn WallClock>) -> Self {
        self.wall_clock = wall_clock;
        self
    }

    pub fn environment(&self) -> HostEnvironment {
        HostEnvironment::classify(&self.globals)
    }

    /// Selects the source: native timer, host performance, software fallback.
    pub fn resolve(self) -> Clock {
        let environment = self.environment();
        // Stands in for module load time: the polyfill and fallback share it.
        let initial_time = self.wall_clock.now_millis();

        let source = if environment == HostEnvironment::ServerLike {
            match self.native_loader.load(self.wall_clock.as_ref()) {
                Ok(timer) => TimeSource::NativeHighRes(timer),
                Err(err) => {
                    warn!(
                        "event=time_source_unavailable module=time status=fallback source=native_high_res env={} reason={}",
                        environment, err
                    );
                    self.software_fallback(initial_time)
                }
            }
        } else {
            let global = locate_global(&self.globals);
            match global.performance() {
                Some(performance) => {
                    let performance = Arc::clone(performance);
                    performance.polyfill_time_origin(initial_time as f64);
                    TimeSource::BrowserPerformance {
                        performance,
                        initial_time: initial_time as f64,
                    }
                }
                None => {
                    let reason = if global.is_fallback() {
                        SourceUnavailable::GlobalAbsent
                    } else {
                        SourceUnavailable::ModuleMissing
                    };
                    debug!(
                        "event=time_source_unavailable module=time status=fallback source=browser_performance env={} reason={}",
                        environment, reason
                    );
                    self.software_fallback(initial_time)
                }
            }
        };

        info!(
            "event=time_source_resolved module=time status=ok env={} source={}",
            environment,
            source.kind()
        );
        Clock::new(source)
    }

    fn software_fallback(&self, initial_time: i64) -> TimeSource {
        TimeSource::SoftwareFallback(MonotonicFallback::with_origin(
            Arc::clone(&self.wall_clock),
            initial_time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::PerformanceSourceResolver;
    use crate::time::clock::TimeSourceKind;
    use crate::time::environment::HostEnvironment;
    use crate::time::global_scope::{GlobalObject, HostGlobals};
    use crate::time::native::{NativeTimer, NativeTimerLoader, SourceUnavailable};
    use crate::time::performance::{Performance, PerformanceFacility};
    use crate::time::wall::{ManualWallClock, WallClock};
    use std::sync::Arc;

    struct FailingLoader;

    impl NativeTimerLoader for FailingLoader {
        fn load(&self, _wall_clock: &dyn WallClock) -> Result<NativeTimer, SourceUnavailable> {
            Err(SourceUnavailable::LoadFailed("simulated".to_string()))
        }
    }

    struct MockLoader;

    impl NativeTimerLoader for MockLoader {
        fn load(&self, wall_clock: &dyn WallClock) -> Result<NativeTimer, SourceUnavailable> {
            let (clock, _mock) = quanta::Clock::mock();
            Ok(NativeTimer::new(clock, wall_clock.now_millis() as f64))
        }
    }

    struct FixedFacility;

    impl PerformanceFacility for FixedFacility {
        fn now(&self) -> f64 {
            42.25
        }
    }

    #[test]
    fn server_uses_native_timer() {
        let wall = Arc::new(ManualWallClock::new(9_000));
        let clock = PerformanceSourceResolver::new(
            HostGlobals::empty().with_process(GlobalObject::process()),
        )
        .with_native_loader(MockLoader)
        .with_wall_clock(wall)
        .resolve();

        assert_eq!(clock.source_kind(), TimeSourceKind::NativeHighRes);
        assert_eq!(clock.time_origin(), 9_000.0);
    }

    #[test]
    fn server_load_failure_falls_back() {
        let wall = Arc::new(ManualWallClock::new(1_000));
        let clock = PerformanceSourceResolver::new(
            HostGlobals::empty().with_process(
                GlobalObject::process().with_performance(Performance::new(FixedFacility)),
            ),
        )
        .with_native_loader(FailingLoader)
        .with_wall_clock(wall)
        .resolve();

        assert_eq!(clock.source_kind(), TimeSourceKind::SoftwareFallback);
    }

    #[test]
    fn browser_uses_window_performance_with_polyfilled_origin() {
        let wall = Arc::new(ManualWallClock::new(4_000));
        let resolver = PerformanceSourceResolver::new(HostGlobals::empty().with_window(
            GlobalObject::window().with_performance(Performance::new(FixedFacility)),
        ))
        .with_wall_clock(wall);
        assert_eq!(resolver.environment(), HostEnvironment::BrowserLike);

        let clock = resolver.resolve();
        assert_eq!(clock.source_kind(), TimeSourceKind::BrowserPerformance);
        assert_eq!(clock.now(), 42.25);
        assert_eq!(clock.time_origin(), 4_000.0);
    }

    #[test]
    fn unknown_host_uses_software_fallback() {
        let wall = Arc::new(ManualWallClock::new(100));
        let clock = PerformanceSourceResolver::new(HostGlobals::empty())
            .with_wall_clock(wall.clone())
            .resolve();

        assert_eq!(clock.source_kind(), TimeSourceKind::SoftwareFallback);
        wall.set(150);
        assert_eq!(clock.now(), 50.0);
        assert_eq!(clock.time_origin(), 100.0);
    }
}
