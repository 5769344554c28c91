//! Ambient global objects and their lookup.
//!
//! # Responsibility
//! - Model the globals a host exposes as an explicit, injectable snapshot.
//! - Resolve the one global that timing code reads from.
//!
//! # Invariants
//! - Lookup never fails: with no recognizable global, an empty fallback
//!   object is returned.
//! - The fallback object is never populated; every property read on it
//!   yields `None`.

use crate::time::performance::Performance;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Which host global a `GlobalObject` stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Server-process global (accompanied by a process-control object).
    Process,
    /// Browser `window`.
    Window,
    /// Worker `self`.
    WorkerSelf,
    /// Empty stand-in returned when nothing else exists.
    Fallback,
}

/// One host global object with the properties timing code may read.
#[derive(Debug, Clone)]
pub struct GlobalObject {
    scope: ScopeKind,
    performance: Option<Arc<Performance>>,
    properties: BTreeMap<String, Value>,
}

impl GlobalObject {
    fn with_scope(scope: ScopeKind) -> Self {
        Self {
            scope,
            performance: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn process() -> Self {
        Self::with_scope(ScopeKind::Process)
    }

    pub fn window() -> Self {
        Self::with_scope(ScopeKind::Window)
    }

    pub fn worker_self() -> Self {
        Self::with_scope(ScopeKind::WorkerSelf)
    }

    /// Empty object, safe to read optional properties from.
    pub fn fallback() -> Self {
        Self::with_scope(ScopeKind::Fallback)
    }

    /// Attaches a performance facility. Ignored on the fallback object.
    pub fn with_performance(mut self, performance: Performance) -> Self {
        if !self.is_fallback() {
            self.performance = Some(Arc::new(performance));
        }
        self
    }

    /// Attaches an arbitrary named property. Ignored on the fallback object.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        if !self.is_fallback() {
            self.properties.insert(name.into(), value);
        }
        self
    }

    pub fn scope(&self) -> ScopeKind {
        self.scope
    }

    pub fn is_fallback(&self) -> bool {
        self.scope == ScopeKind::Fallback
    }

    pub fn performance(&self) -> Option<&Arc<Performance>> {
        self.performance.as_ref()
    }

    /// Reads a named property; absent properties yield `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// Snapshot of the globals visible to the current host.
#[derive(Debug, Clone, Default)]
pub struct HostGlobals {
    process: Option<GlobalObject>,
    window: Option<GlobalObject>,
    worker_self: Option<GlobalObject>,
}

impl HostGlobals {
    /// Snapshot with no globals at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot for the compiled target.
    ///
    /// Native targets run as a server-like process. `wasm32` targets see no
    /// globals until the embedder injects them.
    pub fn probe() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::empty().with_process(GlobalObject::process())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::empty()
        }
    }

    /// Declares a process-control object, with `global` as the server global.
    pub fn with_process(mut self, global: GlobalObject) -> Self {
        self.process = Some(global);
        self
    }

    pub fn with_window(mut self, window: GlobalObject) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_worker_self(mut self, worker_self: GlobalObject) -> Self {
        self.worker_self = Some(worker_self);
        self
    }

    pub fn has_process(&self) -> bool {
        self.process.is_some()
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }

    pub fn has_worker_self(&self) -> bool {
        self.worker_self.is_some()
    }
}

/// Returns the global timing code should read from.
///
/// Priority: server global, window, worker self, empty fallback.
pub fn locate_global(globals: &HostGlobals) -> GlobalObject {
    globals
        .process
        .as_ref()
        .or(globals.window.as_ref())
        .or(globals.worker_self.as_ref())
        .cloned()
        .unwrap_or_else(GlobalObject::fallback)
}
