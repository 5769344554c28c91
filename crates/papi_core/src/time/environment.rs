//! Execution-environment classification by capability probing.

use crate::time::global_scope::HostGlobals;
use std::fmt::{Display, Formatter};

/// Execution context the timing subsystem runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// A process-control object is present.
    ServerLike,
    /// A window global is present.
    BrowserLike,
    /// A worker `self` global is present without a window.
    WorkerLike,
    Unknown,
}

impl HostEnvironment {
    /// Classifies a globals snapshot. Pure; only presence is inspected.
    pub fn classify(globals: &HostGlobals) -> Self {
        if globals.has_process() {
            Self::ServerLike
        } else if globals.has_window() {
            Self::BrowserLike
        } else if globals.has_worker_self() {
            Self::WorkerLike
        } else {
            Self::Unknown
        }
    }

    /// Stable lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ServerLike => "server",
            Self::BrowserLike => "browser",
            Self::WorkerLike => "worker",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for HostEnvironment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
