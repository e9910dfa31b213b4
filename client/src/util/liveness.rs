//! Mounted/unmounted flag for async work started by a view.
//!
//! Requests are never cancelled. A page clears its flag on cleanup, and the
//! task checks it after every await before touching page state.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag; clones observe the same value.
#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning view as gone. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `f` only if the view is still mounted.
    pub fn run_if_alive<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        self.is_alive().then(f)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
