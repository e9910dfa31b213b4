//! Transient notification queue.
//!
//! DESIGN
//! ======
//! `ToastState` is plain data so queue rules are testable without a reactive
//! runtime; `Toasts` wraps it in a signal and handles auto-dismiss timing in
//! the browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen in the browser.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 4_000;

/// Most toasts kept at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Context handle for raising toasts from pages.
#[derive(Clone, Copy, Debug)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    /// Tracked read of the visible toasts.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.state.with(|s| s.toasts.clone())
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.state.update(|s| id = s.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                // The toaster may be gone by now; a disposed signal is a no-op.
                state.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
