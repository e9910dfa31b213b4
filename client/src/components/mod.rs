//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap pages (route guarding) or overlay them (toasts) while
//! reading shared state from Leptos context providers.

pub mod protected_route;
pub mod toaster;
