//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate guard logic and async lifetime bookkeeping from
//! page and component code to improve reuse and testability.

pub mod guard;
pub mod liveness;
