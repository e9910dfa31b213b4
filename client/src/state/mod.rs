//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` persistence, `auth` reactive context,
//! `toast` notifications) so components depend on small focused models.

pub mod auth;
pub mod session;
pub mod toast;
