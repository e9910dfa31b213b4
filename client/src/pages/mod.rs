//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding happens in the router, not in the pages.

pub mod auth;
pub(crate) mod auth_form;
pub mod dashboard;
pub mod landing;
pub mod onboarding;
