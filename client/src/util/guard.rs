//! Route-guard decision and the redirect effect that applies it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior. The decision is a
//! pure function of auth state and the route's role set; `ProtectedRoute`
//! renders or redirects from it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// Where signed-out visitors are sent.
pub const SIGN_IN_PATH: &str = AppRoute::Auth.path();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore has not finished; render nothing, do not redirect.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Decide whether `state` may see a page requiring `required` roles
/// (empty = any signed-in user).
///
/// A role mismatch sends the user to their own dashboard, or to role
/// selection when their role is unknown. Those targets are always reachable
/// for that user, so redirects cannot loop.
#[must_use]
pub fn decide(state: &AuthState, required: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    if !state.session.is_authenticated() {
        return GuardDecision::Redirect(SIGN_IN_PATH);
    }
    let role = state.session.role();
    if required.is_empty() || role.is_some_and(|r| required.contains(&r)) {
        return GuardDecision::Allow;
    }
    GuardDecision::Redirect(AppRoute::dashboard_for(role).path())
}

/// Navigate away whenever `decision` turns into a redirect.
///
/// Runs on every change, so a logout elsewhere evicts the user from the page
/// they are on, not just from the next navigation.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
