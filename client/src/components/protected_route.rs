//! Route wrapper that renders its children only for permitted users.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthContext;
use crate::util::guard::{self, GuardDecision};

/// Gate `children` behind the session.
///
/// `roles` empty means any signed-in user. Children mount only while the
/// decision is `Allow`; any other decision unmounts them before the redirect
/// runs, so a mismatched page is never shown, even for a frame.
#[component]
pub fn ProtectedRoute(#[prop(optional)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| auth.with_state(|state| guard::decide(state, &roles)));
    guard::install_guard_redirect(decision, navigate);

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
