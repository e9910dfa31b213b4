//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each dashboard sits behind `ProtectedRoute` with its role. Donation and
//! delivery content comes from the backend and is not rendered here; the
//! shared shell shows who is signed in and offers logout. Logout only clears
//! the session; the route guard moves the user to the sign-in page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthContext;

/// Heading shown at the top of a role's dashboard.
pub(crate) fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::Donor => "Donor Dashboard",
        Role::Ngo => "NGO Dashboard",
        Role::Volunteer => "Volunteer Dashboard",
        Role::Admin => "Admin Dashboard",
    }
}

/// Greeting for the signed-in user, falling back when the name is blank.
pub(crate) fn greeting(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome, {name}"),
        None => "Welcome".to_owned(),
    }
}

/// Shared dashboard shell.
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let name = move || greeting(auth.current_user().as_ref().map(|u| u.name.as_str()));
    let email = move || auth.current_user().map(|u| u.email).unwrap_or_default();

    // The page's `ProtectedRoute` sees the cleared session and redirects.
    let on_logout = move |_| auth.logout();

    view! {
        <div class=format!("dashboard dashboard--{}", role.as_str())>
            <header class="dashboard__header">
                <div>
                    <h1>{dashboard_title(role)}</h1>
                    <p class="dashboard__greeting">{name}</p>
                    <p class="dashboard__email">{email}</p>
                </div>
                <button class="dashboard__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <section class="dashboard__body">
                <p>{role.description()}</p>
            </section>
        </div>
    }
}

#[component]
pub fn DonorDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Donor/> }
}

#[component]
pub fn NgoDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Ngo/> }
}

#[component]
pub fn VolunteerDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Volunteer/> }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <RoleDashboard role=Role::Admin/> }
}
