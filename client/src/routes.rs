//! Route table shared by the Leptos router and navigation checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` builds every `<Route>` from [`AppRoute`]: the path segment and
//! the role set handed to `ProtectedRoute` both come from here. The server
//! registers the same paths through `generate_route_list`, so anything not in
//! this table takes the catch-all redirect to the landing page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user, whatever their role.
    Authenticated,
    /// Signed-in users holding one of these roles.
    Roles(&'static [Role]),
}

/// Every page the client can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Auth,
    SelectRole,
    VerifyPhone,
    NgoDashboard,
    DonorDashboard,
    VolunteerDashboard,
    AdminDashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Landing,
        AppRoute::Auth,
        AppRoute::SelectRole,
        AppRoute::VerifyPhone,
        AppRoute::NgoDashboard,
        AppRoute::DonorDashboard,
        AppRoute::VolunteerDashboard,
        AppRoute::AdminDashboard,
    ];

    /// Absolute URL path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Auth => "/auth",
            Self::SelectRole => "/select-role",
            Self::VerifyPhone => "/verify-phone",
            Self::NgoDashboard => "/ngo-dashboard",
            Self::DonorDashboard => "/donor-dashboard",
            Self::VolunteerDashboard => "/volunteer-dashboard",
            Self::AdminDashboard => "/admin-dashboard",
        }
    }

    /// Path without the leading slash, as `StaticSegment` expects.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Landing | Self::Auth => Access::Public,
            Self::SelectRole | Self::VerifyPhone => Access::Authenticated,
            Self::NgoDashboard => Access::Roles(&[Role::Ngo]),
            Self::DonorDashboard => Access::Roles(&[Role::Donor]),
            Self::VolunteerDashboard => Access::Roles(&[Role::Volunteer]),
            Self::AdminDashboard => Access::Roles(&[Role::Admin]),
        }
    }

    /// Role set handed to `ProtectedRoute` (empty = any signed-in user).
    #[must_use]
    pub fn required_roles(self) -> Vec<Role> {
        match self.access() {
            Access::Roles(roles) => roles.to_vec(),
            Access::Public | Access::Authenticated => Vec::new(),
        }
    }

    /// Dashboard for a role; users without a known role pick one first.
    #[must_use]
    pub fn dashboard_for(role: Option<Role>) -> Self {
        match role {
            Some(Role::Ngo) => Self::NgoDashboard,
            Some(Role::Donor) => Self::DonorDashboard,
            Some(Role::Volunteer) => Self::VolunteerDashboard,
            Some(Role::Admin) => Self::AdminDashboard,
            None => Self::SelectRole,
        }
    }
}
