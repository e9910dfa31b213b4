//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{protected_route::ProtectedRoute, toaster::Toaster};
use crate::config::ClientConfig;
use crate::pages::{
    auth::AuthPage,
    dashboard::{AdminDashboardPage, DonorDashboardPage, NgoDashboardPage, VolunteerDashboardPage},
    landing::LandingPage,
    onboarding::{SelectRolePage, VerifyPhonePage},
};
use crate::routes::AppRoute;
use crate::state::{auth::AuthContext, session::SessionStore, toast::Toasts};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, toast, and config contexts and sets up client-side
/// routing. Unknown paths redirect to the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(SessionStore::browser());
    provide_context(auth);
    provide_context(Toasts::new());
    provide_context(ClientConfig::from_build_env());

    // Effects only run in the browser, after hydration, so the server and the
    // first client render agree on the loading state.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/smartplate.css"/>
        <Title text="SmartPlate"/>

        <Router>
            <Toaster/>
            <Routes fallback=|| view! { <Redirect path=AppRoute::Landing.path()/> }>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage/>
                <Route path=StaticSegment(AppRoute::Auth.segment()) view=AuthPage/>
                <Route
                    path=StaticSegment(AppRoute::SelectRole.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::SelectRole.required_roles()>
                            <SelectRolePage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::VerifyPhone.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::VerifyPhone.required_roles()>
                            <VerifyPhonePage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::NgoDashboard.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::NgoDashboard.required_roles()>
                            <NgoDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::DonorDashboard.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::DonorDashboard.required_roles()>
                            <DonorDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::VolunteerDashboard.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::VolunteerDashboard.required_roles()>
                            <VolunteerDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::AdminDashboard.segment())
                    view=|| view! {
                        <ProtectedRoute roles=AppRoute::AdminDashboard.required_roles()>
                            <AdminDashboardPage/>
                        </ProtectedRoute>
                    }
                />
            </Routes>
        </Router>
    }
}
