//! Onboarding steps reached right after authentication.
//!
//! Role selection and phone verification are driven by backend flows this
//! client does not own; these pages are the signed-in landing spots for them.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::auth::AuthContext;

/// `/select-role`, shown to signed-in users without a recognized role.
#[component]
pub fn SelectRolePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let name = move || auth.current_user().map(|u| u.name).unwrap_or_default();

    view! {
        <main class="onboarding-page">
            <h1>"Choose your role"</h1>
            <p>"Signed in as " <strong>{name}</strong></p>
            <p class="onboarding-page__note">
                "Your account does not have a role yet. Contact the SmartPlate team to finish setting it up."
            </p>
            <A href=AppRoute::Landing.path()>"Back to home"</A>
        </main>
    }
}

/// `/verify-phone`, the first stop after sign-up.
#[component]
pub fn VerifyPhonePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let dashboard = move || AppRoute::dashboard_for(auth.current_user().and_then(|u| u.role)).path().to_owned();

    view! {
        <main class="onboarding-page">
            <h1>"Verify your phone"</h1>
            <p class="onboarding-page__note">
                "We will text you a code so NGOs and volunteers can reach you about pickups."
            </p>
            <A href=dashboard>"Skip for now"</A>
        </main>
    }
}
