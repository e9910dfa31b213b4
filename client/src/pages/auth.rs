//! Auth page with sign-in and sign-up tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route at `/auth`. On success it stores the session through
//! `AuthContext` and navigates to the role's dashboard (sign-in) or to phone
//! verification (sign-up). Form rules and request flows live in `auth_form`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::auth_form::{
    AuthMode, SignInForm, SignUpForm, SubmitOutcome, parse_sign_up_role, submit_sign_in, submit_sign_up,
};
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::auth::AuthContext;
use crate::state::toast::Toasts;
use crate::util::liveness::Liveness;

/// Apply a settled submit unless the page has gone away meanwhile.
///
/// Returns `false` when the outcome was discarded; nothing is written in that
/// case, not the session, a toast, or the pending navigation.
pub(crate) fn settle(
    outcome: SubmitOutcome,
    alive: &Liveness,
    auth: AuthContext,
    toasts: Toasts,
    redirect_to: RwSignal<Option<AppRoute>>,
) -> bool {
    if !alive.is_alive() {
        leptos::logging::log!("auth page gone; discarding auth response");
        return false;
    }
    match outcome {
        SubmitOutcome::Invalid(message) => toasts.error(message),
        SubmitOutcome::Failed(message) => toasts.error(message),
        SubmitOutcome::Authenticated { response, destination, notice } => {
            auth.login(response.token, response.user);
            toasts.success(notice);
            redirect_to.set(Some(destination));
        }
    }
    true
}

/// Auth page with tabbed sign-in / sign-up forms.
#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toasts = expect_context::<Toasts>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::default());
    let busy = RwSignal::new(false);
    let sign_in = RwSignal::new(SignInForm::default());
    let sign_up = RwSignal::new(SignUpForm::default());

    let alive = Liveness::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.end()
    });

    let api = HttpAuthApi::new(config.api_base_url);

    // Navigation happens in an effect so the form closures only capture
    // signals and stay `Send + Sync` for `Show`.
    let redirect_to = RwSignal::new(None::<AppRoute>);
    Effect::new(move || {
        if let Some(route) = redirect_to.get() {
            navigate(route.path(), NavigateOptions::default());
        }
    });

    let finish = {
        let alive = alive.clone();
        move |outcome: SubmitOutcome| {
            settle(outcome, &alive, auth, toasts, redirect_to);
        }
    };

    let set_busy = {
        let alive = alive.clone();
        move |value: bool| {
            alive.run_if_alive(|| busy.try_set(value));
        }
    };

    let on_sign_in = {
        let api = api.clone();
        let finish = finish.clone();
        let set_busy = set_busy.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = sign_in.get_untracked();
            let api = api.clone();
            let finish = finish.clone();
            let set_busy = set_busy.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_sign_in(&api, &form, &set_busy).await;
                finish(outcome);
            });
        }
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = sign_up.get_untracked();
        let api = api.clone();
        let finish = finish.clone();
        let set_busy = set_busy.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_sign_up(&api, &form, &set_busy).await;
            finish(outcome);
        });
    };

    let tab_class = move |tab: AuthMode| {
        if mode.get() == tab { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    view! {
        <div class="auth-page">
            <aside class="auth-hero">
                <div class="auth-hero__brand">
                    <span class="auth-hero__logo">"SP"</span>
                    <span class="auth-hero__name">"SmartPlate"</span>
                </div>
                <h1>"Zero Hunger, Zero Waste"</h1>
                <p>"Connecting NGOs, donors, and volunteers to reduce food waste."</p>
                <ul class="auth-hero__pillars">
                    <li>"Verified NGOs"</li>
                    <li>"Trusted Donors"</li>
                    <li>"Active Volunteers"</li>
                </ul>
            </aside>

            <section class="auth-card">
                <h2>"Welcome"</h2>
                <p class="auth-card__subtitle">"Sign in or create a new account"</p>

                <div class="auth-tabs">
                    <button class=move || tab_class(AuthMode::SignIn) on:click=move |_| mode.set(AuthMode::SignIn)>
                        "Sign In"
                    </button>
                    <button class=move || tab_class(AuthMode::SignUp) on:click=move |_| mode.set(AuthMode::SignUp)>
                        "Sign Up"
                    </button>
                </div>

                <Show
                    when=move || mode.get() == AuthMode::SignIn
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_sign_up.clone()>
                                <input
                                    class="auth-input"
                                    placeholder="Full Name"
                                    prop:value=move || sign_up.with(|f| f.full_name.clone())
                                    on:input=move |ev| sign_up.update(|f| f.full_name = event_target_value(&ev))
                                />
                                <input
                                    class="auth-input"
                                    type="email"
                                    placeholder="Email"
                                    prop:value=move || sign_up.with(|f| f.email.clone())
                                    on:input=move |ev| sign_up.update(|f| f.email = event_target_value(&ev))
                                />
                                <input
                                    class="auth-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || sign_up.with(|f| f.password.clone())
                                    on:input=move |ev| sign_up.update(|f| f.password = event_target_value(&ev))
                                />
                                <input
                                    class="auth-input"
                                    type="password"
                                    placeholder="Confirm Password"
                                    prop:value=move || sign_up.with(|f| f.confirm_password.clone())
                                    on:input=move |ev| sign_up.update(|f| f.confirm_password = event_target_value(&ev))
                                />
                                <select
                                    class="auth-input"
                                    prop:value=move || sign_up.with(|f| f.role.as_str())
                                    on:change=move |ev| {
                                        if let Some(role) = parse_sign_up_role(&event_target_value(&ev)) {
                                            sign_up.update(|f| f.role = role);
                                        }
                                    }
                                >
                                    {Role::SIGN_UP_OPTIONS
                                        .iter()
                                        .map(|role| {
                                            view! {
                                                <option value=role.as_str() title=role.description()>
                                                    {role.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <button class="auth-button" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_sign_in.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || sign_in.with(|f| f.email.clone())
                            on:input=move |ev| sign_in.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || sign_in.with(|f| f.password.clone())
                            on:input=move |ev| sign_in.update(|f| f.password = event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>
            </section>
        </div>
    }
}
