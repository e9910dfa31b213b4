//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::auth::AuthContext;

/// Landing page: pitch plus a call to action that adapts to the session.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let cta = move || {
        let state = auth.state();
        if state.session.is_authenticated() {
            let target = AppRoute::dashboard_for(state.session.role()).path();
            view! { <A href=target attr:class="landing-cta">"Go to your dashboard"</A> }.into_any()
        } else {
            view! { <A href=AppRoute::Auth.path() attr:class="landing-cta">"Get started"</A> }.into_any()
        }
    };

    view! {
        <main class="landing-page">
            <header class="landing-header">
                <span class="landing-header__logo">"SP"</span>
                <span class="landing-header__name">"SmartPlate"</span>
            </header>
            <section class="landing-hero">
                <h1>"Zero Hunger, Zero Waste"</h1>
                <p>"Connecting NGOs, donors, and volunteers to reduce food waste."</p>
                {cta}
            </section>
            <section class="landing-roles">
                <article>
                    <h3>"Donors"</h3>
                    <p>"List surplus food from kitchens, events, and stores."</p>
                </article>
                <article>
                    <h3>"NGOs"</h3>
                    <p>"Claim donations for the communities you serve."</p>
                </article>
                <article>
                    <h3>"Volunteers"</h3>
                    <p>"Pick up and deliver food where it is needed."</p>
                </article>
            </section>
        </main>
    }
}
