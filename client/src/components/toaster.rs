//! Toast stack rendered at the top of every page.

use leptos::prelude::*;

use crate::state::toast::{Toast, Toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier())>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
