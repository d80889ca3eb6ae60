//! Email capture form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is submitted anywhere: a valid address just forwards the visitor
//! to the registration route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::ui::UiState;

#[component]
pub fn SignupSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut target = None;
        ui.update(|s| target = s.submit_signup());
        if let Some(route) = target {
            navigate(route.path(), NavigateOptions::default());
        }
    };

    let input_class = move || {
        if ui.get().signup.show_error() {
            "signup__input signup__input--invalid flex-1 rounded-lg px-4 py-3 border border-red-500"
        } else {
            "signup__input flex-1 rounded-lg px-4 py-3 border border-slate-300 dark:border-slate-600"
        }
    };

    view! {
        <section id="signup" class="signup py-20 px-6">
            <div class="max-w-2xl mx-auto text-center reveal">
                <h2 class="text-3xl md:text-4xl font-bold">"Start tracking today"</h2>
                <p class="mt-4 text-slate-600 dark:text-slate-400">
                    "Free forever. No credit card required."
                </p>
                <form class="signup__form mt-8 flex flex-col sm:flex-row gap-3" on:submit=on_submit novalidate>
                    <input
                        class=input_class
                        type="email"
                        name="email"
                        required
                        placeholder="you@example.com"
                        aria-invalid=move || ui.get().signup.show_error().to_string()
                        prop:value=move || ui.get().signup.email
                        on:input=move |ev| ui.update(|s| s.set_signup_email(event_target_value(&ev)))
                    />
                    <button class="btn btn--primary px-6 py-3" type="submit">
                        "Get Started"
                    </button>
                </form>
                <Show when=move || ui.get().signup.show_error()>
                    <p class="signup__error mt-2 text-sm text-red-500">
                        {move || ui.get().signup.error().map(|e| e.to_string()).unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </section>
    }
}
