//! Above-the-fold pitch with the primary calls to action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::content::screenshot;
use crate::state::ui::UiState;
use crate::util::platform::SharedPlatform;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let platform = expect_context::<SharedPlatform>();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        navigate(UiState::navigate_to_register().path(), NavigateOptions::default());
    };
    let on_explore = move |_| ui.update(|s| s.smooth_scroll_to(platform.as_ref(), "features"));

    let preview = screenshot(0).map(|shot| {
        view! {
            <img
                class="hero__preview rounded-2xl shadow-2xl border border-slate-200 dark:border-slate-700"
                src=shot.image
                alt=shot.title
            />
        }
    });

    view! {
        <section id="hero" class="hero pt-32 pb-20 px-6">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6">
                    <span class="hero__badge inline-block rounded-full px-4 py-1 text-sm">
                        "Free personal finance tracking"
                    </span>
                    <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                        "Take control of your "
                        <span class="bg-gradient-to-r from-blue-500 to-cyan-500 bg-clip-text text-transparent">
                            "money"
                        </span>
                    </h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300">
                        "Track income and expenses, plan budgets, manage accounts and never miss a bill, all from one dashboard."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <button class="btn btn--primary btn--lg" on:click=on_get_started>
                            "Get Started Free"
                        </button>
                        <button class="btn btn--ghost btn--lg" on:click=on_explore>
                            "Explore Features"
                        </button>
                    </div>
                </div>
                <div class="hero__visual">{preview}</div>
            </div>
        </section>
    }
}
