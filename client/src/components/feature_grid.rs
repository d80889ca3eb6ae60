//! Feature highlight cards.

use leptos::prelude::*;

use crate::content::features;
use crate::util::icons::icon_markup;

#[component]
pub fn FeatureGrid() -> impl IntoView {
    let cards = features()
        .iter()
        .map(|feature| {
            view! {
                <article class="feature-card reveal rounded-2xl p-6 bg-white dark:bg-slate-800 shadow-sm hover:shadow-lg transition-shadow">
                    <div class=format!(
                        "feature-card__icon w-12 h-12 rounded-xl flex items-center justify-center bg-gradient-to-br {}",
                        feature.gradient,
                    )>
                        <svg
                            class="w-6 h-6 text-white"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke-width="1.5"
                            stroke="currentColor"
                            inner_html=icon_markup(feature.icon)
                        ></svg>
                    </div>
                    <h3 class="mt-4 text-lg font-semibold">{feature.title}</h3>
                    <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">{feature.description}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="features" class="features py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-12 reveal">
                    <h2 class="text-3xl md:text-4xl font-bold">"Everything you need to manage money"</h2>
                    <p class="mt-4 text-slate-600 dark:text-slate-400">
                        "Powerful tools that stay out of your way."
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">{cards}</div>
            </div>
        </section>
    }
}
