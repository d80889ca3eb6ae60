//! Headline numbers band.

use leptos::prelude::*;

use crate::content::statistics;

#[component]
pub fn StatsBand() -> impl IntoView {
    let items = statistics()
        .iter()
        .map(|stat| {
            view! {
                <div class="stat text-center">
                    <div class="stat__value text-3xl md:text-4xl font-bold">
                        {stat.prefix.unwrap_or_default()}
                        {stat.value}
                    </div>
                    <div class="stat__label mt-1 text-sm opacity-80">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="stats" class="stats py-16 px-6 bg-gradient-to-r from-blue-600 to-cyan-600 text-white">
            <div class="max-w-6xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-8 reveal">{items}</div>
        </section>
    }
}
