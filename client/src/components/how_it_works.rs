//! Three-step onboarding explainer.

use leptos::prelude::*;

use crate::content::steps;

#[component]
pub fn HowItWorks() -> impl IntoView {
    let items = steps()
        .iter()
        .map(|step| {
            view! {
                <li class="step reveal text-center">
                    <span class="step__number inline-flex w-12 h-12 items-center justify-center rounded-full bg-gradient-to-br from-blue-500 to-cyan-500 text-white font-bold">
                        {step.number}
                    </span>
                    <h3 class="mt-4 text-xl font-semibold">{step.title}</h3>
                    <p class="mt-2 text-slate-600 dark:text-slate-400">{step.description}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="how-it-works" class="how-it-works py-20 px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 reveal">"Get started in minutes"</h2>
                <ol class="grid md:grid-cols-3 gap-10">{items}</ol>
            </div>
        </section>
    }
}
