use leptos::prelude::*;

use crate::content::PRODUCT_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer py-10 px-6 border-t border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-slate-500">
                <span class="font-semibold">{PRODUCT_NAME}</span>
                <nav class="flex gap-6">
                    <a href="/login">"Login"</a>
                    <a href="/register">"Register"</a>
                </nav>
                <span>"Your data, your control."</span>
            </div>
        </footer>
    }
}
