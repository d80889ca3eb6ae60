//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::content::PRODUCT_NAME;
use crate::pages::landing::LandingPage;
use crate::state::ui::UiState;
use crate::util::platform::{SharedPlatform, WebPlatform, window_scroll_offset};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page state and platform handle, resolves the theme once on
/// load, and keeps the header scroll flag in sync with the window.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let platform: SharedPlatform = WebPlatform::shared();
    provide_context(ui);
    provide_context(platform.clone());

    // Effects never run during SSR, so this is the first-load hook.
    Effect::new(move || {
        let offset = window_scroll_offset();
        ui.update(|s| {
            s.initialize(platform.as_ref());
            s.on_scroll(offset);
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = window_scroll_offset();
            ui.maybe_update(|s| s.on_scroll(offset));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/finance-landing.css"/>
        <Title text=PRODUCT_NAME/>
        <Meta
            name="description"
            content="Track income, expenses, budgets and reminders in one place."
        />

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                // Placeholders until dedicated auth screens exist.
                <Route path=StaticSegment("login") view=LandingPage/>
                <Route path=StaticSegment("register") view=LandingPage/>
            </Routes>
        </Router>
    }
}
