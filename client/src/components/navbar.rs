//! Fixed header with section links, theme toggle, auth buttons and the mobile
//! menu drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header turns opaque once the page scrolls past the threshold tracked
//! in `UiState::scrolled`. Section links scroll in-page instead of routing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::content::{PRODUCT_NAME, nav_links};
use crate::state::ui::UiState;
use crate::util::platform::SharedPlatform;

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let platform = expect_context::<SharedPlatform>();
    let navigate = use_navigate();

    let header_class = move || {
        if ui.get().scrolled {
            "navbar navbar--scrolled fixed top-0 inset-x-0 z-50 bg-white/90 dark:bg-slate-900/90 backdrop-blur-md shadow-sm"
        } else {
            "navbar fixed top-0 inset-x-0 z-50 bg-transparent"
        }
    };

    let toggle_platform = platform.clone();
    let on_toggle_theme = move |_| ui.update(|s| s.toggle_dark_mode(toggle_platform.as_ref()));

    let navigate_login = navigate.clone();
    let on_login = move |_| {
        navigate_login(UiState::navigate_to_login().path(), NavigateOptions::default());
    };
    let navigate_register = navigate.clone();
    let on_register = move |_| {
        navigate_register(UiState::navigate_to_register().path(), NavigateOptions::default());
    };

    let section_links = {
        let platform = platform.clone();
        move |item_class: &'static str| {
            nav_links()
                .iter()
                .map(|link| {
                    let platform = platform.clone();
                    let section = link.section;
                    view! {
                        <a
                            href=format!("#{section}")
                            class=item_class
                            on:click=move |ev| {
                                ev.prevent_default();
                                ui.update(|s| s.smooth_scroll_to(platform.as_ref(), section));
                            }
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <header class=header_class>
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <a href="/" class="navbar__brand font-bold text-lg tracking-tight">
                    {PRODUCT_NAME}
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    {section_links("navbar__link text-sm font-medium")}
                </nav>

                <div class="flex items-center space-x-3">
                    <button
                        class="btn navbar__theme-toggle"
                        on:click=on_toggle_theme
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="btn navbar__login hidden md:inline-flex" on:click=on_login>
                        "Login"
                    </button>
                    <button class="btn btn--primary navbar__register hidden md:inline-flex" on:click=on_register>
                        "Get Started"
                    </button>
                    <button
                        class="btn navbar__menu-toggle md:hidden"
                        aria-label="Toggle menu"
                        aria-expanded=move || ui.get().mobile_menu_open.to_string()
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <nav class="navbar__drawer md:hidden flex flex-col px-6 pb-4 space-y-3">
                    {section_links("navbar__drawer-link py-2")}
                    <a
                        href="/login"
                        class="navbar__drawer-link py-2"
                        on:click=move |_| ui.update(UiState::close_mobile_menu)
                    >
                        "Login"
                    </a>
                    <a
                        href="/register"
                        class="btn btn--primary"
                        on:click=move |_| ui.update(UiState::close_mobile_menu)
                    >
                        "Get Started"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
