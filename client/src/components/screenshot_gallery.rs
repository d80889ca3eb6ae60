//! Product screenshot viewer with a selectable thumbnail strip.

use leptos::prelude::*;

use crate::content::screenshots;
use crate::state::ui::UiState;

#[component]
pub fn ScreenshotGallery() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active = move || ui.get().active_screenshot_entry();

    let thumbnails = screenshots()
        .iter()
        .map(|shot| {
            let id = shot.id;
            let thumb_class = move || {
                if ui.get().active_screenshot == id {
                    "gallery__thumb gallery__thumb--active ring-2 ring-blue-500 rounded-lg overflow-hidden"
                } else {
                    "gallery__thumb opacity-70 hover:opacity-100 rounded-lg overflow-hidden"
                }
            };
            view! {
                <button
                    class=thumb_class
                    title=shot.title
                    on:click=move |_| {
                        ui.update(|s| {
                            s.select_screenshot(id);
                        });
                    }
                >
                    <img src=shot.thumbnail alt=shot.title loading="lazy" class="w-full h-16 object-cover"/>
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="screenshots" class="gallery py-20 px-6 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-6xl mx-auto reveal">
                <div class="text-center mb-10">
                    <h2 class="text-3xl md:text-4xl font-bold">"See it in action"</h2>
                </div>
                <figure class="gallery__stage rounded-2xl overflow-hidden shadow-xl">
                    <img
                        class="w-full"
                        src=move || active().map(|s| s.image).unwrap_or_default()
                        alt=move || active().map(|s| s.title).unwrap_or_default()
                    />
                    <figcaption class="gallery__caption py-3 text-center font-medium">
                        {move || active().map(|s| s.title).unwrap_or_default()}
                    </figcaption>
                </figure>
                <div class="gallery__thumbs mt-6 grid grid-cols-4 md:grid-cols-8 gap-3">{thumbnails}</div>
            </div>
        </section>
    }
}
