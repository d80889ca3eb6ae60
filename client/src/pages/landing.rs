//! The landing page: every section in scroll order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Served for `/` and, until real screens exist, for `/login` and
//! `/register`. Reveal animations are wired after each mount so freshly
//! rendered sections get their own observer; unmounting disconnects it.

use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::navbar::Navbar;
use crate::components::screenshot_gallery::ScreenshotGallery;
use crate::components::signup_section::SignupSection;
use crate::components::stats_band::StatsBand;
use crate::util::reveal_observer::{self, RevealObserver};

#[component]
pub fn LandingPage() -> impl IntoView {
    Effect::new(move || {
        if let Some(observer) = reveal_observer::install() {
            let observer = StoredValue::new_local(observer);
            on_cleanup(move || {
                observer.try_update_value(RevealObserver::disconnect);
            });
        }
    });

    view! {
        <div class="landing min-h-screen bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100 transition-colors">
            <Navbar/>
            <main>
                <Hero/>
                <FeatureGrid/>
                <ScreenshotGallery/>
                <HowItWorks/>
                <StatsBand/>
                <SignupSection/>
            </main>
            <Footer/>
        </div>
    }
}
