//! Execution-environment capability injected into the landing controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same component tree renders on the server (SSR) and in the browser
//! (hydrate). Everything that touches `window`/`document` goes through this
//! trait so the controller in `state::ui::UiState` never branches on the build
//! target and can be tested with an in-memory double.

use std::sync::Arc;

/// Browser services the landing page depends on.
///
/// Every method must be safe to call when no browser is present; the
/// non-interactive answer is "nothing stored, nothing preferred, nothing
/// scrolled".
pub trait Platform: Send + Sync {
    /// Whether DOM, storage and media queries are reachable.
    fn is_interactive(&self) -> bool;

    /// Read a value from `localStorage`.
    fn storage_get(&self, key: &str) -> Option<String>;

    /// Write a value to `localStorage`. Failures are swallowed.
    fn storage_set(&self, key: &str, value: &str);

    /// Whether the ambient `prefers-color-scheme` media query reports dark.
    fn prefers_dark_scheme(&self) -> bool;

    /// Add or remove `class` on the document root (`<html>`).
    fn set_root_class(&self, class: &str, enabled: bool);

    /// Smooth-scroll the element with `element_id` to the top of the
    /// viewport. Returns `false` when no such element exists.
    fn scroll_into_view(&self, element_id: &str) -> bool;
}

/// Shared handle provided through Leptos context.
pub type SharedPlatform = Arc<dyn Platform>;

/// `Platform` backed by `web-sys`.
///
/// Only the `hydrate` build talks to the browser; SSR and native test builds
/// get the non-interactive behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    /// Wrap in the shared handle used by context consumers.
    pub fn shared() -> SharedPlatform {
        Arc::new(Self)
    }
}

#[cfg(feature = "hydrate")]
impl Platform for WebPlatform {
    fn is_interactive(&self) -> bool {
        web_sys::window().is_some()
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn storage_set(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn prefers_dark_scheme(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.class_list().toggle_with_force(class, enabled);
    }

    fn scroll_into_view(&self, element_id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[cfg(not(feature = "hydrate"))]
impl Platform for WebPlatform {
    fn is_interactive(&self) -> bool {
        false
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        let _ = key;
        None
    }

    fn storage_set(&self, key: &str, value: &str) {
        let _ = (key, value);
    }

    fn prefers_dark_scheme(&self) -> bool {
        false
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let _ = (class, enabled);
    }

    fn scroll_into_view(&self, element_id: &str) -> bool {
        let _ = element_id;
        false
    }
}

/// Current vertical scroll offset of the window, `0.0` outside the browser.
pub fn window_scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
