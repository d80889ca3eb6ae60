//! `IntersectionObserver` wiring for `.reveal` sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs after the landing page mounts. Decisions are delegated to
//! `state::reveal::RevealTracker`; this module only moves DOM entries in and
//! out of it. The returned `RevealObserver` owns the observer and its
//! callback, and disconnects both when dropped, so a remounted page never
//! stacks observers. SSR and native builds compile `install` to a no-op.

#[cfg(test)]
#[path = "reveal_observer_test.rs"]
mod reveal_observer_test;

#[cfg(feature = "hydrate")]
const KEY_ATTR: &str = "data-reveal-key";

/// Live reveal observer. Disconnects on `disconnect` or drop, whichever
/// comes first.
pub struct RevealObserver {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl RevealObserver {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    pub fn disconnect(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }

    pub fn is_connected(&self) -> bool {
        self.teardown.is_some()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Observe every element matching `REVEAL_SELECTOR` and animate it in the
/// first time it becomes visible.
///
/// Returns `None` when there is nothing to observe or no browser.
pub fn install() -> Option<RevealObserver> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::{JsCast, JsValue, closure::Closure};

        use crate::state::reveal::{
            REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEALED_CLASS, RevealTracker, element_key,
        };

        let document = web_sys::window().and_then(|w| w.document())?;
        let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;

        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let mut targets = Vec::new();
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let key = element_key(i);
            let _ = el.set_attribute(KEY_ATTR, &key);
            if tracker.borrow_mut().observe(key) {
                targets.push(el);
            }
        }
        if targets.is_empty() {
            return None;
        }

        let tracker_cb = Rc::clone(&tracker);
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target.get_attribute(KEY_ATTR) else {
                        continue;
                    };
                    let revealed = tracker_cb.borrow_mut().record(
                        &key,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if revealed {
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            log::warn!("IntersectionObserver unavailable; reveal animations disabled");
            return None;
        };
        for el in &targets {
            observer.observe(el);
        }
        log::debug!("observing {} reveal sections", targets.len());

        Some(RevealObserver::new(move || {
            observer.disconnect();
            drop(callback);
            log::debug!("reveal observer disconnected");
        }))
    }

    #[cfg(not(feature = "hydrate"))]
    None
}
