//! Browser-facing helpers for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `platform` wraps the `window`/`document` calls the state layer needs and
//! `dark_mode` builds on it. `reveal_observer` talks to the DOM directly
//! because it only exists in the browser build.

pub mod dark_mode;
pub mod icons;
pub mod platform;
pub mod reveal_observer;

#[cfg(test)]
pub(crate) mod test_platform;
