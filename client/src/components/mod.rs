//! Section components for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section. Components read and write `UiState`
//! through Leptos context and take static content from `crate::content`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod feature_grid;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod screenshot_gallery;
pub mod signup_section;
pub mod stats_band;
