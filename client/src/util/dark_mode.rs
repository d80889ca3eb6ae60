//! Dark mode preference resolution and application.
//!
//! Reads the user's preference from `localStorage` and mirrors it onto the
//! `<html>` element as the `dark` class. Applying a theme also writes it back
//! to `localStorage`, so the stored value always tracks what is on screen.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; non-interactive
//! platforms (SSR) no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::platform::Platform;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active.
pub const ROOT_CLASS: &str = "dark";

/// The two persisted theme values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Resolve the dark mode preference.
///
/// A stored `"dark"` wins; any other non-empty stored value means light. With
/// nothing (or an empty string) stored, the ambient `prefers-color-scheme`
/// decides. Non-interactive
/// platforms always resolve to light.
pub fn read_preference(platform: &dyn Platform) -> bool {
    if !platform.is_interactive() {
        return false;
    }
    match platform.storage_get(STORAGE_KEY) {
        Some(saved) if !saved.is_empty() => saved == Theme::Dark.as_str(),
        _ => platform.prefers_dark_scheme(),
    }
}

/// Mirror `enabled` onto the document root and persist it.
pub fn apply(platform: &dyn Platform, enabled: bool) {
    if !platform.is_interactive() {
        return;
    }
    let theme = Theme::from_dark(enabled);
    platform.set_root_class(ROOT_CLASS, theme.is_dark());
    platform.storage_set(STORAGE_KEY, theme.as_str());
}

/// Toggle dark mode, apply it, and return the new value.
pub fn toggle(platform: &dyn Platform, current: bool) -> bool {
    let next = !current;
    apply(platform, next);
    next
}
