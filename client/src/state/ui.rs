//! Landing page view state (theme, header, menu, gallery, signup form).
//!
//! DESIGN
//! ======
//! One plain struct held in an `RwSignal` and provided via context. Every
//! browser event maps to a `&mut self` handler; anything that needs the
//! environment takes a `&dyn Platform`, so the handlers run unchanged under
//! SSR, in the browser and in tests. Navigation is returned as a `Route`
//! for the caller to hand to the router.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::{self, Screenshot};
use crate::state::signup::{SignupForm, validate_email};
use crate::util::dark_mode;
use crate::util::platform::Platform;

/// Scroll offset (px) past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Navigable destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Placeholder until a login screen exists.
    Login,
    /// Placeholder until a registration screen exists.
    Register,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }
}

/// UI state for the landing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub dark_mode: bool,
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    /// Always a valid id into `content::screenshots()`.
    pub active_screenshot: usize,
    pub signup: SignupForm,
}

impl UiState {
    /// Resolve and apply the theme on first load. No-op outside the browser.
    pub fn initialize(&mut self, platform: &dyn Platform) {
        if !platform.is_interactive() {
            return;
        }
        self.dark_mode = dark_mode::read_preference(platform);
        log::debug!("initial theme: {}", dark_mode::Theme::from_dark(self.dark_mode).as_str());
        dark_mode::apply(platform, self.dark_mode);
    }

    /// Update the header flag from the window scroll offset. Returns whether
    /// the flag changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_dark_mode(&mut self, platform: &dyn Platform) {
        self.dark_mode = dark_mode::toggle(platform, self.dark_mode);
        log::debug!("theme toggled: {}", dark_mode::Theme::from_dark(self.dark_mode).as_str());
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Smooth-scroll to `section_id` and close the mobile menu.
    ///
    /// A missing section still closes the menu. No-op outside the browser.
    pub fn smooth_scroll_to(&mut self, platform: &dyn Platform, section_id: &str) {
        if !platform.is_interactive() {
            return;
        }
        if !platform.scroll_into_view(section_id) {
            log::debug!("no section with id {section_id:?}");
        }
        self.close_mobile_menu();
    }

    /// Make `index` the active gallery entry. Out-of-range ids are rejected
    /// and leave the selection unchanged.
    pub fn select_screenshot(&mut self, index: usize) -> bool {
        if content::screenshot(index).is_none() {
            log::warn!("ignoring screenshot selection {index}: only {} screenshots", content::screenshots().len());
            return false;
        }
        self.active_screenshot = index;
        true
    }

    pub fn active_screenshot_entry(&self) -> Option<&'static Screenshot> {
        content::screenshot(self.active_screenshot)
    }

    pub fn set_signup_email(&mut self, value: impl Into<String>) {
        self.signup.set_email(value);
    }

    /// Validate the signup form. On success returns the registration route;
    /// nothing is sent anywhere.
    pub fn submit_signup(&mut self) -> Option<Route> {
        self.signup.submitted = true;
        match validate_email(&self.signup.email) {
            Ok(email) => {
                log::info!("signup email accepted: {email}");
                self.signup.valid = true;
                Some(Self::navigate_to_register())
            }
            Err(err) => {
                log::debug!("signup rejected: {err}");
                self.signup.valid = false;
                None
            }
        }
    }

    pub fn navigate_to_login() -> Route {
        Route::Login
    }

    pub fn navigate_to_register() -> Route {
        Route::Register
    }
}
