use super::*;
use crate::util::dark_mode::{ROOT_CLASS, STORAGE_KEY};
use crate::util::test_platform::MemoryPlatform;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_and_unscrolled() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.scrolled);
    assert!(!state.mobile_menu_open);
    assert_eq!(state.active_screenshot, 0);
    assert!(!state.signup.valid);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_uses_ambient_dark_when_nothing_stored() {
    let platform = MemoryPlatform::new().with_prefers_dark(true);
    let mut state = UiState::default();
    state.initialize(&platform);
    assert!(state.dark_mode);
    assert!(platform.has_root_class(ROOT_CLASS));
    assert_eq!(platform.stored(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn initialize_stored_light_beats_ambient_dark() {
    let platform = MemoryPlatform::new()
        .with_prefers_dark(true)
        .with_stored(STORAGE_KEY, "light");
    let mut state = UiState::default();
    state.initialize(&platform);
    assert!(!state.dark_mode);
    assert!(!platform.has_root_class(ROOT_CLASS));
}

#[test]
fn initialize_stored_dark_beats_ambient_light() {
    let platform = MemoryPlatform::new().with_stored(STORAGE_KEY, "dark");
    let mut state = UiState::default();
    state.initialize(&platform);
    assert!(state.dark_mode);
}

#[test]
fn initialize_is_noop_on_server() {
    let platform = MemoryPlatform::server().with_prefers_dark(true);
    let mut state = UiState::default();
    state.initialize(&platform);
    assert_eq!(state, UiState::default());
    assert_eq!(platform.stored(STORAGE_KEY), None);
}

// =============================================================
// on_scroll
// =============================================================

#[test]
fn on_scroll_threshold_is_exclusive() {
    let mut state = UiState::default();
    for offset in [0.0, 10.0, 49.9, 50.0] {
        state.on_scroll(offset);
        assert!(!state.scrolled, "offset {offset} should not count as scrolled");
    }
    for offset in [50.1, 51.0, 400.0] {
        state.on_scroll(offset);
        assert!(state.scrolled, "offset {offset} should count as scrolled");
    }
}

#[test]
fn on_scroll_reports_changes_only() {
    let mut state = UiState::default();
    assert!(!state.on_scroll(10.0));
    assert!(state.on_scroll(60.0));
    assert!(!state.on_scroll(70.0));
    assert!(state.on_scroll(50.0));
}

// =============================================================
// toggle_dark_mode
// =============================================================

#[test]
fn toggle_dark_mode_twice_restores_value_and_preference() {
    let platform = MemoryPlatform::new().with_stored(STORAGE_KEY, "dark");
    let mut state = UiState::default();
    state.initialize(&platform);
    assert!(state.dark_mode);

    state.toggle_dark_mode(&platform);
    assert!(!state.dark_mode);
    assert_eq!(platform.stored(STORAGE_KEY).as_deref(), Some("light"));
    assert!(!platform.has_root_class(ROOT_CLASS));

    state.toggle_dark_mode(&platform);
    assert!(state.dark_mode);
    assert_eq!(platform.stored(STORAGE_KEY).as_deref(), Some("dark"));
    assert!(platform.has_root_class(ROOT_CLASS));
}

#[test]
fn toggle_dark_mode_flips_flag_on_server_without_side_effects() {
    let platform = MemoryPlatform::server();
    let mut state = UiState::default();
    state.toggle_dark_mode(&platform);
    assert!(state.dark_mode);
    assert_eq!(platform.stored(STORAGE_KEY), None);
}

// =============================================================
// mobile menu
// =============================================================

#[test]
fn toggle_and_close_mobile_menu() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn smooth_scroll_to_scrolls_and_closes_menu() {
    let platform = MemoryPlatform::new().with_section("features");
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.smooth_scroll_to(&platform, "features");
    assert_eq!(platform.scrolled_to(), vec!["features".to_owned()]);
    assert!(!state.mobile_menu_open);
}

#[test]
fn smooth_scroll_to_missing_section_still_closes_menu() {
    let platform = MemoryPlatform::new();
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.smooth_scroll_to(&platform, "nowhere");
    assert!(platform.scrolled_to().is_empty());
    assert!(!state.mobile_menu_open);
}

#[test]
fn smooth_scroll_to_is_noop_on_server() {
    let platform = MemoryPlatform::server().with_section("features");
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.smooth_scroll_to(&platform, "features");
    assert!(platform.scrolled_to().is_empty());
    assert!(state.mobile_menu_open);
}

// =============================================================
// screenshots
// =============================================================

#[test]
fn select_screenshot_updates_active_entry() {
    let mut state = UiState::default();
    assert!(state.select_screenshot(3));
    assert_eq!(state.active_screenshot, 3);
    assert_eq!(state.active_screenshot_entry().map(|s| s.title), Some("Transactions"));
}

#[test]
fn select_screenshot_rejects_out_of_range() {
    let mut state = UiState::default();
    state.select_screenshot(5);
    assert!(!state.select_screenshot(8));
    assert!(!state.select_screenshot(usize::MAX));
    assert_eq!(state.active_screenshot, 5);
}

#[test]
fn default_active_screenshot_is_dashboard() {
    let state = UiState::default();
    assert_eq!(state.active_screenshot_entry().map(|s| s.title), Some("Analytics Dashboard"));
}

// =============================================================
// signup + navigation
// =============================================================

#[test]
fn submit_signup_with_invalid_email_does_not_navigate() {
    let mut state = UiState::default();
    state.set_signup_email("not-an-email");
    assert_eq!(state.submit_signup(), None);
    assert!(!state.signup.valid);
    assert!(state.signup.submitted);
}

#[test]
fn submit_signup_with_empty_email_does_not_navigate() {
    let mut state = UiState::default();
    assert_eq!(state.submit_signup(), None);
    assert!(!state.signup.valid);
}

#[test]
fn submit_signup_with_valid_email_navigates_to_register() {
    let mut state = UiState::default();
    state.set_signup_email("user@example.com");
    assert_eq!(state.submit_signup(), Some(Route::Register));
    assert!(state.signup.valid);
}

#[test]
fn navigation_targets() {
    assert_eq!(UiState::navigate_to_login(), Route::Login);
    assert_eq!(UiState::navigate_to_register(), Route::Register);
    assert_eq!(Route::Home.path(), "/");
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Register.path(), "/register");
}
