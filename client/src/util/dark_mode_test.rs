use super::*;
use crate::util::test_platform::MemoryPlatform;

#[test]
fn read_preference_is_false_on_server() {
    let platform = MemoryPlatform::server()
        .with_prefers_dark(true)
        .with_stored(STORAGE_KEY, "dark");
    assert!(!read_preference(&platform));
}

#[test]
fn read_preference_uses_stored_dark() {
    let platform = MemoryPlatform::new().with_stored(STORAGE_KEY, "dark");
    assert!(read_preference(&platform));
}

#[test]
fn read_preference_stored_light_beats_ambient_dark() {
    let platform = MemoryPlatform::new()
        .with_prefers_dark(true)
        .with_stored(STORAGE_KEY, "light");
    assert!(!read_preference(&platform));
}

#[test]
fn read_preference_unknown_stored_value_is_light() {
    let platform = MemoryPlatform::new()
        .with_prefers_dark(true)
        .with_stored(STORAGE_KEY, "sepia");
    assert!(!read_preference(&platform));
}

#[test]
fn read_preference_empty_stored_value_falls_back_to_ambient_scheme() {
    let dark = MemoryPlatform::new()
        .with_prefers_dark(true)
        .with_stored(STORAGE_KEY, "");
    assert!(read_preference(&dark));

    let light = MemoryPlatform::new().with_stored(STORAGE_KEY, "");
    assert!(!read_preference(&light));
}

#[test]
fn read_preference_falls_back_to_ambient_scheme() {
    assert!(read_preference(&MemoryPlatform::new().with_prefers_dark(true)));
    assert!(!read_preference(&MemoryPlatform::new()));
}

#[test]
fn apply_sets_root_class_and_persists() {
    let platform = MemoryPlatform::new();
    apply(&platform, true);
    assert!(platform.has_root_class(ROOT_CLASS));
    assert_eq!(platform.stored(STORAGE_KEY).as_deref(), Some("dark"));

    apply(&platform, false);
    assert!(!platform.has_root_class(ROOT_CLASS));
    assert_eq!(platform.stored(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn apply_is_noop_on_server() {
    let platform = MemoryPlatform::server();
    apply(&platform, true);
    assert!(!platform.has_root_class(ROOT_CLASS));
    assert_eq!(platform.stored(STORAGE_KEY), None);
}

#[test]
fn toggle_flips_boolean_value() {
    let platform = MemoryPlatform::new();
    assert!(toggle(&platform, false));
    assert!(!toggle(&platform, true));
}

#[test]
fn theme_round_trips_through_storage_strings() {
    assert_eq!(Theme::from_dark(true).as_str(), "dark");
    assert_eq!(Theme::from_dark(false).as_str(), "light");
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
