//! In-memory `Platform` double for controller tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use super::platform::Platform;

/// Records every side effect the controller asks the environment for.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    non_interactive: bool,
    prefers_dark: bool,
    storage: Mutex<HashMap<String, String>>,
    root_classes: Mutex<BTreeSet<String>>,
    sections: BTreeSet<String>,
    scrolled_to: Mutex<Vec<String>>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behaves like the SSR build: nothing reachable.
    pub fn server() -> Self {
        Self { non_interactive: true, ..Self::default() }
    }

    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.lock().unwrap().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_section(mut self, id: &str) -> Self {
        self.sections.insert(id.to_owned());
        self
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.lock().unwrap().get(key).cloned()
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.lock().unwrap().contains(class)
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        self.scrolled_to.lock().unwrap().clone()
    }
}

impl Platform for MemoryPlatform {
    fn is_interactive(&self) -> bool {
        !self.non_interactive
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn storage_set(&self, key: &str, value: &str) {
        self.storage.lock().unwrap().insert(key.to_owned(), value.to_owned());
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn set_root_class(&self, class: &str, enabled: bool) {
        let mut classes = self.root_classes.lock().unwrap();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn scroll_into_view(&self, element_id: &str) -> bool {
        if !self.sections.contains(element_id) {
            return false;
        }
        self.scrolled_to.lock().unwrap().push(element_id.to_owned());
        true
    }
}
