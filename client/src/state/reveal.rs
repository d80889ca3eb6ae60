//! One-shot reveal bookkeeping for scroll-triggered section animations.
//!
//! DESIGN
//! ======
//! A key moves `unseen -> observed -> revealed` and never back. Once revealed
//! it is dropped from the observed set and `observe` refuses it, so the
//! browser observer is detached exactly once per element.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

/// Minimum visible fraction that counts as entering the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Selector marking elements that animate in.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "animate-slide-up";

/// Tracker key for the `index`-th matched element in document order.
///
/// Keys come only from position, never from element ids, so two elements can
/// never share one.
pub fn element_key(index: u32) -> String {
    index.to_string()
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns `false` if it is already watched or
    /// already revealed.
    pub fn observe(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.revealed.contains(&key) {
            return false;
        }
        self.observed.insert(key)
    }

    /// Feed one intersection sample. Returns `true` exactly once per key, on
    /// the sample that reveals it; the caller should then mark the element
    /// and stop observing it.
    pub fn record(&mut self, key: &str, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < REVEAL_THRESHOLD {
            return false;
        }
        if !self.observed.remove(key) {
            return false;
        }
        self.revealed.insert(key.to_owned());
        true
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn is_observed(&self, key: &str) -> bool {
        self.observed.contains(key)
    }

    /// Keys still waiting to enter the viewport.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}
