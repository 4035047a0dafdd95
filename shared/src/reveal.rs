//! Fire-once visibility tracking.
//!
//! Intersection notifications can arrive many times for the same element;
//! [`FireOnce`] turns them into a single "first seen" event per key.

use std::{collections::HashSet, hash::Hash};

use crate::{config::REVEAL_VISIBLE_CLASS, surface::ClassTarget};

/// Inline styles put on a reveal target before it is first seen.
pub const REVEAL_INITIAL_STYLES: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Set of watched keys that each fire at most once.
#[derive(Debug, Clone)]
pub struct FireOnce<K> {
    watching: HashSet<K>,
    fired: HashSet<K>,
}

impl<K> Default for FireOnce<K> {
    fn default() -> Self {
        Self {
            watching: HashSet::new(),
            fired: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FireOnce<K> {
    /// Empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `key`. Returns `false` if it is already watched or
    /// has already fired.
    pub fn watch(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.watching.insert(key)
    }

    /// Report a notification. Returns `true` exactly once per watched key,
    /// on its first intersecting notification; the key is then retired.
    pub fn notify(&mut self, key: &K, intersecting: bool) -> bool {
        if !intersecting || !self.watching.remove(key) {
            return false;
        }
        self.fired.insert(key.clone());
        true
    }

    /// Whether `key` is still waiting for its first intersection.
    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    /// Number of keys still waiting.
    pub fn remaining(&self) -> usize {
        self.watching.len()
    }
}

/// Adds the `visible` marker to cards the first time they scroll in.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    seen: FireOnce<usize>,
}

impl RevealAnimator {
    /// Animator watching elements `0..count`.
    pub fn new(count: usize) -> Self {
        let mut seen = FireOnce::new();
        for index in 0..count {
            seen.watch(index);
        }
        Self {
            seen,
        }
    }

    /// Handle a notification for element `index`. Returns `true` when the
    /// element was revealed now and should no longer be observed.
    pub fn on_intersection(
        &mut self,
        index: usize,
        intersecting: bool,
        element: &impl ClassTarget,
    ) -> bool {
        if !self.seen.notify(&index, intersecting) {
            return false;
        }
        element.add_class(REVEAL_VISIBLE_CLASS);
        tracing::trace!(index, "revealed");
        true
    }

    /// Elements not revealed yet.
    pub fn remaining(&self) -> usize {
        self.seen.remaining()
    }
}
