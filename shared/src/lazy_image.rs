//! Deferred image loading for runtimes without native `loading="lazy"`.

use crate::reveal::FireOnce;

/// An image whose real source may sit in `data-src`.
pub trait LazyImage {
    /// Value of `data-src`, if any.
    fn deferred_src(&self) -> Option<String>;

    /// Current `src`.
    fn src(&self) -> String;

    /// Replace `src`.
    fn set_src(&self, src: &str);
}

/// Source to load once the image is visible: `data-src` when non-empty,
/// the current `src` otherwise.
pub fn resolve_source(deferred: Option<&str>, current: &str) -> String {
    match deferred {
        Some(src) if !src.is_empty() => src.to_string(),
        _ => current.to_string(),
    }
}

/// Swaps in deferred sources the first time each image intersects.
#[derive(Debug, Default)]
pub struct LazyImageLoader {
    pending: FireOnce<usize>,
}

impl LazyImageLoader {
    /// Loader for images `0..count`.
    pub fn new(count: usize) -> Self {
        let mut pending = FireOnce::new();
        for index in 0..count {
            pending.watch(index);
        }
        Self {
            pending,
        }
    }

    /// Handle a notification for image `index`. Returns `true` when the
    /// source was swapped and observation of the image should stop.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool, image: &impl LazyImage) -> bool {
        if !self.pending.notify(&index, intersecting) {
            return false;
        }
        let deferred = image.deferred_src();
        let src = resolve_source(deferred.as_deref(), &image.src());
        image.set_src(&src);
        true
    }

    /// Images still waiting.
    pub fn remaining(&self) -> usize {
        self.pending.remaining()
    }
}
