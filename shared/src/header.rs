//! Show/hide-on-scroll header.

use crate::{
    config::{HEADER_HIDDEN_CLASS, HEADER_SCROLLED_CLASS, HEADER_SCROLL_THRESHOLD},
    surface::ClassTarget,
};

/// Classes the header should carry after a scroll sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderFlags {
    /// Page is past the scroll threshold.
    pub scrolled: bool,
    /// Header slides out of view.
    pub hidden: bool,
}

impl HeaderFlags {
    /// Write both flags onto `header`.
    pub fn apply(self, header: &impl ClassTarget) {
        header.set_class(HEADER_SCROLLED_CLASS, self.scrolled);
        header.set_class(HEADER_HIDDEN_CLASS, self.hidden);
    }
}

/// Header state owning the last seen vertical offset.
#[derive(Debug, Clone)]
pub struct ScrollHeader {
    last_offset: f64,
    threshold: f64,
}

impl ScrollHeader {
    /// Start tracking from the offset the page loaded at.
    pub fn new(initial_offset: f64) -> Self {
        Self::with_threshold(initial_offset, HEADER_SCROLL_THRESHOLD)
    }

    /// Same as [`ScrollHeader::new`] with a custom threshold.
    pub fn with_threshold(initial_offset: f64, threshold: f64) -> Self {
        Self {
            last_offset: initial_offset,
            threshold,
        }
    }

    /// Offset of the previous sample.
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed one scroll sample and get the resulting flags.
    ///
    /// The header only hides when moving down from a sample that was
    /// already past the threshold, so crossing it never hides the header
    /// on the same sample.
    pub fn observe(&mut self, offset: f64) -> HeaderFlags {
        let flags = if offset > self.threshold {
            HeaderFlags {
                scrolled: true,
                hidden: offset > self.last_offset && self.last_offset > self.threshold,
            }
        } else {
            HeaderFlags::default()
        };
        self.last_offset = offset;
        flags
    }
}
