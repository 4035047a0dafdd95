//! Reading progress through an article body.

/// Vertical extent of the article content, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBounds {
    /// Distance from the top of the document to the content's top edge.
    pub top: f64,
    /// Content height.
    pub height: f64,
}

impl ContentBounds {
    /// Bounds from a viewport-relative rectangle top plus the current
    /// scroll offset.
    pub fn from_viewport_rect(rect_top: f64, rect_height: f64, scroll_y: f64) -> Self {
        Self {
            top: rect_top + scroll_y,
            height: rect_height,
        }
    }
}

/// Percentage of `bounds` scrolled past, in `[0, 100]`.
///
/// The bottom of the viewport is what counts: the article is complete once
/// its bottom edge comes into view.
pub fn reading_progress(scroll_y: f64, viewport_height: f64, bounds: ContentBounds) -> f64 {
    let scrolled = scroll_y - bounds.top + viewport_height;
    if bounds.height <= 0.0 {
        return if scrolled >= 0.0 { 100.0 } else { 0.0 };
    }
    (scrolled / bounds.height * 100.0).clamp(0.0, 100.0)
}

/// CSS width for the progress fill.
pub fn fill_width(percent: f64) -> String {
    format!("{percent}%")
}
