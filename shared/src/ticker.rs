//! Breaking-news ticker.

/// Markup repeated back to back so the CSS marquee loops without a gap.
pub fn looped_markup(markup: &str) -> String {
    markup.repeat(2)
}
