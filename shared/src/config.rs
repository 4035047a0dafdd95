//! Fixed tuning values for the page behaviors.

use std::time::Duration;

/// Key of the theme preference in the durable store.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query used when no preference has been stored.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Vertical offset (px) past which the header counts as scrolled.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Header class set while the page is scrolled past the threshold.
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";

/// Header class set while scrolling down.
pub const HEADER_HIDDEN_CLASS: &str = "hidden";

/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin of the reveal observer; pulls the bottom edge up by 50px.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Marker class added once an element has been revealed.
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

/// Class toggled on the mobile menu and its button.
pub const MENU_ACTIVE_CLASS: &str = "active";

/// How long the newsletter button shows its confirmation.
pub const NEWSLETTER_CONFIRM_DURATION: Duration = Duration::from_millis(3000);

/// Button background while the newsletter confirmation is shown.
pub const NEWSLETTER_SUCCESS_BACKGROUND: &str =
    "linear-gradient(135deg, #10b981 0%, #059669 100%)";

/// Time a toast stays fully visible.
pub const TOAST_HOLD: Duration = Duration::from_millis(2000);

/// Length of the toast fade-out before the node is removed.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

/// Window name used for share popups.
pub const SHARE_POPUP_TARGET: &str = "_blank";

/// Window features used for share popups.
pub const SHARE_POPUP_FEATURES: &str = "width=600,height=400";
