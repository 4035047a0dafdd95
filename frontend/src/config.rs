//! Selectors and ids the behaviors attach to.
//!
//! They mirror the static markup; a selector that matches nothing simply
//! disables its behavior on that page.

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const CURRENT_DATE_ID: &str = "currentDate";
pub const MENU_TOGGLE_ID: &str = "menuToggle";

pub const NAV_MENU: &str = ".nav-menu";
pub const HEADER: &str = ".header";
pub const IN_PAGE_ANCHORS: &str = r##"a[href^="#"]"##;
pub const TICKER: &str = ".ticker";
pub const NEWSLETTER_FORM: &str = ".newsletter-form";
pub const NEWSLETTER_BUTTON: &str = "button";
pub const SHARE_BUTTONS: &str = ".share-btn";
pub const REVEAL_TARGETS: &str = ".news-card, .news-list-item, .sidebar-widget";
pub const ARTICLE_CONTENT: &str = ".article-content";
pub const LAZY_IMAGES: &str = r#"img[loading="lazy"]"#;
pub const SEARCH_BUTTON: &str = ".search-btn";

/// Class of the injected progress container.
pub const PROGRESS_BAR_CLASS: &str = "reading-progress";
/// Class of the fill inside it.
pub const PROGRESS_FILL: &str = ".progress-fill";
/// Class of toast nodes.
pub const TOAST_CLASS: &str = "toast";

/// Page-global functions installed on `window`.
pub const PRINT_GLOBAL: &str = "printArticle";
pub const COPY_GLOBAL: &str = "copyToClipboard";
