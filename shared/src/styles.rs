//! Style blocks injected at runtime.
//!
//! The stylesheet proper lives with the markup; these cover only the
//! classes and animations the behaviors toggle.

/// Reveal, header and mobile-menu states.
pub const INTERACTION_CSS: &str = r#"
.visible {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
.header.scrolled {
    background: rgba(10, 10, 15, 0.95);
    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.3);
}
[data-theme="light"] .header.scrolled {
    background: rgba(255, 255, 255, 0.98);
    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.1);
}
.header.hidden {
    transform: translateY(-100%);
}
.header {
    transition: transform 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
}
.nav-menu.active {
    display: flex !important;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--bg-secondary);
    padding: 1rem;
    border-bottom: 1px solid var(--border-color);
}
.menu-toggle.active span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
}
.menu-toggle.active span:nth-child(2) {
    opacity: 0;
}
.menu-toggle.active span:nth-child(3) {
    transform: rotate(-45deg) translate(5px, -5px);
}
"#;

/// Reading progress bar; only injected on article pages.
pub const PROGRESS_CSS: &str = r#"
.reading-progress {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 3px;
    background: var(--bg-tertiary);
    z-index: 9999;
}
.progress-fill {
    height: 100%;
    background: var(--accent-gradient);
    width: 0%;
    transition: width 0.1s ease;
}
"#;

/// Toast enter/leave keyframes.
pub const TOAST_KEYFRAMES_CSS: &str = r#"
@keyframes toastIn {
    from { opacity: 0; transform: translateX(-50%) translateY(20px); }
    to { opacity: 1; transform: translateX(-50%) translateY(0); }
}
@keyframes toastOut {
    from { opacity: 1; transform: translateX(-50%) translateY(0); }
    to { opacity: 0; transform: translateX(-50%) translateY(20px); }
}
"#;

/// Inline style of a freshly shown toast.
pub const TOAST_INLINE_CSS: &str = "position: fixed; bottom: 2rem; left: 50%; \
     transform: translateX(-50%); background: var(--accent-primary); color: white; \
     padding: 0.75rem 1.5rem; border-radius: 8px; font-weight: 500; z-index: 9999; \
     animation: toastIn 0.3s ease;";

/// Animation applied when a toast starts leaving.
pub const TOAST_OUT_ANIMATION: &str = "toastOut 0.3s ease forwards";

/// Markup inside the progress bar container.
pub const PROGRESS_BAR_MARKUP: &str = r#"<div class="progress-fill"></div>"#;
