//! Mobile menu and in-page anchors.

use crate::{config::MENU_ACTIVE_CLASS, surface::ClassTarget};

/// Flip the mobile menu and its toggle button together. Returns whether
/// the menu is now open.
pub fn toggle_menu(menu: &impl ClassTarget, button: &impl ClassTarget) -> bool {
    let open = menu.toggle_class(MENU_ACTIVE_CLASS);
    button.toggle_class(MENU_ACTIVE_CLASS);
    open
}

/// What a click on an `a[href^="#"]` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Bare `#`: leave the browser default alone.
    Default,
    /// Suppress the jump and smooth-scroll to the element matching this
    /// selector, if any.
    ScrollTo(String),
}

/// Decide how to handle an in-page link.
pub fn anchor_action(href: &str) -> AnchorAction {
    if href == "#" {
        AnchorAction::Default
    } else {
        AnchorAction::ScrollTo(href.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Toggle(Cell<bool>);

    impl ClassTarget for Toggle {
        fn add_class(&self, _class: &str) {
            self.0.set(true);
        }

        fn remove_class(&self, _class: &str) {
            self.0.set(false);
        }

        fn has_class(&self, _class: &str) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn menu_and_button_move_together() {
        let menu = Toggle::default();
        let button = Toggle::default();

        assert!(toggle_menu(&menu, &button));
        assert!(menu.0.get() && button.0.get());

        assert!(!toggle_menu(&menu, &button));
        assert!(!menu.0.get() && !button.0.get());
    }

    #[test]
    fn bare_hash_keeps_default() {
        assert_eq!(anchor_action("#"), AnchorAction::Default);
        assert_eq!(anchor_action("#gundem"), AnchorAction::ScrollTo("#gundem".to_string()));
    }
}
