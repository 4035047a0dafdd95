//! Light/dark theme preference.
//!
//! The stored preference wins; without one the system color scheme
//! decides. A dark system preference leaves the root attribute unset so
//! the stylesheet's default (dark) palette applies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    config::THEME_STORAGE_KEY,
    error::{InteractionError, Result},
    surface::PreferenceStore,
};

/// Display mode persisted across visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Attribute/storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme a toggle switches to from the current root attribute.
    ///
    /// Only the exact attribute value `light` leads to dark. Anything
    /// else, including a missing attribute or `Light`, goes light.
    pub fn next_from_attribute(current: Option<&str>) -> Self {
        if current == Some("light") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = InteractionError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if value.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(InteractionError::UnknownTheme(value.to_string()))
        }
    }
}

/// The document root carrying the theme attribute.
pub trait ThemeRoot {
    /// Raw attribute value, if set.
    fn theme_attribute(&self) -> Option<String>;

    /// Set the attribute to `theme`.
    fn set_theme_attribute(&self, theme: Theme);
}

/// Loads and toggles the theme against a [`PreferenceStore`].
pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Controller persisting through `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// Previously stored theme. Unreadable or unrecognized values count as
    /// no preference.
    pub fn stored(&self) -> Option<Theme> {
        match self.store.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    tracing::debug!("ignoring stored theme: {err}");
                    None
                },
            },
            Ok(None) => None,
            Err(err) => {
                tracing::debug!("theme preference unreadable: {err}");
                None
            },
        }
    }

    /// Attribute value to apply at startup, `None` to leave the root
    /// untouched.
    pub fn initial_theme(&self, system_prefers_dark: bool) -> Option<Theme> {
        match self.stored() {
            Some(theme) => Some(theme),
            None if system_prefers_dark => None,
            None => Some(Theme::Light),
        }
    }

    /// Apply the startup theme to `root`; returns what was applied.
    pub fn load(&self, root: &impl ThemeRoot, system_prefers_dark: bool) -> Option<Theme> {
        let theme = self.initial_theme(system_prefers_dark);
        if let Some(theme) = theme {
            root.set_theme_attribute(theme);
        }
        theme
    }

    /// Flip the root attribute and persist the result.
    ///
    /// The attribute is applied even when persisting fails.
    pub fn toggle(&self, root: &impl ThemeRoot) -> Theme {
        let next = Theme::next_from_attribute(root.theme_attribute().as_deref());
        root.set_theme_attribute(next);
        if let Err(err) = self.store.write(THEME_STORAGE_KEY, next.as_str()) {
            tracing::debug!("theme preference not persisted: {err}");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::surface::MemoryStore;

    #[derive(Default)]
    struct Root(RefCell<Option<String>>);

    impl Root {
        fn with(value: &str) -> Self {
            Self(RefCell::new(Some(value.to_string())))
        }
    }

    impl ThemeRoot for Root {
        fn theme_attribute(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set_theme_attribute(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme.as_str().to_string());
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(InteractionError::StoreUnavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<()> {
            Err(InteractionError::StoreWrite {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(InteractionError::UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let controller = ThemeController::new(MemoryStore::with_entry("theme", "dark"));
        let root = Root::default();
        assert_eq!(controller.load(&root, false), Some(Theme::Dark));
        assert_eq!(root.theme_attribute().as_deref(), Some("dark"));
    }

    #[test]
    fn dark_system_without_preference_sets_nothing() {
        let controller = ThemeController::new(MemoryStore::new());
        let root = Root::default();
        assert_eq!(controller.load(&root, true), None);
        assert_eq!(root.theme_attribute(), None);
    }

    #[test]
    fn light_system_without_preference_sets_light() {
        let controller = ThemeController::new(MemoryStore::new());
        let root = Root::default();
        assert_eq!(controller.load(&root, false), Some(Theme::Light));
        assert_eq!(root.theme_attribute().as_deref(), Some("light"));
    }

    #[test]
    fn garbage_preference_falls_back_to_system() {
        let controller = ThemeController::new(MemoryStore::with_entry("theme", "neon"));
        assert_eq!(controller.initial_theme(false), Some(Theme::Light));
        assert_eq!(controller.initial_theme(true), None);
    }

    #[test]
    fn toggling_twice_restores_original() {
        for start in ["light", "dark"] {
            let store = MemoryStore::new();
            let controller = ThemeController::new(&store);
            let root = Root::with(start);

            controller.toggle(&root);
            assert_ne!(root.theme_attribute().as_deref(), Some(start));
            controller.toggle(&root);

            assert_eq!(root.theme_attribute().as_deref(), Some(start));
            assert_eq!(store.get("theme").as_deref(), Some(start));
        }
    }

    #[test]
    fn toggle_without_attribute_goes_light() {
        let store = MemoryStore::new();
        let controller = ThemeController::new(&store);
        let root = Root::default();
        assert_eq!(controller.toggle(&root), Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn toggle_matches_light_exactly() {
        assert_eq!(Theme::next_from_attribute(Some("light")), Theme::Dark);
        for current in ["Light", " light", "LIGHT", "dark", ""] {
            assert_eq!(Theme::next_from_attribute(Some(current)), Theme::Light, "{current:?}");
        }

        let root = Root::with("Light");
        assert_eq!(ThemeController::new(MemoryStore::new()).toggle(&root), Theme::Light);
        assert_eq!(root.theme_attribute().as_deref(), Some("light"));
    }

    #[test]
    fn failing_store_still_applies_attribute() {
        let controller = ThemeController::new(FailingStore);
        let root = Root::with("light");
        assert_eq!(controller.initial_theme(false), Some(Theme::Light));
        assert_eq!(controller.toggle(&root), Theme::Dark);
        assert_eq!(root.theme_attribute().as_deref(), Some("dark"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
    }
}
