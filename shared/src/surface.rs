//! Seams through which the behaviors touch the page.

use std::{cell::RefCell, collections::HashMap};

use crate::error::Result;

/// Something carrying a CSS class list, usually an element.
///
/// Methods take `&self` because DOM handles mutate through shared
/// references; implementations use interior mutability where needed.
pub trait ClassTarget {
    /// Add `class`; a no-op when already present.
    fn add_class(&self, class: &str);

    /// Remove `class`; a no-op when absent.
    fn remove_class(&self, class: &str);

    /// Whether `class` is present.
    fn has_class(&self, class: &str) -> bool;

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add or remove `class` depending on `present`.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Origin-scoped durable key/value store (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read `key`; `Ok(None)` when nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// In-memory [`PreferenceStore`], for tests and storage-less pages.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Current value of `key`, bypassing the trait.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[derive(Default)]
    struct Classes(RefCell<BTreeSet<String>>);

    impl ClassTarget for Classes {
        fn add_class(&self, class: &str) {
            self.0.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().remove(class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().contains(class)
        }
    }

    #[test]
    fn toggle_class_reports_new_state() {
        let classes = Classes::default();
        assert!(classes.toggle_class("active"));
        assert!(classes.has_class("active"));
        assert!(!classes.toggle_class("active"));
        assert!(!classes.has_class("active"));
    }

    #[test]
    fn memory_store_overwrites_existing_key() {
        let store = MemoryStore::with_entry("theme", "dark");
        store.write("theme", "light").expect("write");
        assert_eq!(store.read("theme").expect("read").as_deref(), Some("light"));
        assert_eq!(store.read("missing").expect("read"), None);
    }
}
