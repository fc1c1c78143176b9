//! Light/dark theme preference with pluggable persistence.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::contract::theme::STORAGE_KEY;
use crate::options::option_traits;
use crate::OptionToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Explicit appearance choice.
pub enum ThemePreference {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

impl ThemePreference {
    /// Maps a system dark-mode flag to a preference.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the opposite appearance.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl OptionToken for ThemePreference {
    const OPTION: &'static str = "theme";
    const ALL: &'static [Self] = &[Self::Light, Self::Dark];

    fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

option_traits!(ThemePreference);

/// Synchronous key/value persistence for the theme choice.
pub trait ThemeStore {
    /// Loads the raw value stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, String>;

    /// Stores `value` under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory theme store.
pub struct MemoryThemeStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of [`ThemeController::toggle`].
pub struct ThemeToggled {
    /// Appearance after the toggle.
    pub preference: ThemePreference,
    /// Result of persisting `preference`.
    pub saved: Result<(), String>,
}

#[derive(Debug, Clone, Copy, Default)]
/// Resolves and flips the theme against a [`ThemeStore`].
pub struct ThemeController<S> {
    store: S,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Explicit stored preference. Unreadable or unrecognized values count as unset.
    pub fn stored(&self) -> Option<ThemePreference> {
        self.store
            .load(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse().ok())
    }

    /// Appearance in effect: the stored choice, else the system preference.
    pub fn effective(&self, system_prefers_dark: bool) -> ThemePreference {
        self.stored()
            .unwrap_or_else(|| ThemePreference::from_dark(system_prefers_dark))
    }

    /// Flips the effective appearance and persists it as an explicit choice.
    ///
    /// The flipped preference is returned even when persisting fails; `saved` carries the store
    /// error so callers can still apply the choice for the current page.
    pub fn toggle(&self, system_prefers_dark: bool) -> ThemeToggled {
        let preference = self.effective(system_prefers_dark).toggled();
        ThemeToggled {
            preference,
            saved: self.persist(preference),
        }
    }

    /// Stores `preference` as the explicit choice.
    ///
    /// # Errors
    ///
    /// Returns the store error when persisting fails.
    pub fn persist(&self, preference: ThemePreference) -> Result<(), String> {
        self.store.save(STORAGE_KEY, preference.token())
    }

    /// Class for the document root, present only when a choice is stored.
    pub fn root_class(&self) -> Option<&'static str> {
        self.stored().map(ThemePreference::token)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unset_store_follows_system_preference() {
        let controller = ThemeController::new(MemoryThemeStore::default());
        assert_eq!(controller.stored(), None);
        assert_eq!(controller.effective(true), ThemePreference::Dark);
        assert_eq!(controller.effective(false), ThemePreference::Light);
        assert_eq!(controller.root_class(), None);
    }

    #[test]
    fn toggle_persists_the_flipped_choice() {
        let store = MemoryThemeStore::default();
        let controller = ThemeController::new(store.clone());
        assert_eq!(
            controller.toggle(false),
            ThemeToggled {
                preference: ThemePreference::Dark,
                saved: Ok(()),
            }
        );
        assert_eq!(store.load("theme"), Ok(Some("dark".to_string())));
        assert_eq!(controller.root_class(), Some("dark"));
    }

    #[test]
    fn two_toggles_restore_appearance_and_keep_a_stored_value() {
        for system_dark in [false, true] {
            let controller = ThemeController::new(MemoryThemeStore::default());
            let before = controller.effective(system_dark);
            controller.toggle(system_dark).saved.expect("first toggle");
            controller.toggle(system_dark).saved.expect("second toggle");
            assert_eq!(controller.effective(system_dark), before);
            assert_eq!(controller.stored(), Some(before));
        }
    }

    #[test]
    fn unrecognized_stored_value_counts_as_unset() {
        let store = MemoryThemeStore::default();
        store.save("theme", "sepia").expect("save");
        let controller = ThemeController::new(store);
        assert_eq!(controller.stored(), None);
        assert_eq!(controller.effective(true), ThemePreference::Dark);
    }

    struct ReadOnlyStore;

    impl ThemeStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Result<Option<String>, String> {
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("storage is read-only".to_string())
        }
    }

    #[test]
    fn failed_save_still_reports_the_flipped_preference() {
        let controller = ThemeController::new(ReadOnlyStore);
        let toggled = controller.toggle(true);
        assert_eq!(toggled.preference, ThemePreference::Light);
        assert_eq!(toggled.saved, Err("storage is read-only".to_string()));
        assert_eq!(controller.stored(), None);
    }
}
