use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::config::{DF, PERSISTENCE};

/// The one value that outlives a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemePreference {
    dark_mode: bool,
}

impl ThemePreference {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Missing or unreadable values fall back to light.
    pub fn load(storage: Option<&dyn Storage>) -> Self {
        let pref = storage
            .and_then(|s| eframe::get_value::<ThemePreference>(s, PERSISTENCE.app.theme_key))
            .unwrap_or_default();
        if DF.log_theme {
            log::info!("Theme loaded: dark_mode = {}", pref.dark_mode);
        }
        pref
    }

    pub fn store(&self, storage: &mut dyn Storage) {
        eframe::set_value(storage, PERSISTENCE.app.theme_key, self);
        if DF.log_theme {
            log::info!("💾 Theme stored: dark_mode = {}", self.dark_mode);
        }
    }

    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn defaults_to_light_without_storage() {
        assert!(!ThemePreference::load(None).is_dark());
        let empty = MemoryStorage::default();
        assert!(!ThemePreference::load(Some(&empty)).is_dark());
    }

    #[test]
    fn toggled_choice_survives_a_reload() {
        let mut storage = MemoryStorage::default();
        let mut pref = ThemePreference::load(Some(&storage));
        pref.toggle();
        pref.store(&mut storage);

        assert!(storage.values.contains_key(PERSISTENCE.app.theme_key));
        assert!(ThemePreference::load(Some(&storage)).is_dark());

        pref.toggle();
        pref.store(&mut storage);
        assert!(!ThemePreference::load(Some(&storage)).is_dark());
    }

    #[test]
    fn garbage_in_storage_falls_back_to_light() {
        let mut storage = MemoryStorage::default();
        storage.set_string(PERSISTENCE.app.theme_key, "{{not ron".to_string());
        assert!(!ThemePreference::load(Some(&storage)).is_dark());
    }
}
