//! User preferences: colour theme and display language
//!
//! Preferences are loaded once from a [`KeyValueStore`] into a plain [`Settings`]
//! value, which is then handed to whatever renders output. Nothing here is global.

mod language;
mod store;
mod theme;

pub use language::{Language, Translations};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, DEFAULT_SETTINGS_PATH};
pub use theme::{Palette, ThemeName};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Store key holding the theme name
pub const THEME_KEY: &str = "theme";
/// Store key holding the language code
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub theme: ThemeName,
    pub language: Language,
}

impl Settings {
    /// Re-hydrate preferences from a store
    ///
    /// Unreadable stores and unknown stored values fall back to the defaults; the
    /// problem is logged and loading carries on.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut settings = Settings::default();

        match store.get(THEME_KEY) {
            Ok(Some(key)) => match ThemeName::from_key(&key) {
                Ok(theme) => settings.theme = theme,
                Err(e) => warn!("ignoring stored theme: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("error loading theme: {}", e),
        }

        match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => match Language::from_code(&code) {
                Ok(language) => settings.language = language,
                Err(e) => warn!("ignoring stored language: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("error loading language: {}", e),
        }

        settings
    }

    /// Switch theme by key and persist it
    ///
    /// An unknown key leaves the settings untouched and returns the error. A failed
    /// write keeps the new theme in memory and returns the store error.
    pub fn change_theme(&mut self, store: &mut impl KeyValueStore, key: &str) -> Result<()> {
        let theme = ThemeName::from_key(key)?;
        self.theme = theme;
        store.set(THEME_KEY, theme.key())
    }

    /// Switch language by code and persist it
    pub fn change_language(&mut self, store: &mut impl KeyValueStore, code: &str) -> Result<()> {
        let language = Language::from_code(code)?;
        self.language = language;
        store.set(LANGUAGE_KEY, language.code())
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WealthError;

    #[test]
    fn test_empty_store_gives_defaults() {
        let settings = Settings::load(&MemoryStore::new());
        assert_eq!(settings.theme, ThemeName::Default);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_change_and_reload() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::load(&store);
        settings.change_theme(&mut store, "premium").unwrap();
        settings.change_language(&mut store, "kn").unwrap();

        let reloaded = Settings::load(&store);
        assert_eq!(reloaded, settings);
        assert_eq!(reloaded.theme, ThemeName::Premium);
        assert_eq!(reloaded.translations().theme, "ಥೀಮ್");
    }

    #[test]
    fn test_unknown_stored_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "neon").unwrap();
        store.set(LANGUAGE_KEY, "hi").unwrap();

        let settings = Settings::load(&store);
        assert_eq!(settings.theme, ThemeName::Default);
        assert_eq!(settings.language, Language::Hi);
    }

    #[test]
    fn test_unknown_change_is_rejected() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        let err = settings.change_theme(&mut store, "neon").unwrap_err();
        assert!(matches!(err, WealthError::UnknownTheme(_)));
        assert_eq!(settings.theme, ThemeName::Default);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_settings_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{{{").unwrap();

        let settings = Settings::load(&JsonFileStore::new(&path));
        assert_eq!(settings, Settings::default());
    }
}
