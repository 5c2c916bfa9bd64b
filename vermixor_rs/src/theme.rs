//! Display themes and their persisted selection.
//!
//! The chosen theme identifier lives under a single storage key. Storage is a
//! trait so the browser's `localStorage` and an in-memory map can stand in for
//! each other.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default storage key for the theme identifier.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Fire,
    Ocean,
    Forest,
    Sunset,
    Royal,
}

/// HSL triplets (`"4 94% 67%"`) for the themed colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Fire,
        Theme::Ocean,
        Theme::Forest,
        Theme::Sunset,
        Theme::Royal,
    ];

    /// Identifier persisted in storage.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Fire => "fire",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
            Theme::Sunset => "sunset",
            Theme::Royal => "royal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Fire => "Fire Red",
            Theme::Ocean => "Ocean Blue",
            Theme::Forest => "Forest Green",
            Theme::Sunset => "Sunset Orange",
            Theme::Royal => "Royal Purple",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Fire => Palette {
                primary: "4 94% 67%",
                secondary: "210 100% 15%",
                accent: "217 19% 35%",
            },
            Theme::Ocean => Palette {
                primary: "200 95% 55%",
                secondary: "220 25% 25%",
                accent: "200 15% 45%",
            },
            Theme::Forest => Palette {
                primary: "140 85% 45%",
                secondary: "160 20% 20%",
                accent: "140 15% 40%",
            },
            Theme::Sunset => Palette {
                primary: "25 95% 60%",
                secondary: "260 25% 25%",
                accent: "25 15% 45%",
            },
            Theme::Royal => Palette {
                primary: "270 85% 65%",
                secondary: "240 25% 20%",
                accent: "270 15% 40%",
            },
        }
    }

    /// CSS custom properties to set on the document root.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        let Palette {
            primary,
            secondary,
            accent,
        } = self.palette();
        vec![
            ("--primary", primary.to_string()),
            ("--secondary", secondary.to_string()),
            ("--accent", accent.to_string()),
            (
                "--gradient-hero",
                format!("linear-gradient(135deg, hsl({primary}), hsl({secondary}))"),
            ),
            (
                "--gradient-subtle",
                format!("linear-gradient(180deg, hsl({primary} / 0.05), transparent)"),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write {key:?} to storage: {reason}")]
pub struct StoreError {
    pub key: String,
    pub reason: String,
}

/// Key-value storage surviving a page reload.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, used by tests and as a fallback when the browser
/// refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl ThemeStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for Rc<S> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Read/update contract for the active theme.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    key: String,
    fallback: Theme,
}

impl<S: ThemeStore> ThemeState<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, THEME_STORAGE_KEY, Theme::default())
    }

    pub fn with_key(store: S, key: impl Into<String>, fallback: Theme) -> Self {
        Self {
            store,
            key: key.into(),
            fallback,
        }
    }

    /// Stored theme, or the fallback when nothing (or garbage) is stored.
    pub fn load(&self) -> Theme {
        match self.store.read(&self.key) {
            Some(id) => Theme::parse(&id).unwrap_or_else(|| {
                tracing::warn!("unknown stored theme {id:?}, using {}", self.fallback.id());
                self.fallback
            }),
            None => self.fallback,
        }
    }

    pub fn select(&self, theme: Theme) -> Result<Theme, StoreError> {
        self.store.write(&self.key, theme.id())?;
        tracing::debug!("theme set to {}", theme.id());
        Ok(theme)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.id()), Some(theme));
        }
        assert_eq!(Theme::parse("neon"), None);
    }

    #[test]
    fn absent_key_loads_default() {
        let state = ThemeState::new(MemoryStore::default());
        assert_eq!(state.load(), Theme::Fire);
    }

    #[test]
    fn unknown_stored_value_loads_fallback() {
        let store = MemoryStore::default();
        store.write(THEME_STORAGE_KEY, "neon").expect("memory write");
        let state = ThemeState::with_key(store, THEME_STORAGE_KEY, Theme::Ocean);
        assert_eq!(state.load(), Theme::Ocean);
    }

    #[test]
    fn selection_survives_reload() {
        let state = ThemeState::new(MemoryStore::default());
        state.select(Theme::Royal).expect("memory write");

        // A reload builds fresh state over the same storage.
        let reloaded = ThemeState::new(state.into_store());
        assert_eq!(reloaded.load(), Theme::Royal);
    }

    #[test]
    fn shared_store_through_rc() {
        let store = Rc::new(MemoryStore::default());
        let first = ThemeState::new(Rc::clone(&store));
        first.select(Theme::Forest).expect("memory write");
        let second = ThemeState::new(Rc::clone(&store));
        assert_eq!(second.load(), Theme::Forest);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("forest"));
    }

    #[test]
    fn custom_key_is_respected() {
        let state = ThemeState::with_key(MemoryStore::default(), "vx-theme", Theme::Fire);
        state.select(Theme::Sunset).expect("memory write");
        let store = state.into_store();
        assert_eq!(store.read("vx-theme").as_deref(), Some("sunset"));
        assert_eq!(store.read(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn css_variables_include_gradients() {
        let vars = Theme::Fire.css_variables();
        assert_eq!(vars[0], ("--primary", "4 94% 67%".to_string()));
        assert_eq!(
            vars[3],
            (
                "--gradient-hero",
                "linear-gradient(135deg, hsl(4 94% 67%), hsl(210 100% 15%))".to_string()
            )
        );
        assert_eq!(vars.len(), 5);
    }
}
