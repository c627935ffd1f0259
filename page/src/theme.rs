//! Light/dark theme preference.
//!
//! The applied theme is written to the `data-theme` attribute on `<html>`,
//! which the stylesheet keys off. A stored preference always wins over the
//! system `prefers-color-scheme` signal; with nothing stored the page starts
//! dark.
//!
//! TRADE-OFFS
//! ==========
//! `init` shows the preference without persisting it so the system listener
//! stays live until something is actually stored. Any `apply` (toggle or
//! system change) persists, after which system changes are ignored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::consts::THEME_ATTRIBUTE;
use crate::effect::{Effect, Target};

/// Color scheme applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Attribute/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Theme matching a `prefers-color-scheme: dark` media query result.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Key-value storage for the preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store, used when `localStorage` is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Owns the applied theme and its persistence.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Create a manager reading `key` from `store`; the current theme starts
    /// at the stored preference.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = read_preference(&store, &key);
        Self { store, key, current }
    }

    /// Stored preference, or [`Theme::Dark`] if nothing valid is stored.
    #[must_use]
    pub fn preference(&self) -> Theme {
        read_preference(&self.store, &self.key)
    }

    /// Theme most recently applied to the page.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether any value has been written under the key.
    #[must_use]
    pub fn has_stored_choice(&self) -> bool {
        self.store.load(&self.key).is_some()
    }

    /// Show the stored preference without writing it back.
    pub fn init(&mut self) -> Vec<Effect> {
        self.current = self.preference();
        vec![theme_attribute(self.current)]
    }

    /// Apply `theme` to the page and persist it.
    pub fn apply(&mut self, theme: Theme) -> Vec<Effect> {
        self.current = theme;
        self.store.save(&self.key, theme.as_str());
        vec![theme_attribute(theme)]
    }

    /// Flip the applied theme.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.apply(self.current.flipped())
    }

    /// Follow a system color-scheme change unless a choice is already stored.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Vec<Effect> {
        if self.has_stored_choice() {
            return Vec::new();
        }
        self.apply(Theme::from_prefers_dark(prefers_dark))
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn read_preference<S: PreferenceStore>(store: &S, key: &str) -> Theme {
    match store.load(key).map(|raw| raw.parse::<Theme>()) {
        Some(Ok(theme)) => theme,
        Some(Err(_)) | None => Theme::default(),
    }
}

fn theme_attribute(theme: Theme) -> Effect {
    Effect::SetAttribute(Target::Root, THEME_ATTRIBUTE, theme.as_str().to_owned())
}
