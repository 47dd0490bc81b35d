//! Light/dark theme preference

use crate::storage::KeyValueStore;
use crate::CoreResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the document root
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Theme persisted as JSON under [`ThemePreference::KEY`]
#[derive(Clone)]
pub struct ThemePreference {
    store: Arc<dyn KeyValueStore>,
}

impl ThemePreference {
    pub const KEY: &'static str = "theme";

    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when nothing valid is stored
    pub fn load(&self) -> CoreResult<Theme> {
        let theme = self
            .store
            .get(Self::KEY)?
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Ok(theme)
    }

    pub fn set(&self, theme: Theme) -> CoreResult<()> {
        self.store.set(Self::KEY, &serde_json::to_string(&theme)?)
    }

    /// Flip the stored theme and return the new one
    pub fn toggle(&self) -> CoreResult<Theme> {
        let theme = self.load()?.toggle();
        self.set(theme)?;
        Ok(theme)
    }
}
