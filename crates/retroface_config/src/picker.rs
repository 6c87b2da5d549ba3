//! Theme picker row model

use crate::error::{ConfigError, Result};
use crate::prefs::{FilePreferences, Preferences};
use retroface_theme::ThemeCatalog;

/// One row of the theme list: adapter position + display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeRow {
    pub index: usize,
    pub name: String,
}

/// List model backing the theme-selection screen.
///
/// Row order is catalog order, so an adapter position is also the
/// catalog index the render core will select.
#[derive(Clone, Debug)]
pub struct ThemePicker {
    rows: Vec<ThemeRow>,
}

impl ThemePicker {
    pub fn new(catalog: &ThemeCatalog) -> Self {
        let rows = catalog
            .themes()
            .iter()
            .enumerate()
            .map(|(index, theme)| ThemeRow {
                index,
                name: theme.name.clone(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ThemeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Persist a completed selection.
    pub fn commit(&self, index: usize, store: &FilePreferences) -> Result<()> {
        if index >= self.rows.len() {
            return Err(ConfigError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        tracing::info!(index, name = %self.rows[index].name, "theme selection committed");
        store.store(&Preferences { theme_index: index })
    }
}
