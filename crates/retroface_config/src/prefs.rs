//! Persisted watch-face preferences

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences persisted between face activations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Catalog index of the selected theme
    #[serde(default)]
    pub theme_index: usize,
}

/// TOML-backed preference store at an explicit path.
///
/// The path comes from the host (its data directory); the store never
/// guesses a location. A single writer on the host UI thread is assumed,
/// so a plain write is sufficient.
#[derive(Clone, Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences, treating a missing file as defaults.
    ///
    /// A file that exists but fails to read or parse is surfaced - a
    /// corrupt preference should be visible, not silently reset.
    pub fn load_or_default(&self) -> Result<Preferences> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no preference file, using defaults");
            return Ok(Preferences::default());
        }
        let text = fs::read_to_string(&self.path)?;
        let prefs = toml::from_str(&text)?;
        tracing::debug!(path = %self.path.display(), ?prefs, "loaded preferences");
        Ok(prefs)
    }

    /// Write preferences, creating parent directories as needed.
    pub fn store(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(prefs)?;
        fs::write(&self.path, text)?;
        tracing::info!(path = %self.path.display(), ?prefs, "stored preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("retroface-prefs-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = FilePreferences::new(scratch_path("missing.toml"));
        assert_eq!(store.load_or_default().unwrap(), Preferences::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let store = FilePreferences::new(scratch_path("roundtrip.toml"));
        let prefs = Preferences { theme_index: 2 };
        store.store(&prefs).unwrap();
        assert_eq!(store.load_or_default().unwrap(), prefs);
    }

    #[test]
    fn corrupt_file_is_surfaced() {
        let path = scratch_path("corrupt.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "theme_index = \"not a number\"").unwrap();

        let store = FilePreferences::new(path);
        assert!(matches!(
            store.load_or_default(),
            Err(ConfigError::Parse(_))
        ));
    }
}
