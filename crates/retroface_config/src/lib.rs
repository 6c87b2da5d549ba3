//! Retroface Companion Configuration
//!
//! The configuration surface shown on the watch: a list of theme names
//! the user scrolls and taps. Committing a selection writes the chosen
//! catalog index to a preference file that the render core reads on its
//! next activation - a direct, reliable persisted-preference call rather
//! than any cross-process sync.
//!
//! - [`ThemePicker`]: row model (position + name) over a loaded catalog
//! - [`Preferences`] / [`FilePreferences`]: the TOML-persisted selection

mod error;
mod picker;
mod prefs;

pub use error::{ConfigError, Result};
pub use picker::{ThemePicker, ThemeRow};
pub use prefs::{FilePreferences, Preferences};
