//! Theme catalog error types

use thiserror::Error;

/// Errors raised while loading or using the theme catalog
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme document is not valid JSON
    #[error("Theme document parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The theme document contains no themes
    #[error("Theme document contains no themes")]
    Empty,

    /// A color value is not a #RRGGBB string
    #[error("Invalid color encoding {value:?} in theme {theme:?}")]
    InvalidColorEncoding { theme: String, value: String },

    /// A text size is not a number followed by a two-character unit tag
    #[error("Invalid text size {value:?} in theme {theme:?}")]
    InvalidDimension { theme: String, value: String },

    /// A theme was selected by an index outside the catalog
    #[error("Theme index {index} out of range (catalog has {len} themes)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for theme catalog operations
pub type Result<T> = std::result::Result<T, ThemeError>;
