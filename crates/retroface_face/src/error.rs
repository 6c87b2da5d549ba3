//! Render core error types

use thiserror::Error;

/// Errors raised by the asset storage collaborator
#[derive(Error, Debug)]
pub enum AssetError {
    /// No asset exists under the given logical name
    #[error("Asset {0:?} not found")]
    NotFound(String),

    /// The asset exists but could not be read
    #[error("Asset {name:?} unreadable: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the render core
#[derive(Error, Debug)]
pub enum FaceError {
    /// Asset missing or unreadable - fatal at initialization
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Theme document failed to load, validate, or select
    #[error(transparent)]
    Theme(#[from] retroface_theme::ThemeError),

    /// A named font asset could not be resolved.
    ///
    /// Recoverable: style derivation falls back to default metrics
    /// instead of surfacing this; only strict resolution raises it.
    #[error("Font {name:?} could not be resolved: {reason}")]
    FontResolution { name: String, reason: String },

    /// A frame was requested before the host reported surface dimensions
    #[error("Surface dimensions not yet established")]
    SurfaceNotReady,
}

/// Result type for render core operations
pub type Result<T> = std::result::Result<T, FaceError>;
