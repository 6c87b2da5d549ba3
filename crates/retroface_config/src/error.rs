//! Configuration error types

use thiserror::Error;

/// Errors raised by the configuration surface
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Preference file could not be read or written
    #[error("Preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file exists but is not valid TOML
    #[error("Preference file malformed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preferences could not be encoded
    #[error("Preference encoding failed: {0}")]
    Encode(#[from] toml::ser::Error),

    /// A selection outside the picker's rows was committed
    #[error("Selection {index} out of range (picker has {len} rows)")]
    OutOfRange { index: usize, len: usize },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
