//! Declarative value encodings used by the theme document
//!
//! Colors arrive as `"#RRGGBB"` strings and text sizes as numeric strings
//! with a trailing two-character unit tag (`"18pt"`). Both resolve to
//! concrete values here; neither ever defaults on bad input.

use crate::error::{Result, ThemeError};
use retroface_paint::Color;
use serde::{Deserialize, Serialize};

/// A `"#RRGGBB"` color string from the theme document
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSpec(pub String);

impl ColorSpec {
    /// Resolve to a paint color. Fails on anything but `#` plus six hex
    /// digits - a broken theme color is a visible user-facing bug and must
    /// not silently turn into some default.
    pub fn resolve(&self) -> Result<Color> {
        let invalid = || ThemeError::InvalidColorEncoding {
            theme: String::new(),
            value: self.0.clone(),
        };

        let hex = self.0.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Color::from_hex(rgb))
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A magnitude with a two-character unit suffix, e.g. `"18pt"`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension(pub String);

impl Dimension {
    /// Strip the unit tag and parse the numeric prefix.
    pub fn resolve(&self) -> Result<f32> {
        let invalid = || ThemeError::InvalidDimension {
            theme: String::new(),
            value: self.0.clone(),
        };

        let chars = self.0.chars().count();
        if chars <= 2 {
            return Err(invalid());
        }
        let split = self
            .0
            .char_indices()
            .nth(chars - 2)
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let magnitude: f32 = self.0[..split].trim().parse().map_err(|_| invalid())?;
        if !magnitude.is_finite() {
            return Err(invalid());
        }
        Ok(magnitude)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_rrggbb() {
        let c = ColorSpec::from("#1E90FF").resolve().unwrap();
        assert_eq!(c.to_rgba8(), [0x1E, 0x90, 0xFF, 0xFF]);
    }

    #[test]
    fn rejects_missing_hash() {
        assert!(ColorSpec::from("1E90FF").resolve().is_err());
    }

    #[test]
    fn rejects_short_and_garbage_colors() {
        assert!(ColorSpec::from("#FFF").resolve().is_err());
        assert!(ColorSpec::from("#GGGGGG").resolve().is_err());
        assert!(ColorSpec::from("").resolve().is_err());
    }

    #[test]
    fn dimension_strips_two_character_unit() {
        assert_eq!(Dimension::from("18pt").resolve().unwrap(), 18.0);
        assert_eq!(Dimension::from("22.5pt").resolve().unwrap(), 22.5);
    }

    #[test]
    fn dimension_rejects_unit_only_and_garbage() {
        assert!(Dimension::from("pt").resolve().is_err());
        assert!(Dimension::from("xxpt").resolve().is_err());
        assert!(Dimension::from("").resolve().is_err());
    }
}
