//! Theme records and the ordered catalog

use crate::encoding::{ColorSpec, Dimension};
use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};

/// Text size used when a panel omits `textSize` (observed in the older
/// document schema), in points.
pub const DEFAULT_TEXT_SIZE_PT: f32 = 24.0;

/// Styling for one of the three horizontal panels (day, time, date)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelStyle {
    pub background_color: ColorSpec,
    pub text_color: ColorSpec,
    /// Asset-relative path of the panel's font file
    pub text_font: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<Dimension>,
}

impl PanelStyle {
    /// Resolved text size in points, falling back to
    /// [`DEFAULT_TEXT_SIZE_PT`] when the document omits the field.
    pub fn text_size_pt(&self) -> Result<f32> {
        match &self.text_size {
            Some(dim) => dim.resolve(),
            None => Ok(DEFAULT_TEXT_SIZE_PT),
        }
    }

    fn validate(&self) -> Result<()> {
        self.background_color.resolve()?;
        self.text_color.resolve()?;
        self.text_size_pt()?;
        Ok(())
    }
}

/// A named bundle of colors and fonts for the whole face
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub background_color: ColorSpec,
    pub day: PanelStyle,
    pub time: PanelStyle,
    pub date: PanelStyle,
}

impl Theme {
    pub fn panels(&self) -> [&PanelStyle; 3] {
        [&self.day, &self.time, &self.date]
    }

    fn validate(&self) -> Result<()> {
        let tag = |err| in_theme(&self.name, err);
        self.background_color.resolve().map_err(tag)?;
        for panel in self.panels() {
            panel.validate().map_err(|e| in_theme(&self.name, e))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeDocument {
    themes: Vec<Theme>,
}

/// Ordered, immutable collection of themes; insertion order = file order
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Parse and validate a bundled theme document.
    ///
    /// Every color and text size in the document is resolved eagerly so a
    /// broken theme fails at face activation, not at first paint.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let doc: ThemeDocument = serde_json::from_slice(bytes)?;
        if doc.themes.is_empty() {
            return Err(ThemeError::Empty);
        }
        for theme in &doc.themes {
            theme.validate()?;
        }
        tracing::info!(count = doc.themes.len(), "loaded theme catalog");
        Ok(Self { themes: doc.themes })
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Select a theme by catalog index.
    pub fn select(&self, index: usize) -> Result<&Theme> {
        self.themes
            .get(index)
            .ok_or(ThemeError::IndexOutOfRange {
                index,
                len: self.themes.len(),
            })
    }

    /// Catalog index of the theme with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|t| t.name == name)
    }
}

fn in_theme(name: &str, err: ThemeError) -> ThemeError {
    match err {
        ThemeError::InvalidColorEncoding { value, .. } => ThemeError::InvalidColorEncoding {
            theme: name.to_owned(),
            value,
        },
        ThemeError::InvalidDimension { value, .. } => ThemeError::InvalidDimension {
            theme: name.to_owned(),
            value,
        },
        other => other,
    }
}
