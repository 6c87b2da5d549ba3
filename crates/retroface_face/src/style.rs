//! Concrete drawing styles derived from the active theme

use crate::error::Result;
use crate::fonts::FontStore;
use retroface_paint::{Color, TextPaint};
use retroface_theme::Theme;

/// Background used on odd tap counts instead of the theme background.
pub const ALT_BACKGROUND: Color = Color::rgb(0.18, 0.22, 0.45);

/// Fills and text paints for one theme, ready to draw with.
///
/// Re-derived whenever the active theme changes; the anti-aliasing flags
/// are the only part that mutates in place (on ambient-mode transitions).
#[derive(Clone, Debug, PartialEq)]
pub struct FaceStyles {
    pub background: Color,
    pub day_fill: Color,
    pub time_fill: Color,
    pub date_fill: Color,
    pub day_text: TextPaint,
    pub time_text: TextPaint,
    pub date_text: TextPaint,
}

impl FaceStyles {
    /// Resolve a theme's declarative values into paints.
    ///
    /// Colors and sizes were validated at catalog load, so failures here
    /// indicate a theme constructed outside the loader. Fonts resolve
    /// through the store's fallback path and never fail.
    pub fn derive(theme: &Theme, fonts: &mut FontStore) -> Result<Self> {
        let text_paint = |panel: &retroface_theme::PanelStyle,
                          fonts: &mut FontStore|
         -> Result<TextPaint> {
            Ok(TextPaint::new(
                panel.text_color.resolve()?,
                panel.text_size_pt()?,
                fonts.metrics(&panel.text_font),
            ))
        };

        let styles = Self {
            background: theme.background_color.resolve()?,
            day_fill: theme.day.background_color.resolve()?,
            time_fill: theme.time.background_color.resolve()?,
            date_fill: theme.date.background_color.resolve()?,
            day_text: text_paint(&theme.day, fonts)?,
            time_text: text_paint(&theme.time, fonts)?,
            date_text: text_paint(&theme.date, fonts)?,
        };

        tracing::debug!(theme = %theme.name, "derived face styles");
        Ok(styles)
    }

    /// Set the anti-aliasing flag on every text paint.
    pub fn set_antialias(&mut self, enabled: bool) {
        self.day_text.antialias = enabled;
        self.time_text.antialias = enabled;
        self.date_text.antialias = enabled;
    }

    pub fn text_paints(&self) -> [&TextPaint; 3] {
        [&self.day_text, &self.time_text, &self.date_text]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::host::AssetSource;
    use retroface_theme::ThemeCatalog;

    struct NoAssets;

    impl AssetSource for NoAssets {
        fn open(&self, name: &str) -> std::result::Result<Vec<u8>, AssetError> {
            Err(AssetError::NotFound(name.to_owned()))
        }
    }

    fn catalog() -> ThemeCatalog {
        let doc = r##"{"themes":[{
            "name": "Marine",
            "backgroundColor": "#D2B48C",
            "day":  {"backgroundColor":"#000080","textColor":"#FFFFFF","textFont":"fonts/a.ttf","textSize":"20pt"},
            "time": {"backgroundColor":"#000080","textColor":"#FFFF00","textFont":"fonts/b.ttf","textSize":"48pt"},
            "date": {"backgroundColor":"#000080","textColor":"#FFFFFF","textFont":"fonts/a.ttf"}
        }]}"##;
        ThemeCatalog::load(doc.as_bytes()).expect("load")
    }

    #[test]
    fn derives_colors_sizes_and_antialias_default() {
        let catalog = catalog();
        let mut fonts = FontStore::new(Box::new(NoAssets));
        let styles = FaceStyles::derive(catalog.select(0).unwrap(), &mut fonts).unwrap();

        assert_eq!(styles.background.to_rgba8(), [0xD2, 0xB4, 0x8C, 0xFF]);
        assert_eq!(styles.time_text.size, 48.0);
        assert_eq!(
            styles.date_text.size,
            retroface_theme::DEFAULT_TEXT_SIZE_PT
        );
        assert!(styles.text_paints().iter().all(|p| p.antialias));
    }

    #[test]
    fn set_antialias_touches_every_text_paint() {
        let catalog = catalog();
        let mut fonts = FontStore::new(Box::new(NoAssets));
        let mut styles = FaceStyles::derive(catalog.select(0).unwrap(), &mut fonts).unwrap();

        styles.set_antialias(false);
        assert!(styles.text_paints().iter().all(|p| !p.antialias));
        styles.set_antialias(true);
        assert!(styles.text_paints().iter().all(|p| p.antialias));
    }
}
