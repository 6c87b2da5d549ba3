//! Band geometry derived from surface dimensions
//!
//! The face is three fixed horizontal bands (day, time, date) separated
//! and surrounded by a margin. All sizes scale off the surface *width*;
//! the bottom band is anchored to the bottom edge.

use retroface_paint::Rect;

/// Margin around and between bands, as a fraction of surface width.
pub const SCALE_FACTOR_MARGIN: f32 = 0.025;

/// Height of the top and bottom bands, as a fraction of surface width.
pub const SCALE_FACTOR_SHORT_BAND: f32 = 0.2255;

/// Height of the middle (time) band, as a fraction of surface width.
pub const SCALE_FACTOR_TALL_BAND: f32 = 0.4486;

/// Cached pixel geometry for one surface size.
///
/// Derived once per surface-size event, never per frame. Derivation is a
/// pure function of the dimensions, so repeating it for the same inputs
/// is idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub margin_px: u32,
    pub short_band_height_px: u32,
    pub tall_band_height_px: u32,
}

impl RenderGeometry {
    /// Derive band geometry for a surface.
    ///
    /// Logs a warning when the three bands plus margins do not fit within
    /// the surface height - possible on squat aspect ratios, where the
    /// middle and bottom bands will overlap. The geometry is still
    /// returned unchanged; the layout contract is width-driven.
    pub fn derive(width_px: u32, height_px: u32) -> Self {
        let w = width_px as f32;
        let geometry = Self {
            width_px,
            height_px,
            margin_px: (SCALE_FACTOR_MARGIN * w).round() as u32,
            short_band_height_px: (SCALE_FACTOR_SHORT_BAND * w).round() as u32,
            tall_band_height_px: (SCALE_FACTOR_TALL_BAND * w).round() as u32,
        };

        tracing::debug!(
            width_px,
            height_px,
            margin_px = geometry.margin_px,
            short_band_height_px = geometry.short_band_height_px,
            tall_band_height_px = geometry.tall_band_height_px,
            "derived render geometry"
        );

        if !geometry.bands_fit() {
            tracing::warn!(
                width_px,
                height_px,
                "bands do not fit within surface height; middle and bottom bands may overlap"
            );
        }

        geometry
    }

    /// Whether top band, middle band, bottom band, and the four margins
    /// stacked between and around them fit within the surface height.
    pub fn bands_fit(&self) -> bool {
        let stacked =
            4 * self.margin_px + 2 * self.short_band_height_px + self.tall_band_height_px;
        stacked <= self.height_px
    }

    pub fn full_surface(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px as f32, self.height_px as f32)
    }

    fn band_width(&self) -> f32 {
        (self.width_px - 2 * self.margin_px) as f32
    }

    /// Top band: the weekday name.
    pub fn top_band(&self) -> Rect {
        let m = self.margin_px as f32;
        Rect::new(m, m, self.band_width(), self.short_band_height_px as f32)
    }

    /// Middle band: the time, stacked one margin below the top band.
    pub fn middle_band(&self) -> Rect {
        let m = self.margin_px as f32;
        Rect::new(
            m,
            2.0 * m + self.short_band_height_px as f32,
            self.band_width(),
            self.tall_band_height_px as f32,
        )
    }

    /// Bottom band: the date, anchored to the bottom edge.
    pub fn bottom_band(&self) -> Rect {
        let m = self.margin_px as f32;
        let s = self.short_band_height_px as f32;
        Rect::new(m, self.height_px as f32 - m - s, self.band_width(), s)
    }
}
