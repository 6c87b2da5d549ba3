//! Font metrics and text paints
//!
//! Metrics are stored normalized to the em square so a single parse of a
//! font asset serves every text size derived from it.

use crate::color::Color;

/// Vertical font metrics normalized per em.
///
/// `ascent` and `descent` are both positive distances from the baseline
/// (up and down respectively), so a line of glyphs spans
/// `[baseline - ascent, baseline + descent]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Metrics used when a named font asset cannot be resolved.
    ///
    /// These are nominal sans-serif proportions; text rendered with them
    /// stays legible and vertically centered even without the themed font.
    pub const FALLBACK: FontMetrics = FontMetrics {
        ascent: 0.76,
        descent: 0.24,
    };

    /// Scale to a concrete pixel size.
    pub fn scaled(&self, size: f32) -> ScaledMetrics {
        ScaledMetrics {
            ascent: self.ascent * size,
            descent: self.descent * size,
        }
    }
}

/// Font metrics at a concrete text size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl ScaledMetrics {
    /// Baseline y that vertically centers a line of text on `center_y`.
    ///
    /// Centers on the ascent/descent span rather than the raw bounding
    /// box, which matches native glyph baselines.
    pub fn centered_baseline(&self, center_y: f32) -> f32 {
        center_y + (self.ascent - self.descent) / 2.0
    }
}

/// Everything needed to draw one run of themed text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: f32,
    pub metrics: FontMetrics,
    pub antialias: bool,
}

impl TextPaint {
    pub fn new(color: Color, size: f32, metrics: FontMetrics) -> Self {
        Self {
            color,
            size,
            metrics,
            antialias: true,
        }
    }

    /// Metrics scaled to this paint's text size.
    pub fn scaled_metrics(&self) -> ScaledMetrics {
        self.metrics.scaled(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_metrics_multiply_by_size() {
        let m = FontMetrics {
            ascent: 0.8,
            descent: 0.2,
        };
        let s = m.scaled(20.0);
        assert_eq!(s.ascent, 16.0);
        assert_eq!(s.descent, 4.0);
    }

    #[test]
    fn centered_baseline_sits_below_center_for_top_heavy_fonts() {
        // ascent 16, descent 4: glyph mass is mostly above the baseline,
        // so the baseline lands below the geometric center.
        let s = ScaledMetrics {
            ascent: 16.0,
            descent: 4.0,
        };
        assert_eq!(s.centered_baseline(100.0), 106.0);
    }

    #[test]
    fn symmetric_metrics_center_on_the_baseline() {
        let s = ScaledMetrics {
            ascent: 10.0,
            descent: 10.0,
        };
        assert_eq!(s.centered_baseline(50.0), 50.0);
    }
}
