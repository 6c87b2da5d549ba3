//! Font metric resolution from bundled assets

use crate::error::{FaceError, Result};
use crate::host::AssetSource;
use retroface_paint::FontMetrics;
use rustc_hash::FxHashMap;

/// Resolves named font assets to vertical metrics.
///
/// Metrics are cached per asset name; a face only ever references a
/// handful of fonts. A font that is missing or unparsable resolves to
/// [`FontMetrics::FALLBACK`] - a missing themed font should degrade the
/// look, not crash the face.
pub struct FontStore {
    assets: Box<dyn AssetSource>,
    cache: FxHashMap<String, FontMetrics>,
}

impl FontStore {
    pub fn new(assets: Box<dyn AssetSource>) -> Self {
        Self {
            assets,
            cache: FxHashMap::default(),
        }
    }

    /// Metrics for a named font asset, falling back to default metrics
    /// (with a warning) when the asset cannot be resolved.
    pub fn metrics(&mut self, name: &str) -> FontMetrics {
        if let Some(metrics) = self.cache.get(name) {
            return *metrics;
        }
        let metrics = match self.parse_metrics(name) {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!(font = name, %err, "falling back to default font metrics");
                FontMetrics::FALLBACK
            }
        };
        self.cache.insert(name.to_owned(), metrics);
        metrics
    }

    /// Metrics for a named font asset, surfacing resolution failures.
    pub fn try_metrics(&mut self, name: &str) -> Result<FontMetrics> {
        if let Some(metrics) = self.cache.get(name) {
            return Ok(*metrics);
        }
        let metrics = self.parse_metrics(name)?;
        self.cache.insert(name.to_owned(), metrics);
        Ok(metrics)
    }

    fn parse_metrics(&self, name: &str) -> Result<FontMetrics> {
        let bytes = self
            .assets
            .open(name)
            .map_err(|err| FaceError::FontResolution {
                name: name.to_owned(),
                reason: err.to_string(),
            })?;

        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|err| FaceError::FontResolution {
                name: name.to_owned(),
                reason: err.to_string(),
            })?;

        let upem = face.units_per_em() as f32;
        let metrics = FontMetrics {
            ascent: face.ascender() as f32 / upem,
            descent: -(face.descender() as f32) / upem,
        };
        tracing::debug!(
            font = name,
            ascent = metrics.ascent,
            descent = metrics.descent,
            "parsed font metrics"
        );
        Ok(metrics)
    }
}
