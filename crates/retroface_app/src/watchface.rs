//! Engine assembly from concrete collaborators

use crate::assets::DirAssets;
use anyhow::{Context, Result};
use retroface_config::FilePreferences;
use retroface_face::host::SystemCalendar;
use retroface_face::{AssetSource, Clock, Engine, HostRuntime, THEME_ASSET};
use retroface_theme::ThemeCatalog;
use std::path::Path;

/// Build an engine over a directory of bundled assets, applying the
/// persisted theme preference.
///
/// A preference pointing past the end of the catalog (stale after a
/// theme was removed from the bundle) falls back to the first theme with
/// a warning; a missing preference file means the first theme. Anything
/// wrong with the theme document itself stays fatal.
pub fn build_engine<H, C>(
    host: H,
    asset_dir: impl AsRef<Path>,
    prefs: &FilePreferences,
    clock: C,
) -> Result<Engine<H>>
where
    H: HostRuntime,
    C: Clock + 'static,
{
    let assets = DirAssets::new(asset_dir.as_ref());
    let requested = prefs
        .load_or_default()
        .context("reading theme preference")?
        .theme_index;

    // Peek at the catalog to clamp a stale preference before the engine
    // treats it as a fail-fast selection error.
    let document = assets
        .open(THEME_ASSET)
        .context("reading bundled theme document")?;
    let catalog = ThemeCatalog::load(&document).context("loading bundled theme document")?;
    let theme_index = if requested < catalog.len() {
        requested
    } else {
        tracing::warn!(
            requested,
            len = catalog.len(),
            "stale theme preference, falling back to first theme"
        );
        0
    };

    Engine::new(
        host,
        Box::new(assets),
        Box::new(clock),
        Box::new(SystemCalendar),
        theme_index,
    )
    .context("initializing watch face engine")
}
