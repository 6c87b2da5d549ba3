//! The watch-face engine
//!
//! Owns the theme catalog, derived styles, cached geometry, display-mode
//! state, and the redraw timer; exposes one method per host callback.
//! The host adapter forwards its framework events here and renders the
//! returned directive lists.

use crate::error::{FaceError, Result};
use crate::fonts::FontStore;
use crate::frame::render_frame;
use crate::geometry::RenderGeometry;
use crate::host::{AssetSource, Calendar, Clock, HostRuntime, TickToken};
use crate::mode::DisplayMode;
use crate::scheduler::RedrawScheduler;
use crate::style::{FaceStyles, ALT_BACKGROUND};
use retroface_paint::{Color, Frame};
use retroface_theme::ThemeCatalog;

/// Logical name of the bundled theme document.
pub const THEME_ASSET: &str = "themes.json";

/// The render core behind the host's watch-face runtime.
///
/// Single-threaded: every method runs on the host's UI thread, so no two
/// redraws are ever in flight concurrently.
pub struct Engine<H: HostRuntime> {
    host: H,
    clock: Box<dyn Clock>,
    calendar: Box<dyn Calendar>,
    fonts: FontStore,
    catalog: ThemeCatalog,
    theme_index: usize,
    styles: FaceStyles,
    geometry: Option<RenderGeometry>,
    mode: DisplayMode,
    visible: bool,
    low_bit_ambient: bool,
    tap_count: u64,
    scheduler: RedrawScheduler,
}

impl<H: HostRuntime> Engine<H> {
    /// Create the engine at face activation.
    ///
    /// Reads and validates the bundled theme document synchronously -
    /// this happens before first paint and the asset is small. A missing
    /// or malformed document is fatal: there is no face without a theme.
    pub fn new(
        host: H,
        assets: Box<dyn AssetSource>,
        clock: Box<dyn Clock>,
        calendar: Box<dyn Calendar>,
        initial_theme: usize,
    ) -> Result<Self> {
        let document = assets.open(THEME_ASSET)?;
        let catalog = ThemeCatalog::load(&document)?;
        let mut fonts = FontStore::new(assets);
        let theme = catalog.select(initial_theme)?.clone();
        let styles = FaceStyles::derive(&theme, &mut fonts)?;

        tracing::info!(theme = %theme.name, "engine created");

        Ok(Self {
            host,
            clock,
            calendar,
            fonts,
            catalog,
            theme_index: initial_theme,
            styles,
            geometry: None,
            mode: DisplayMode::Interactive,
            visible: false,
            low_bit_ambient: false,
            tap_count: 0,
            scheduler: RedrawScheduler::new(),
        })
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn styles(&self) -> &FaceStyles {
        &self.styles
    }

    pub fn geometry(&self) -> Option<&RenderGeometry> {
        self.geometry.as_ref()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_timer_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Switch the active theme and re-derive all styles.
    pub fn set_theme(&mut self, index: usize) -> Result<()> {
        let theme = self.catalog.select(index)?.clone();
        self.styles = FaceStyles::derive(&theme, &mut self.fonts)?;
        self.theme_index = index;
        self.apply_antialias();
        tracing::info!(theme = %theme.name, index, "theme changed");
        self.host.invalidate();
        Ok(())
    }

    /// Surface attached or resized: recompute band geometry.
    ///
    /// Geometry is cached here and reused every frame; it must not be
    /// recomputed per repaint.
    pub fn on_surface_resized(&mut self, width_px: u32, height_px: u32) {
        self.geometry = Some(RenderGeometry::derive(width_px, height_px));
    }

    pub fn on_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;
        // The clock is re-read on every frame, so time (and any timezone
        // change while hidden) is fresh on the next paint.
        self.update_timer();
    }

    pub fn on_ambient_mode_changed(&mut self, ambient: bool) {
        let mode = DisplayMode::from_ambient(ambient);
        if self.mode != mode {
            self.mode = mode;
            self.apply_antialias();
            self.host.invalidate();
        }
        self.update_timer();
    }

    /// Host reported device capabilities.
    pub fn on_properties_changed(&mut self, low_bit_ambient: bool) {
        self.low_bit_ambient = low_bit_ambient;
        self.apply_antialias();
    }

    /// Host's once-a-minute tick (delivered even in ambient mode).
    pub fn on_time_tick(&mut self) {
        self.host.invalidate();
    }

    /// A completed tap toggles the background color by tap-count parity.
    pub fn on_tap_released(&mut self, x: u32, y: u32, _event_time_ms: i64) {
        self.tap_count = self.tap_count.wrapping_add(1);
        tracing::debug!(x, y, tap_count = self.tap_count, "tap released");
        self.host.invalidate();
    }

    /// A scheduled timer callback fired.
    ///
    /// Firings for tokens the scheduler no longer owns are dropped: they
    /// were cancelled after the host had already queued them.
    pub fn on_timer_fired(&mut self, token: TickToken) {
        if !self.scheduler.owns(token) {
            tracing::trace!(?token, "ignoring stale timer firing");
            return;
        }
        self.scheduler.clear();
        self.host.invalidate();
        if self.should_tick() {
            self.scheduler.arm(&mut self.host, self.clock.epoch_millis());
        }
    }

    /// Face torn down: the timer must not outlive the render target.
    pub fn on_destroy(&mut self) {
        self.scheduler.disarm(&mut self.host);
    }

    /// Build the directive list for the current instant.
    pub fn render(&self) -> Result<Frame> {
        let geometry = self.geometry.as_ref().ok_or(FaceError::SurfaceNotReady)?;
        Ok(render_frame(
            self.clock.now(),
            &*self.calendar,
            &self.styles,
            geometry,
            self.mode,
            self.current_background(),
        ))
    }

    fn current_background(&self) -> Color {
        if self.tap_count % 2 == 1 {
            ALT_BACKGROUND
        } else {
            self.styles.background
        }
    }

    fn should_tick(&self) -> bool {
        self.visible && !self.mode.is_ambient()
    }

    /// Start or stop the redraw timer to match visibility and mode.
    /// Starting triggers one immediate redraw so the face catches up.
    fn update_timer(&mut self) {
        self.scheduler.disarm(&mut self.host);
        if self.should_tick() {
            self.host.invalidate();
            self.scheduler.arm(&mut self.host, self.clock.epoch_millis());
        }
    }

    /// Anti-aliasing mirrors ambient state on low-bit-ambient devices and
    /// stays enabled everywhere else.
    fn apply_antialias(&mut self) {
        let enabled = !(self.low_bit_ambient && self.mode.is_ambient());
        self.styles.set_antialias(enabled);
    }
}
