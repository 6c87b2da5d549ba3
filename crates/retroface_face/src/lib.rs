//! Retroface Render Core
//!
//! The watch-face engine: a single-threaded component driven entirely by
//! host-delivered callbacks that turns the active theme plus the wall
//! clock into an ordered list of paint directives.
//!
//! # Overview
//!
//! - [`RenderGeometry`]: three fixed horizontal bands derived from the
//!   surface width, recomputed only on surface-size events
//! - [`FaceStyles`]: concrete fills and text paints derived from the
//!   active [`retroface_theme::Theme`]
//! - [`render_frame`]: the per-frame directive sequence (solid black in
//!   ambient mode, background + three bands + three centered text runs in
//!   interactive mode)
//! - [`RedrawScheduler`]: the interactive redraw timer, aligned to
//!   wall-clock second boundaries
//! - [`Engine`]: owns all of the above and exposes the host event surface
//!
//! The host watch-face runtime, asset storage, wall clock, and locale
//! calendar are collaborators behind the traits in [`host`]; everything
//! host-specific stays in whatever thin adapter implements them.

mod engine;
mod error;
mod fonts;
mod frame;
mod geometry;
pub mod host;
mod mode;
mod scheduler;
mod style;

pub use engine::{Engine, THEME_ASSET};
pub use error::{AssetError, FaceError, Result};
pub use fonts::FontStore;
pub use frame::render_frame;
pub use geometry::{
    RenderGeometry, SCALE_FACTOR_MARGIN, SCALE_FACTOR_SHORT_BAND, SCALE_FACTOR_TALL_BAND,
};
pub use host::{AssetSource, Calendar, Clock, HostRuntime, TickToken};
pub use mode::DisplayMode;
pub use scheduler::{next_tick_delay, RedrawScheduler, INTERACTIVE_TICK_MS};
pub use style::{FaceStyles, ALT_BACKGROUND};
