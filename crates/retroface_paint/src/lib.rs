//! Retroface Paint API
//!
//! Drawing primitives for the watch face renderer:
//!
//! - **Colors**: RGBA colors with f32 components
//! - **Primitives**: points and rectangles in surface pixel space
//! - **Text paints**: color + size + font metrics + anti-aliasing flag
//! - **Paint commands**: the directive list a host canvas executes per frame
//!
//! This crate knows nothing about themes or the host runtime; it is the
//! vocabulary the render core speaks to whatever actually rasterizes.

mod color;
mod command;
mod font;
mod primitives;

pub use color::Color;
pub use command::{Frame, PaintCommand};
pub use font::{FontMetrics, ScaledMetrics, TextPaint};
pub use primitives::{Point, Rect};
