//! Retroface Theme Catalog
//!
//! Parses the bundled `themes.json` document into an ordered catalog of
//! named themes and resolves their declarative values (hex color strings,
//! suffixed size strings) into concrete paint parameters.
//!
//! The catalog is loaded once at face activation and never mutated; the
//! face swaps between its entries wholesale. A document that fails to
//! parse or validate is a fatal initialization error - the face cannot
//! render without at least one valid theme, so nothing here degrades
//! silently.
//!
//! # Document layout
//!
//! ```json
//! {
//!   "themes": [
//!     {
//!       "name": "Marine",
//!       "backgroundColor": "#D2B48C",
//!       "day":  { "backgroundColor": "#000080", "textColor": "#FFFFFF",
//!                 "textFont": "fonts/airstream.ttf", "textSize": "20pt" },
//!       "time": { ... },
//!       "date": { ... }
//!     }
//!   ]
//! }
//! ```
//!
//! `textSize` is optional; panels without it use [`DEFAULT_TEXT_SIZE_PT`].

mod catalog;
mod encoding;
mod error;

pub use catalog::{PanelStyle, Theme, ThemeCatalog, DEFAULT_TEXT_SIZE_PT};
pub use encoding::{ColorSpec, Dimension};
pub use error::{Result, ThemeError};
