//! Retroface Assembly
//!
//! Wires the render core to concrete collaborators: a directory-backed
//! asset source, the persisted theme preference, and a headless host that
//! stands in for a real watch-face runtime - useful for demos, tests,
//! and driving the engine on a development machine.

mod assets;
mod headless;
mod watchface;

pub use assets::DirAssets;
pub use headless::{HeadlessHost, HeadlessSession};
pub use watchface::build_engine;
