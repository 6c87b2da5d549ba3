//! Paint commands - the directive list a host canvas executes

use crate::color::Color;
use crate::primitives::{Point, Rect};
use smallvec::SmallVec;

/// A paint command for the host renderer.
///
/// Commands are executed in list order; later commands paint over earlier
/// ones.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Fill the entire surface with a solid color.
    Clear { color: Color },
    /// Fill an axis-aligned rectangle.
    FillRect { rect: Rect, color: Color },
    /// Draw one run of text horizontally centered on `anchor.x` with its
    /// baseline at `anchor.y`.
    DrawText {
        text: String,
        anchor: Point,
        size: f32,
        color: Color,
        antialias: bool,
    },
}

/// One frame's worth of paint commands.
///
/// An interactive watch-face frame is seven commands; ambient is one.
pub type Frame = SmallVec<[PaintCommand; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_inlines_a_full_interactive_frame() {
        let mut frame = Frame::new();
        for _ in 0..7 {
            frame.push(PaintCommand::Clear {
                color: Color::BLACK,
            });
        }
        assert!(!frame.spilled());
    }
}
