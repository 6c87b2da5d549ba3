//! Per-frame directive generation

use crate::geometry::RenderGeometry;
use crate::host::Calendar;
use crate::mode::DisplayMode;
use crate::style::FaceStyles;
use chrono::{NaiveDateTime, Timelike};
use retroface_paint::{Color, Frame, PaintCommand, Point, Rect, TextPaint};

/// Build the directive list for one frame.
///
/// Ambient mode is a single solid-black fill - no bands, no text - as a
/// power-saving simplification. Interactive mode paints, in order: full
/// background, top band, middle band, bottom band, then the weekday name,
/// `H:MM` time, and `D Month` date, each centered in its band.
///
/// `background` is passed separately from the styles so the tap toggle
/// can override the theme background without re-deriving styles.
pub fn render_frame(
    now: NaiveDateTime,
    calendar: &dyn Calendar,
    styles: &FaceStyles,
    geometry: &RenderGeometry,
    mode: DisplayMode,
    background: Color,
) -> Frame {
    let mut frame = Frame::new();

    if mode.is_ambient() {
        frame.push(PaintCommand::Clear {
            color: Color::BLACK,
        });
        return frame;
    }

    frame.push(PaintCommand::Clear { color: background });
    frame.push(PaintCommand::FillRect {
        rect: geometry.top_band(),
        color: styles.day_fill,
    });
    frame.push(PaintCommand::FillRect {
        rect: geometry.middle_band(),
        color: styles.time_fill,
    });
    frame.push(PaintCommand::FillRect {
        rect: geometry.bottom_band(),
        color: styles.date_fill,
    });

    frame.push(centered_text(
        calendar.weekday_name(now),
        &styles.day_text,
        geometry.top_band(),
    ));
    frame.push(centered_text(
        time_text(now),
        &styles.time_text,
        geometry.middle_band(),
    ));
    frame.push(centered_text(
        calendar.date_line(now),
        &styles.date_text,
        geometry.bottom_band(),
    ));

    frame
}

/// `H:MM`: 24-hour clock, no leading zero on the hour, zero-padded
/// minute. The same format is used in ambient and interactive modes.
pub fn time_text(now: NaiveDateTime) -> String {
    format!("{}:{:02}", now.hour(), now.minute())
}

/// Center a text run in a band: horizontally on the band's center,
/// vertically by the font's ascent/descent metrics rather than the raw
/// bounding box, to match native glyph baselines.
fn centered_text(text: String, paint: &TextPaint, band: Rect) -> PaintCommand {
    let center = band.center();
    let baseline = paint.scaled_metrics().centered_baseline(center.y);
    PaintCommand::DrawText {
        text,
        anchor: Point::new(center.x, baseline),
        size: paint.size,
        color: paint.color,
        antialias: paint.antialias,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn time_text_has_no_leading_hour_zero() {
        let at = NaiveDate::from_ymd_opt(2016, 5, 28)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap();
        assert_eq!(time_text(at), "9:05");
    }

    #[test]
    fn time_text_pads_minutes_only() {
        let at = NaiveDate::from_ymd_opt(2016, 5, 28)
            .unwrap()
            .and_hms_opt(23, 7, 0)
            .unwrap();
        assert_eq!(time_text(at), "23:07");
    }

    #[test]
    fn midnight_renders_as_zero_hour() {
        let at = NaiveDate::from_ymd_opt(2016, 5, 28)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(time_text(at), "0:00");
    }
}
