//! Host collaborator traits
//!
//! The render core never talks to a concrete watch-face runtime. The host
//! adapter implements these traits and forwards its framework callbacks to
//! [`crate::Engine`]; the engine calls back out through them. All delivery
//! is serialized on the host's UI thread, so implementations need no
//! internal locking.

use crate::error::AssetError;
use chrono::NaiveDateTime;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Identifies one armed timer callback.
///
/// Returned by [`HostRuntime::schedule`] and handed back on firing. The
/// engine compares tokens to drop firings it no longer owns, so a host
/// whose cancellation is best-effort is still safe: a stale firing is a
/// no-op instead of a draw against a torn-down render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken(pub u64);

/// The host watch-face runtime, as seen from the render core
pub trait HostRuntime {
    /// Request a repaint of the face surface.
    fn invalidate(&mut self);

    /// Arm a one-shot callback after `delay`, delivered back to the
    /// engine as `on_timer_fired` with the returned token.
    fn schedule(&mut self, delay: Duration) -> TickToken;

    /// Cancel a previously scheduled callback. Best effort; the engine
    /// also ignores firings for tokens it has dropped.
    fn cancel(&mut self, token: TickToken);
}

/// Read-only byte-stream provider keyed by logical resource name
/// (`themes.json`, per-theme font files).
///
/// Reads are synchronous and happen before first paint; the assets are
/// small.
pub trait AssetSource {
    fn open(&self, name: &str) -> std::result::Result<Vec<u8>, AssetError>;
}

/// Wall-clock source
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch, for timer alignment.
    fn epoch_millis(&self) -> i64;
}

/// The system clock in the host's current timezone
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    fn epoch_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Deterministic clock for tests and headless runs.
///
/// Handles are cheap clones sharing one instant; advancing any handle
/// advances them all.
#[derive(Clone, Debug)]
pub struct FixedClock {
    at: Rc<Cell<NaiveDateTime>>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self {
            at: Rc::new(Cell::new(at)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.at.set(at);
    }

    pub fn advance(&self, by: Duration) {
        let next = self.at.get() + chrono::Duration::milliseconds(by.as_millis() as i64);
        self.at.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at.get()
    }

    fn epoch_millis(&self) -> i64 {
        self.at.get().and_utc().timestamp_millis()
    }
}

/// Resolves locale calendar names for a point in time
pub trait Calendar {
    /// Full weekday name, e.g. `"Tuesday"`.
    fn weekday_name(&self, at: NaiveDateTime) -> String;

    /// Day-of-month and full month name, e.g. `"7 August"`.
    fn date_line(&self, at: NaiveDateTime) -> String;
}

/// Calendar naming via chrono's format tables
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn weekday_name(&self, at: NaiveDateTime) -> String {
        at.format("%A").to_string()
    }

    fn date_line(&self, at: NaiveDateTime) -> String {
        // %e pads single-digit days with a leading space; trim it off.
        at.format("%e %B").to_string().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn weekday_name_is_full() {
        assert_eq!(SystemCalendar.weekday_name(at(2016, 5, 28)), "Saturday");
    }

    #[test]
    fn date_line_has_no_leading_pad() {
        assert_eq!(SystemCalendar.date_line(at(2016, 6, 7)), "7 June");
        assert_eq!(SystemCalendar.date_line(at(2016, 2, 20)), "20 February");
    }

    #[test]
    fn fixed_clock_handles_share_time() {
        let clock = FixedClock::new(at(2020, 1, 1));
        let handle = clock.clone();
        handle.advance(Duration::from_millis(1500));
        assert_eq!(
            clock.now(),
            at(2020, 1, 1) + chrono::Duration::milliseconds(1500)
        );
    }
}
