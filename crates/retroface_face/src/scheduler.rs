//! Interactive redraw timer
//!
//! While the face is visible and interactive, a repeating one-shot timer
//! drives one redraw per wall-clock second. Each firing re-arms with a
//! delay computed from the current time, aligning firings to second
//! boundaries instead of drifting a fixed interval from the previous
//! firing.

use crate::host::{HostRuntime, TickToken};
use std::time::Duration;

/// Interactive update period in milliseconds.
pub const INTERACTIVE_TICK_MS: i64 = 1000;

/// Delay until the next wall-clock second boundary.
///
/// At `12:00:00.300` this is 700 ms, not 1000 ms.
pub fn next_tick_delay(now_epoch_ms: i64) -> Duration {
    let elapsed = now_epoch_ms.rem_euclid(INTERACTIVE_TICK_MS);
    Duration::from_millis((INTERACTIVE_TICK_MS - elapsed) as u64)
}

/// Tracks the single armed timer callback.
///
/// At most one callback is armed at a time. The scheduler remembers the
/// token of the armed callback; a firing that arrives with any other
/// token (cancelled late by the host, or left over from before a disarm)
/// must be ignored by the caller via [`RedrawScheduler::owns`].
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    armed: Option<TickToken>,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether a firing with this token is the one currently armed.
    pub fn owns(&self, token: TickToken) -> bool {
        self.armed == Some(token)
    }

    /// Arm the next second-aligned firing, replacing any armed one.
    pub fn arm(&mut self, host: &mut dyn HostRuntime, now_epoch_ms: i64) {
        self.disarm(host);
        let delay = next_tick_delay(now_epoch_ms);
        let token = host.schedule(delay);
        tracing::trace!(?token, ?delay, "armed redraw timer");
        self.armed = Some(token);
    }

    /// Consume the armed token after its firing has been handled.
    pub fn clear(&mut self) {
        self.armed = None;
    }

    /// Cancel the armed callback, if any. Must be called on teardown so
    /// no callback ever posts to a destroyed render target.
    pub fn disarm(&mut self, host: &mut dyn HostRuntime) {
        if let Some(token) = self.armed.take() {
            tracing::trace!(?token, "disarmed redraw timer");
            host.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_completes_the_current_second() {
        // 12:00:00.300 on any day.
        let now_ms = 1_700_000_000_000i64 + 300;
        assert_eq!(next_tick_delay(now_ms), Duration::from_millis(700));
    }

    #[test]
    fn delay_on_a_boundary_is_a_full_second() {
        assert_eq!(
            next_tick_delay(1_700_000_000_000i64),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn delay_never_exceeds_one_second() {
        for offset in [1, 250, 500, 999] {
            let delay = next_tick_delay(1_700_000_000_000i64 + offset);
            assert!(delay <= Duration::from_millis(1000));
            assert!(delay > Duration::ZERO);
        }
    }
}
