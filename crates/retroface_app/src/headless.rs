//! Headless host - drives the engine without a watch runtime
//!
//! The host records invalidations and armed timers instead of painting;
//! a session advances a deterministic clock to each timer's due time and
//! delivers the firing back to the engine, so frames tick forward exactly
//! as they would on a device, only as fast as the caller asks.

use anyhow::Result;
use chrono::NaiveDateTime;
use retroface_config::FilePreferences;
use retroface_face::host::FixedClock;
use retroface_face::{Engine, HostRuntime, TickToken};
use retroface_paint::Frame;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct HostState {
    invalidations: u64,
    pending: Option<(TickToken, Duration)>,
    next_token: u64,
}

/// A recording [`HostRuntime`]. Handles are cheap clones sharing state.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost(Rc<RefCell<HostState>>);

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repaint requests observed so far.
    pub fn invalidations(&self) -> u64 {
        self.0.borrow().invalidations
    }

    /// The armed timer, if any.
    pub fn pending_timer(&self) -> Option<(TickToken, Duration)> {
        self.0.borrow().pending
    }
}

impl HostRuntime for HeadlessHost {
    fn invalidate(&mut self) {
        self.0.borrow_mut().invalidations += 1;
    }

    fn schedule(&mut self, delay: Duration) -> TickToken {
        let mut state = self.0.borrow_mut();
        state.next_token += 1;
        let token = TickToken(state.next_token);
        state.pending = Some((token, delay));
        token
    }

    fn cancel(&mut self, token: TickToken) {
        let mut state = self.0.borrow_mut();
        if state.pending.map(|(t, _)| t) == Some(token) {
            state.pending = None;
        }
    }
}

/// An engine wired to a headless host and a deterministic clock.
pub struct HeadlessSession {
    host: HeadlessHost,
    clock: FixedClock,
    engine: Engine<HeadlessHost>,
}

impl HeadlessSession {
    /// Assemble a session over an asset directory and preference file.
    pub fn new(
        asset_dir: impl AsRef<Path>,
        prefs: &FilePreferences,
        start: NaiveDateTime,
    ) -> Result<Self> {
        let host = HeadlessHost::new();
        let clock = FixedClock::new(start);
        let engine = crate::build_engine(host.clone(), asset_dir, prefs, clock.clone())?;
        Ok(Self {
            host,
            clock,
            engine,
        })
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    pub fn engine(&self) -> &Engine<HeadlessHost> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<HeadlessHost> {
        &mut self.engine
    }

    /// Attach the surface and make the face visible, as the host would on
    /// activation.
    pub fn start(&mut self, width_px: u32, height_px: u32) {
        self.engine.on_surface_resized(width_px, height_px);
        self.engine.on_visibility_changed(true);
    }

    /// Render the current instant, then advance the clock to the armed
    /// timer's due time and deliver its firing.
    pub fn step(&mut self) -> Result<Frame> {
        let frame = self.engine.render()?;
        if let Some((token, delay)) = self.host.pending_timer() {
            self.clock.advance(delay);
            self.engine.on_timer_fired(token);
        }
        Ok(frame)
    }
}
