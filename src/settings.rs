//! Runtime configuration. Loading and storing it is the host's business;
//! the engine only consumes the values.

use crate::{clock::Pacing, render::Viewport, sim::phase::SpeedMode};

pub const MIN_WAIT_MILLIS: u32 = 5;
pub const MAX_WAIT_MILLIS: u32 = 200;
pub const DEFAULT_WAIT_MILLIS: u32 = 15;
pub const DEFAULT_TARGET_FRAMERATE: f64 = 60.0;

/// Framerates offered by [`Settings::cycle_target_framerate`], in order.
pub const FRAMERATE_CYCLE: [u32; 3] = [60, 30, 20];

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    wait_millis: u32,
    target_framerate: f64,
    pub fps_display: bool,
    pub pacing: Pacing,
    pub speed_mode: SpeedMode,
    pub viewport: Viewport,
    /// Seed for the initial course/stage/vehicle pick; random when `None`.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wait_millis: DEFAULT_WAIT_MILLIS,
            target_framerate: DEFAULT_TARGET_FRAMERATE,
            fps_display: true,
            pacing: Pacing::default(),
            speed_mode: SpeedMode::default(),
            viewport: Viewport::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Frame interval in milliseconds, always within `MIN_WAIT_MILLIS..=MAX_WAIT_MILLIS`.
    pub fn wait_millis(&self) -> u32 {
        self.wait_millis
    }

    /// Set the frame interval. The target framerate follows it.
    pub fn set_wait_millis(&mut self, millis: u32) {
        self.wait_millis = millis.clamp(MIN_WAIT_MILLIS, MAX_WAIT_MILLIS);
        self.target_framerate = 1000.0 / self.wait_millis as f64;
    }

    pub fn with_wait_millis(mut self, millis: u32) -> Self {
        self.set_wait_millis(millis);
        self
    }

    /// Set an exact target framerate, clamped to the rates the wait interval
    /// range allows. The wait interval becomes `1000 / fps` whole milliseconds.
    pub fn set_target_framerate(&mut self, fps: u32) {
        let fps = fps.clamp(1000 / MAX_WAIT_MILLIS, 1000 / MIN_WAIT_MILLIS);
        self.wait_millis = (1000 / fps).clamp(MIN_WAIT_MILLIS, MAX_WAIT_MILLIS);
        self.target_framerate = fps as f64;
    }

    pub fn with_target_framerate(mut self, fps: u32) -> Self {
        self.set_target_framerate(fps);
        self
    }

    pub fn target_framerate(&self) -> f64 {
        self.target_framerate
    }

    /// Step to the next entry of [`FRAMERATE_CYCLE`] and return it.
    ///
    /// From a rate that is not in the cycle this starts over at the first entry.
    pub fn cycle_target_framerate(&mut self) -> u32 {
        let next = FRAMERATE_CYCLE
            .iter()
            .position(|&fps| fps as f64 == self.target_framerate)
            .map_or(FRAMERATE_CYCLE[0], |i| {
                FRAMERATE_CYCLE[(i + 1) % FRAMERATE_CYCLE.len()]
            });
        self.set_target_framerate(next);
        next
    }
}
