//! Frame timing.
//!
//! [`AnimationClock`] turns a monotonic [`TimeSource`] into a stabilized
//! per-tick delta. Anomalous readings (non-positive or a second and longer,
//! e.g. after suspend/resume) are replaced by a nominal interval so the
//! simulation never sees them. With [`Pacing::Cooperative`] the clock also
//! sleeps to approximate the configured target framerate; with
//! [`Pacing::Host`] the window system's vsync does the pacing.

use std::{cell::Cell, rc::Rc};

use instant::{Duration, Instant};

/// Nominal simulation framerate; the glitch substitute is one frame of it.
pub const NOMINAL_FRAMERATE: f64 = 60.0;

/// A monotonic clock in seconds plus the ability to block the caller.
pub trait TimeSource {
    /// Seconds since an arbitrary, fixed origin.
    fn now(&self) -> f64;
    /// Block for `seconds`. Only ever called with `0 < seconds < 1`.
    fn sleep(&mut self, seconds: f64);
}

/// Wall clock backed by [`instant::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&mut self, seconds: f64) {
        std::thread::sleep(Duration::from_secs_f64(seconds));
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// Clones share the same time, so a test can keep one handle while the
/// [`AnimationClock`] owns another. Sleeping advances the shared time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
    slept: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            slept: Rc::new(Cell::new(0.0)),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Jump to an absolute time, also backwards.
    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    /// Total time spent in [`TimeSource::sleep`].
    pub fn slept(&self) -> f64 {
        self.slept.get()
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sleep(&mut self, seconds: f64) {
        self.slept.set(self.slept.get() + seconds);
        self.advance(seconds);
    }
}

/// Who is responsible for keeping the tick rate near the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// The clock sleeps until the next frame is due.
    Cooperative,
    /// The host (vsync, timer) paces ticks; the clock never blocks.
    #[default]
    Host,
}

#[derive(Debug)]
pub struct AnimationClock<T: TimeSource> {
    source: T,
    pacing: Pacing,
    target_framerate: f64,
    nominal_delta: f64,
    prev: f64,
    window_start: f64,
    frames_in_window: u32,
    fps: u32,
}

impl<T: TimeSource> AnimationClock<T> {
    pub fn new(source: T, target_framerate: f64, pacing: Pacing) -> Self {
        let now = source.now();
        Self {
            source,
            pacing,
            target_framerate: sanitize_framerate(target_framerate),
            nominal_delta: 1.0 / NOMINAL_FRAMERATE,
            prev: now,
            window_start: now,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Advance one tick and return the delta in seconds, always in `(0, 1)`.
    pub fn tick(&mut self) -> f32 {
        if self.pacing == Pacing::Cooperative {
            let wait = self.prev + 1.0 / self.target_framerate - self.source.now();
            if wait > 0.0 && wait < 1.0 {
                log::trace!("pacing sleep {:.4}s", wait);
                self.source.sleep(wait);
            }
        }

        let now = self.source.now();
        let mut delta = now - self.prev;
        if !(delta > 0.0 && delta < 1.0) {
            log::debug!(
                "clock glitch ({:.3}s since last tick), substituting {:.4}s",
                delta,
                self.nominal_delta
            );
            delta = self.nominal_delta;
        }
        self.prev = now;

        self.frames_in_window += 1;
        let elapsed = now - self.window_start;
        if elapsed >= 1.0 {
            // after a long stall restart the window instead of catching up
            self.window_start = if elapsed < 2.0 {
                self.window_start + 1.0
            } else {
                now
            };
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
        } else if elapsed < 0.0 {
            self.window_start = now;
            self.fps = 0;
            self.frames_in_window = 0;
        }
        delta as f32
    }

    /// Ticks counted in the last complete one-second window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn target_framerate(&self) -> f64 {
        self.target_framerate
    }

    pub fn set_target_framerate(&mut self, fps: f64) {
        self.target_framerate = sanitize_framerate(fps);
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing;
    }

    pub fn source(&self) -> &T {
        &self.source
    }
}

fn sanitize_framerate(fps: f64) -> f64 {
    if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        NOMINAL_FRAMERATE
    }
}
