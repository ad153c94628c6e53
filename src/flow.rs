//! Per-tick flow control.
//!
//! A [`RoadFlow`] owns everything one running demo needs and advances it one
//! tick at a time. The host (a window event loop, a timer, a test) only
//! calls [`RoadFlow::tick`] and forwards resizes and key toggles.
//!
//! # Lifecycle Flow
//!
//! Each tick follows this pattern:
//! 1. Ask the [`AnimationClock`] for a stabilized delta (pacing sleep included)
//! 2. Let the [`PhaseController`] update the [`TraversalState`]
//! 3. Let the [`SceneComposer`] turn the state into a [`Frame`]
//! 4. Hand the frame to the [`RenderBackend`]
//!
//! A lost surface only drops the frame. Any other backend error is fatal and
//! is returned to the host, which must call [`RoadFlow::teardown`] and exit.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    backend::{BackendError, RenderBackend},
    clock::{AnimationClock, Pacing, TimeSource},
    data_structures::catalog::{Catalog, Selection},
    render::Frame,
    scene::{FpsReadout, SceneComposer},
    settings::Settings,
    sim::{PhaseController, TraversalState, Tuning},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Drawn,
    /// The backend could not present; simulation still advanced.
    Skipped,
}

pub struct RoadFlow<T: TimeSource, B: RenderBackend> {
    controller: PhaseController,
    composer: SceneComposer,
    clock: AnimationClock<T>,
    backend: B,
    state: TraversalState,
    settings: Settings,
    torn_down: bool,
}

impl<T: TimeSource, B: RenderBackend> RoadFlow<T, B> {
    /// Start a flow with the default [`Tuning`] and an initial selection
    /// drawn from `settings.seed` (or the thread RNG).
    pub fn new(catalog: Arc<Catalog>, settings: Settings, time: T, backend: B) -> Self {
        let selection = match settings.seed {
            Some(seed) => Selection::random(&catalog, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => Selection::random(&catalog, &mut rand::thread_rng()),
        };
        Self::with_selection(catalog, settings, Tuning::default(), selection, time, backend)
    }

    pub fn with_selection(
        catalog: Arc<Catalog>,
        settings: Settings,
        tuning: Tuning,
        selection: Selection,
        time: T,
        backend: B,
    ) -> Self {
        let tuning = Tuning {
            speed_mode: settings.speed_mode,
            ..tuning
        };
        let clock = AnimationClock::new(time, settings.target_framerate(), settings.pacing);
        let composer = SceneComposer::new(settings.viewport);
        log::info!(
            "flow ready: {:.1} fps target, {:?} pacing, {:?} speed, viewport {}x{}",
            settings.target_framerate(),
            settings.pacing,
            settings.speed_mode,
            settings.viewport.width,
            settings.viewport.height
        );
        Self {
            controller: PhaseController::new(catalog, tuning),
            composer,
            clock,
            backend,
            state: TraversalState::new(selection),
            settings,
            torn_down: false,
        }
    }

    /// Advance the simulation once and draw the result.
    pub fn tick(&mut self) -> Result<TickOutcome, BackendError> {
        if self.torn_down {
            return Err(anyhow::anyhow!("tick after teardown").into());
        }
        let delta = self.clock.tick();
        self.controller.update(&mut self.state, delta);
        let frame = self.compose();
        match self.backend.draw(&frame) {
            Ok(()) => Ok(TickOutcome::Drawn),
            Err(e) if !e.is_fatal() => {
                log::warn!("frame skipped: {}", e);
                Ok(TickOutcome::Skipped)
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
                Err(e)
            }
        }
    }

    /// The frame for the current state, without advancing anything.
    pub fn compose(&self) -> Frame {
        let fps = self.settings.fps_display.then(|| FpsReadout {
            observed: self.clock.fps(),
            target: self.settings.target_framerate().round() as u32,
        });
        self.composer
            .compose(self.controller.catalog(), &self.state, fps)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.composer.resize(width, height) {
            self.settings.viewport = self.composer.viewport();
        }
    }

    pub fn toggle_fps_display(&mut self) -> bool {
        self.settings.fps_display = !self.settings.fps_display;
        self.settings.fps_display
    }

    /// Step the target framerate 60 → 30 → 20 → 60.
    pub fn cycle_target_framerate(&mut self) -> u32 {
        let fps = self.settings.cycle_target_framerate();
        self.clock
            .set_target_framerate(self.settings.target_framerate());
        log::info!("target framerate {} fps", fps);
        fps
    }

    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.settings.pacing = pacing;
        self.clock.set_pacing(pacing);
    }

    /// Release the backend. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.backend.teardown();
        log::info!("flow torn down");
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &Catalog {
        self.controller.catalog()
    }

    pub fn clock(&self) -> &AnimationClock<T> {
        &self.clock
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<T: TimeSource, B: RenderBackend> Drop for RoadFlow<T, B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
