//! The run lifecycle and speed control.
//!
//! ```text
//! Init ──▶ FadeIn ──▶ Cruise ──▶ FadeOut ──┐
//!  ▲                                       │
//!  └──────── selectors advance ────────────┘
//! ```
//!
//! Speed easing nudges by a constant amount per tick while the position
//! advance is scaled by delta. Distance therefore adapts to the frame rate
//! but the easing feel does not.

use std::sync::Arc;

use crate::{
    data_structures::{catalog::Catalog, course::Course},
    sim::{
        curvature::{CurvatureAnalyzer, WrapCorrection},
        traversal::{Phase, TraversalState},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpeedMode {
    /// Accelerate on straights, brake into curves.
    #[default]
    Adaptive,
    /// Always drive at the vehicle's maximum, except near the course end.
    Fixed,
}

/// Simulation constants.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub nominal_framerate: f32,
    pub fade_in_seconds: f32,
    pub fade_out_seconds: f32,
    /// Stations per nominal frame before the vehicle's speed factor.
    pub base_max_speed: f32,
    pub acceleration: f32,
    pub curve_deceleration: f32,
    pub end_deceleration: f32,
    /// Lookahead below this counts as straight, in degrees.
    pub straight_threshold: f32,
    /// Lookahead above this counts as sharp, in degrees.
    pub sharp_threshold: f32,
    /// Stations before the end at which the run winds down.
    pub end_margin: f32,
    /// Speed floor near the end, as a fraction of max.
    pub end_floor: f32,
    /// Speed floor in sharp curves, as a fraction of max.
    pub curve_floor: f32,
    pub name_display_seconds: f32,
    pub speed_mode: SpeedMode,
    /// `Literal` reads a clockwise turn across ±180° as a huge angle, so the
    /// vehicle brakes to the curve floor there.
    pub wrap: WrapCorrection,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            nominal_framerate: 60.0,
            fade_in_seconds: 1.3,
            fade_out_seconds: 2.0,
            base_max_speed: 0.25,
            acceleration: 0.0025,
            curve_deceleration: 0.0025,
            end_deceleration: 0.005,
            straight_threshold: 20.0,
            sharp_threshold: 30.0,
            end_margin: 10.0,
            end_floor: 0.1,
            curve_floor: 0.4,
            name_display_seconds: 5.0,
            speed_mode: SpeedMode::Adaptive,
            wrap: WrapCorrection::Literal,
        }
    }
}

/// Drives a [`TraversalState`] through the lifecycle, one tick at a time.
#[derive(Debug, Clone)]
pub struct PhaseController {
    catalog: Arc<Catalog>,
    tuning: Tuning,
}

impl PhaseController {
    pub fn new(catalog: Arc<Catalog>, tuning: Tuning) -> Self {
        Self { catalog, tuning }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.tuning.speed_mode = mode;
    }

    /// One simulation tick.
    ///
    /// `delta` outside `(0, 1)` seconds, NaN included, is replaced by one
    /// nominal frame. The whole tick works on the course and vehicle selected
    /// when it started, even if a fade-out advances the selectors.
    pub fn update(&self, state: &mut TraversalState, delta: f32) {
        let nominal = 1.0 / self.tuning.nominal_framerate;
        let mut delta = if delta > 0.0 && delta < 1.0 {
            delta
        } else {
            nominal
        };

        let selection = state.selection;
        let course = self.catalog.course(&selection);
        let vehicle = self.catalog.vehicle(&selection);

        match state.phase {
            Phase::Init => {
                state.reset(course, self.tuning.name_display_seconds);
                delta = nominal;
                state.phase = Phase::FadeIn;
                log::info!(
                    "Starting {:?} ({:?}) with the {}",
                    course.name(),
                    selection.stage,
                    vehicle.name
                );
            }
            Phase::FadeIn => {
                state.set_fadev(state.fadev() - delta / self.tuning.fade_in_seconds);
                if state.fadev() <= 0.0 {
                    state.set_fadev(0.0);
                    state.phase = Phase::Cruise;
                    log::debug!("fade-in complete at idx {:.2}", state.idx());
                }
            }
            Phase::Cruise => {
                if self.near_end(state, course) {
                    state.set_fadev(0.0);
                    state.phase = Phase::FadeOut;
                    log::debug!("approaching the end of {:?}, fading out", course.name());
                }
            }
            Phase::FadeOut => {
                state.set_fadev(state.fadev() + delta / self.tuning.fade_out_seconds);
                if state.fadev() >= 1.0 {
                    state.set_fadev(1.0);
                    state.selection.advance(&self.catalog);
                    state.phase = Phase::Init;
                    log::debug!("run finished, next selection {:?}", state.selection);
                }
            }
        }

        state.name_timer = (state.name_timer - delta).max(0.0);
        state.view_scale = vehicle.sway.view_scale(state.ang);

        // Advance with the speed of the previous tick, then adapt it.
        let framerate = self.tuning.nominal_framerate;
        state.set_idx(state.idx() + state.direction.sign() * state.spd() * framerate * delta);
        let max_speed = vehicle.max_speed(self.tuning.base_max_speed);
        self.adapt_speed(state, course, max_speed);

        state.ang += framerate * delta;
    }

    fn near_end(&self, state: &TraversalState, course: &Course) -> bool {
        state.idx() >= course.len() as f32 - self.tuning.end_margin
    }

    fn adapt_speed(&self, state: &mut TraversalState, course: &Course, max_speed: f32) {
        let t = &self.tuning;
        let spd = state.spd();
        let spd = if self.near_end(state, course) {
            (spd - t.end_deceleration).max(max_speed * t.end_floor)
        } else {
            match t.speed_mode {
                SpeedMode::Fixed => max_speed,
                SpeedMode::Adaptive => {
                    let curve = CurvatureAnalyzer::new(course)
                        .with_wrap(t.wrap)
                        .lookahead(state.idx());
                    if curve < t.straight_threshold {
                        (spd + t.acceleration).min(max_speed)
                    } else if curve > t.sharp_threshold {
                        (spd - t.curve_deceleration).max(max_speed * t.curve_floor)
                    } else {
                        spd
                    }
                }
            }
        };
        state.set_spd(spd);
    }
}
