//! Per-run mutable simulation state.

use crate::data_structures::{catalog::Selection, course::Course};

/// Lifecycle phase of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Init,
    FadeIn,
    Cruise,
    FadeOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TravelDirection {
    #[default]
    Forward,
    Backward,
}

impl TravelDirection {
    pub fn sign(self) -> f32 {
        match self {
            TravelDirection::Forward => 1.0,
            TravelDirection::Backward => -1.0,
        }
    }
}

/// Clamp a continuous position to `[0, last]`; NaN maps to the start.
pub fn clamp_position(pos: f32, last: f32) -> f32 {
    if pos.is_nan() {
        0.0
    } else {
        pos.clamp(0.0, last.max(0.0))
    }
}

/// Everything that changes while driving a course.
///
/// `idx`, `spd` and `fadev` are only reachable through setters that clamp,
/// so `idx ∈ [0, N-3]`, `spd ≥ 0` and `fadev ∈ [0, 1]` hold after any write.
#[derive(Clone, Debug, PartialEq)]
pub struct TraversalState {
    idx: f32,
    last_position: f32,
    spd: f32,
    fadev: f32,
    pub direction: TravelDirection,
    /// Accumulated heading angle driving the view sway, in degrees.
    pub ang: f32,
    pub phase: Phase,
    pub selection: Selection,
    /// Seconds left for the course name overlay.
    pub name_timer: f32,
    /// Orthographic zoom of the current tick.
    pub view_scale: f32,
}

impl TraversalState {
    /// A state waiting in [`Phase::Init`]; the first tick resets it.
    pub fn new(selection: Selection) -> Self {
        Self {
            idx: 0.0,
            last_position: 0.0,
            spd: 0.0,
            fadev: 1.0,
            direction: TravelDirection::Forward,
            ang: 0.0,
            phase: Phase::Init,
            selection,
            name_timer: 0.0,
            view_scale: 1.0,
        }
    }

    /// Start over at the beginning of `course`, fully faded out.
    pub fn reset(&mut self, course: &Course, name_seconds: f32) {
        self.last_position = course.last_position();
        self.idx = 0.0;
        self.spd = 0.0;
        self.fadev = 1.0;
        self.ang = 0.0;
        self.name_timer = name_seconds.max(0.0);
    }

    pub fn idx(&self) -> f32 {
        self.idx
    }

    pub fn set_idx(&mut self, idx: f32) {
        self.idx = clamp_position(idx, self.last_position);
    }

    /// Upper bound of `idx` for the course of the current run.
    pub fn last_position(&self) -> f32 {
        self.last_position
    }

    pub fn spd(&self) -> f32 {
        self.spd
    }

    pub fn set_spd(&mut self, spd: f32) {
        self.spd = if spd.is_nan() { 0.0 } else { spd.max(0.0) };
    }

    pub fn fadev(&self) -> f32 {
        self.fadev
    }

    pub fn set_fadev(&mut self, fadev: f32) {
        self.fadev = if fadev.is_nan() {
            1.0
        } else {
            fadev.clamp(0.0, 1.0)
        };
    }
}
