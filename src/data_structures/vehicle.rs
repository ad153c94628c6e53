//! Vehicle catalog entries.

use std::sync::Arc;

use crate::data_structures::vertex::ColoredVertex;

/// Periodic zoom applied to the orthographic view while driving.
///
/// `view_scale = base + amplitude * sin(angle * rate)` with the accumulated
/// heading angle and the product interpreted in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSway {
    pub base: f32,
    pub amplitude: f32,
    pub rate: f32,
}

impl ViewSway {
    pub fn view_scale(&self, angle: f32) -> f32 {
        self.base + self.amplitude * (angle * self.rate).to_radians().sin()
    }
}

/// An immutable, untextured triangle-list mesh.
#[derive(Clone, Debug)]
pub struct VehicleModel {
    pub name: String,
    /// Uniform scale from model units to world units.
    pub scale: f32,
    /// Fraction of the base max speed this vehicle reaches.
    pub speed_factor: f32,
    pub sway: ViewSway,
    pub mesh: Arc<[ColoredVertex]>,
}

impl VehicleModel {
    pub fn max_speed(&self, base_max_speed: f32) -> f32 {
        base_max_speed.abs() * self.speed_factor
    }
}
