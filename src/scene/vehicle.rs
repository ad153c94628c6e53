use cgmath::{Deg, Matrix4, Point2, Vector3};

use crate::{
    data_structures::{course::Course, vehicle::VehicleModel},
    render::DrawBatch,
    sim::curvature::CurvatureAnalyzer,
};

/// Fraction across the road, measured from the right edge.
pub const LANE_OFFSET: f32 = 0.75;
pub const RIDE_HEIGHT: f32 = 5.1;

/// Model matrix for the vehicle at `idx`.
///
/// Meshes face +Z; turning by `heading + 90°` about +Y lines them up with
/// the direction of travel once the course's y axis is mapped onto -Z.
pub fn transform(
    course: &Course,
    idx: f32,
    vehicle: &VehicleModel,
    camera: Point2<f32>,
) -> Matrix4<f32> {
    let analyzer = CurvatureAnalyzer::new(course);
    let p = analyzer.lateral_position(idx, LANE_OFFSET);
    let heading = analyzer.heading(idx);
    Matrix4::from_translation(Vector3::new(
        p.x - camera.x,
        RIDE_HEIGHT,
        -(p.y - camera.y),
    )) * Matrix4::from_angle_y(Deg(heading + 90.0))
        * Matrix4::from_scale(vehicle.scale)
}

pub(crate) fn vehicle(
    course: &Course,
    idx: f32,
    vehicle: &VehicleModel,
    camera: Point2<f32>,
) -> DrawBatch {
    DrawBatch::Model {
        mesh: vehicle.mesh.clone(),
        transform: transform(course, idx, vehicle, camera),
    }
}
