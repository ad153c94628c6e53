//! The single vertex format shared by every draw batch.
//!
//! Road ribbons, trees, vehicle meshes and overlay quads all use
//! [`ColoredVertex`]: untextured geometry with a per-vertex normal and an
//! RGBA colour. Keeping one layout means the backend needs one vertex
//! buffer description for all of its pipelines.

use cgmath::{InnerSpace, Vector3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub colour: [f32; 4],
}

impl ColoredVertex {
    /// Normal pointing straight up, used for flat ground geometry.
    pub const UP: [f32; 3] = [0.0, 1.0, 0.0];
    /// Normal pointing at the viewer, used for billboards and overlays.
    pub const FACING: [f32; 3] = [0.0, 0.0, 1.0];

    pub const fn new(position: [f32; 3], normal: [f32; 3], colour: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            colour,
        }
    }
}

/// Append a planar quad as two counter-clockwise triangles `(a, b, c)` and `(a, c, d)`.
///
/// The corner order is kept as given so the winding of the quad carries over
/// to both triangles.
pub fn push_quad(
    out: &mut Vec<ColoredVertex>,
    corners: [[f32; 3]; 4],
    normal: [f32; 3],
    colour: [f32; 4],
) {
    let [a, b, c, d] = corners;
    for position in [a, b, c, a, c, d] {
        out.push(ColoredVertex::new(position, normal, colour));
    }
}

/// Face normal of a counter-clockwise triangle, or zero for a degenerate one.
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let a: Vector3<f32> = a.into();
    let b: Vector3<f32> = b.into();
    let c: Vector3<f32> = c.into();
    let n = (b - a).cross(c - a);
    if n.magnitude2() <= f32::EPSILON {
        return [0.0; 3];
    }
    n.normalize().into()
}
