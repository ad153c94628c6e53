use std::sync::Arc;

use crate::data_structures::{
    stage::Colour,
    vehicle::{VehicleModel, ViewSway},
    vertex::{ColoredVertex, face_normal, push_quad},
};

/// An axis-aligned box in model units, one colour for all faces.
///
/// Models face +Z with +Y up and sit on `y = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Part {
    pub min: [f32; 3],
    pub max: [f32; 3],
    pub colour: Colour,
}

const fn part(min: [f32; 3], max: [f32; 3], colour: Colour) -> Part {
    Part { min, max, colour }
}

const BLACK: Colour = [0.08, 0.08, 0.08, 1.0];
const GREY: Colour = [0.55, 0.55, 0.58, 1.0];

const CAR_PARTS: [Part; 10] = [
    // chassis and cabin
    part([-0.85, 0.25, -1.9], [0.85, 0.75, 1.9], [0.80, 0.10, 0.12, 1.0]),
    part([-0.75, 0.75, -1.0], [0.75, 1.30, 0.7], [0.85, 0.88, 0.92, 1.0]),
    part([-0.80, 0.25, 1.9], [0.80, 0.45, 2.0], GREY),
    part([-0.70, 0.55, 1.9], [-0.40, 0.70, 1.95], [1.0, 0.95, 0.6, 1.0]),
    part([0.40, 0.55, 1.9], [0.70, 0.70, 1.95], [1.0, 0.95, 0.6, 1.0]),
    part([-0.80, 0.25, -2.0], [0.80, 0.45, -1.9], GREY),
    // wheels
    part([-0.95, 0.0, 1.0], [-0.70, 0.5, 1.5], BLACK),
    part([0.70, 0.0, 1.0], [0.95, 0.5, 1.5], BLACK),
    part([-0.95, 0.0, -1.5], [-0.70, 0.5, -1.0], BLACK),
    part([0.70, 0.0, -1.5], [0.95, 0.5, -1.0], BLACK),
];

const SCOOTER_PARTS: [Part; 10] = [
    part([-0.22, 0.25, -0.7], [0.22, 0.40, 0.6], [0.90, 0.90, 0.85, 1.0]),
    part([-0.28, 0.40, -0.9], [0.28, 0.80, -0.1], [0.15, 0.35, 0.75, 1.0]),
    part([-0.22, 0.80, -0.8], [0.22, 0.90, -0.15], [0.15, 0.12, 0.10, 1.0]),
    part([-0.25, 0.25, 0.6], [0.25, 1.10, 0.8], [0.15, 0.35, 0.75, 1.0]),
    part([-0.06, 1.10, 0.65], [0.06, 1.30, 0.77], GREY),
    part([-0.40, 1.30, 0.65], [0.40, 1.38, 0.75], GREY),
    // wheels
    part([-0.07, 0.0, 0.65], [0.07, 0.35, 1.0], BLACK),
    part([-0.07, 0.0, -0.95], [0.07, 0.35, -0.6], BLACK),
    // rider
    part([-0.25, 0.90, -0.6], [0.25, 1.60, -0.25], [0.80, 0.50, 0.20, 1.0]),
    part([-0.15, 1.60, -0.5], [0.15, 1.85, -0.25], [0.95, 0.95, 0.95, 1.0]),
];

pub fn car() -> VehicleModel {
    VehicleModel {
        name: "car".to_string(),
        scale: 12.0,
        speed_factor: 1.0,
        sway: ViewSway {
            base: 0.6,
            amplitude: 0.4,
            rate: 0.4,
        },
        mesh: build_mesh(&CAR_PARTS),
    }
}

pub fn scooter() -> VehicleModel {
    VehicleModel {
        name: "scooter".to_string(),
        scale: 16.0,
        speed_factor: 0.7,
        sway: ViewSway {
            base: 0.5,
            amplitude: 0.4,
            rate: 0.3,
        },
        mesh: build_mesh(&SCOOTER_PARTS),
    }
}

/// Triangulate all parts and attach per-face normals.
pub fn build_mesh(parts: &[Part]) -> Arc<[ColoredVertex]> {
    let mut vertices = Vec::with_capacity(parts.len() * 36);
    for p in parts {
        push_cuboid(&mut vertices, p);
    }
    // Normals are derived from the triangles, so we go through
    // the vertices in chunks of 3
    for tri in vertices.chunks_mut(3) {
        let normal = face_normal(tri[0].position, tri[1].position, tri[2].position);
        for v in tri {
            v.normal = normal;
        }
    }
    vertices.into()
}

/// Six outward-facing, counter-clockwise quads.
fn push_cuboid(out: &mut Vec<ColoredVertex>, p: &Part) {
    let [x0, y0, z0] = p.min;
    let [x1, y1, z1] = p.max;
    let faces = [
        [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
        [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
        [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]],
        [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
        [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
        [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
    ];
    for corners in faces {
        push_quad(out, corners, [0.0; 3], p.colour);
    }
}
