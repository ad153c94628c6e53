use cgmath::Point2;

use crate::{
    data_structures::{
        course::Course,
        stage::{Colour, TREE_PALETTE_LEN},
        vertex::ColoredVertex,
    },
    scene::to_world,
};

/// Apex height over radius of the equilateral tree triangle.
pub const TREE_APEX_RATIO: f32 = 1.732_050_8;

/// One upright triangle per tree in the window, facing the camera.
pub(crate) fn trees(
    course: &Course,
    base: usize,
    window: usize,
    camera: Point2<f32>,
    palette: &[Colour; TREE_PALETTE_LEN],
    out: &mut Vec<ColoredVertex>,
) {
    let n = course.len();
    for i in base as isize - window as isize..(base + window) as isize {
        if i < 0 {
            continue;
        }
        let i = i as usize;
        if i >= n {
            break;
        }
        let Some(tree) = course.station(i).tree else {
            continue;
        };
        let colour = palette[tree.palette_index % TREE_PALETTE_LEN];
        let [x, _, z] = to_world(tree.position, 0.0, camera);
        let r = tree.radius;
        for position in [
            [x, r * TREE_APEX_RATIO, z],
            [x - r, 0.0, z],
            [x + r, 0.0, z],
        ] {
            out.push(ColoredVertex::new(position, ColoredVertex::FACING, colour));
        }
    }
}
