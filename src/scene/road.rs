use cgmath::Point2;

use crate::{
    data_structures::{
        course::Course,
        stage::Colour,
        vertex::{ColoredVertex, push_quad},
    },
    scene::to_world,
};

pub const SHADOW_HEIGHT: f32 = 0.0;
pub const SURFACE_HEIGHT: f32 = 5.0;
pub const MARKER_HEIGHT: f32 = 5.01;

pub const SHADOW_COLOUR: Colour = [0.2, 0.2, 0.2, 1.0];
pub const SURFACE_EVEN: Colour = [0.3, 0.4, 0.45, 1.0];
pub const SURFACE_ODD: Colour = [0.35, 0.45, 0.5, 1.0];
pub const MARKER_COLOUR: Colour = [1.0, 1.0, 1.0, 1.0];

struct Edges {
    right: Point2<f32>,
    left: Point2<f32>,
    right_marker: Point2<f32>,
    left_marker: Point2<f32>,
}

/// Shadow, surface and dashed centre line for stations `base - window .. base + window`.
///
/// Each station is joined to the previous one in the window, so the first
/// visited station only seeds the strip.
pub(crate) fn ribbon(
    course: &Course,
    base: usize,
    window: usize,
    camera: Point2<f32>,
    out: &mut Vec<ColoredVertex>,
) {
    let n = course.len();
    let mut prev: Option<Edges> = None;
    for i0 in base as isize - window as isize..(base + window) as isize {
        if i0 < 0 {
            continue;
        }
        let i0 = i0 as usize;
        if i0 + 1 >= n {
            break;
        }
        let s = course.station(i0);
        let cur = Edges {
            right: s.right_edge,
            left: s.left_edge,
            right_marker: s.right_marker,
            left_marker: s.left_marker,
        };
        if let Some(p) = prev {
            let quad = |a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, d: Point2<f32>, h| {
                [a, b, c, d].map(|q| to_world(q, h, camera))
            };
            push_quad(
                out,
                quad(p.left, p.right, cur.right, cur.left, SHADOW_HEIGHT),
                ColoredVertex::UP,
                SHADOW_COLOUR,
            );
            let surface = if i0 % 2 == 0 {
                SURFACE_EVEN
            } else {
                SURFACE_ODD
            };
            push_quad(
                out,
                quad(p.left, p.right, cur.right, cur.left, SURFACE_HEIGHT),
                ColoredVertex::UP,
                surface,
            );
            if i0 % 2 == 0 {
                push_quad(
                    out,
                    quad(
                        p.left_marker,
                        p.right_marker,
                        cur.right_marker,
                        cur.left_marker,
                        MARKER_HEIGHT,
                    ),
                    ColoredVertex::UP,
                    MARKER_COLOUR,
                );
            }
        }
        prev = Some(cur);
    }
}
