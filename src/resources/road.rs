//! Bakes coarse control polylines into dense station lists.
//!
//! The centre line is a uniform Catmull-Rom spline through the control
//! points. Road edges and lane markers are offset sideways along the normal
//! of each station's forward difference, and trees are scattered beside the
//! road with a seeded generator so that every load produces the same course.

use anyhow::ensure;
use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::data_structures::{
    course::{Course, Station, Tree},
    stage::TREE_PALETTE_LEN,
};

/// Stations generated per control segment.
pub const SUBDIVISIONS: usize = 10;
pub const ROAD_HALF_WIDTH: f32 = 40.0;
pub const MARKER_HALF_WIDTH: f32 = 2.0;

const TREE_CHANCE: f64 = 0.4;
const TREE_DISTANCE: std::ops::RangeInclusive<u32> = 100..=400;
const TREE_RADIUS: std::ops::RangeInclusive<u32> = 25..=50;

/// Bake a named course from its control polyline.
pub fn bake(name: &str, control_points: &[[f32; 2]], seed: u64) -> anyhow::Result<Course> {
    ensure!(
        control_points.len() >= 2,
        "course {:?} needs at least two control points",
        name
    );
    ensure!(
        control_points
            .iter()
            .all(|p| p[0].is_finite() && p[1].is_finite()),
        "course {:?} has non-finite control points",
        name
    );

    let control: Vec<Point2<f32>> = control_points.iter().map(|&p| p.into()).collect();
    let centers = catmull_rom(&control, SUBDIVISIONS);
    let mut stations = stations_from_centers(&centers);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    plant_trees(&mut stations, &mut rng);

    let trees = stations.iter().filter(|s| s.tree.is_some()).count();
    log::debug!(
        "baked course {:?}: {} stations, {} trees",
        name,
        stations.len(),
        trees
    );
    Course::new(name, stations)
}

/// Sample a uniform Catmull-Rom spline through `control`.
///
/// Produces `(control.len() - 1) * subdivisions + 1` points; the end points
/// are duplicated as phantom neighbours.
pub fn catmull_rom(control: &[Point2<f32>], subdivisions: usize) -> Vec<Point2<f32>> {
    let n = control.len();
    if n < 2 || subdivisions == 0 {
        return control.to_vec();
    }
    let mut out = Vec::with_capacity((n - 1) * subdivisions + 1);
    for seg in 0..n - 1 {
        let p0 = control[seg.saturating_sub(1)].to_vec();
        let p1 = control[seg].to_vec();
        let p2 = control[seg + 1].to_vec();
        let p3 = control[(seg + 2).min(n - 1)].to_vec();
        for k in 0..subdivisions {
            let t = k as f32 / subdivisions as f32;
            let t2 = t * t;
            let t3 = t2 * t;
            let v = (p1 * 2.0
                + (p2 - p0) * t
                + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
                + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
                * 0.5;
            out.push(Point2::from_vec(v));
        }
    }
    out.push(control[n - 1]);
    out
}

/// Build tree-less stations around a centre line.
///
/// The last station reuses the direction of the segment before it.
pub fn stations_from_centers(centers: &[Point2<f32>]) -> Vec<Station> {
    let mut forward = Vector2::new(1.0, 0.0);
    (0..centers.len())
        .map(|i| {
            let d = match (centers.get(i + 1), i.checked_sub(1)) {
                (Some(&next), _) => next - centers[i],
                (None, Some(prev)) => centers[i] - centers[prev],
                (None, None) => forward,
            };
            if d.magnitude2() > f32::EPSILON {
                forward = d.normalize();
            }
            let left = Vector2::new(-forward.y, forward.x);
            let c = centers[i];
            Station {
                center: c,
                left_edge: c + left * ROAD_HALF_WIDTH,
                right_edge: c - left * ROAD_HALF_WIDTH,
                left_marker: c + left * MARKER_HALF_WIDTH,
                right_marker: c - left * MARKER_HALF_WIDTH,
                tree: None,
            }
        })
        .collect()
}

fn plant_trees<R: Rng>(stations: &mut [Station], rng: &mut R) {
    let centers: Vec<Point2<f32>> = stations.iter().map(|s| s.center).collect();
    for i in 0..stations.len().saturating_sub(1) {
        if !rng.gen_bool(TREE_CHANCE) {
            continue;
        }
        let d = centers[i + 1] - centers[i];
        if d.magnitude2() <= f32::EPSILON {
            continue;
        }
        let d = d.normalize();
        let distance = rng.gen_range(TREE_DISTANCE) as f32;
        let offset = Vector2::new(-d.y, d.x) * distance;
        // alternate sides so both verges get trees
        let position = if i % 2 == 0 {
            centers[i] + offset
        } else {
            centers[i] - offset
        };
        let radius = rng.gen_range(TREE_RADIUS) as f32;
        let palette_index = rng.gen_range(0..TREE_PALETTE_LEN);

        let clearance = radius + ROAD_HALF_WIDTH;
        let blocked = centers
            .iter()
            .any(|&c| (c - position).magnitude2() < clearance * clearance);
        if !blocked {
            stations[i].tree = Some(Tree {
                position,
                radius,
                palette_index,
            });
        }
    }
}
