use approx::assert_relative_eq;
use cgmath::{InnerSpace, Point2};
use isoroad::{
    data_structures::{
        catalog::{Catalog, Selection},
        course::{Course, MIN_STATIONS},
        stage::{Stage, TREE_PALETTE_LEN},
    },
    resources::{self, mesh, road},
};

use crate::common::test_utils::straight_course;
mod common;

#[test]
fn builtin_catalog_has_four_courses_and_two_vehicles() {
    let catalog = resources::load_catalog().unwrap();
    assert_eq!(catalog.courses().len(), 4);
    assert_eq!(catalog.vehicles().len(), 2);
    for course in catalog.courses() {
        assert!(!course.name().is_empty());
        assert!(course.len() > 100, "{} is too short", course.name());
        assert_eq!(course.last_position(), (course.len() - 3) as f32);
    }
}

#[test]
fn builtin_courses_are_identical_across_loads() {
    let a = resources::load_catalog().unwrap();
    let b = resources::load_catalog().unwrap();
    for (x, y) in a.courses().iter().zip(b.courses()) {
        assert_eq!(x.name(), y.name());
        assert_eq!(x.stations(), y.stations());
    }
}

#[test]
fn builtin_trees_keep_clear_of_the_road() {
    let catalog = resources::load_catalog().unwrap();
    let mut planted = 0;
    for course in catalog.courses() {
        for tree in course.stations().iter().filter_map(|s| s.tree) {
            planted += 1;
            assert!(tree.palette_index < TREE_PALETTE_LEN);
            let clearance = tree.radius + road::ROAD_HALF_WIDTH;
            for s in course.stations() {
                assert!((s.center - tree.position).magnitude() >= clearance * 0.999);
            }
        }
    }
    assert!(planted > 0);
}

#[test]
fn edges_sit_at_half_width_beside_the_centre() {
    let catalog = resources::load_catalog().unwrap();
    for course in catalog.courses() {
        for s in course.stations() {
            assert_relative_eq!(
                (s.left_edge - s.center).magnitude(),
                road::ROAD_HALF_WIDTH,
                epsilon = 1e-2
            );
            assert_relative_eq!(
                (s.right_edge - s.center).magnitude(),
                road::ROAD_HALF_WIDTH,
                epsilon = 1e-2
            );
            assert_relative_eq!(
                (s.left_marker - s.center).magnitude(),
                road::MARKER_HALF_WIDTH,
                epsilon = 1e-3
            );
        }
    }
}

#[test]
fn left_is_left_of_travel() {
    let course = straight_course(5);
    for s in course.stations() {
        assert_relative_eq!(s.left_edge.y, road::ROAD_HALF_WIDTH);
        assert_relative_eq!(s.right_edge.y, -road::ROAD_HALF_WIDTH);
    }
}

#[test]
fn spline_passes_through_control_points() {
    let control = [
        Point2::new(0.0, 0.0),
        Point2::new(100.0, 20.0),
        Point2::new(150.0, 120.0),
        Point2::new(90.0, 300.0),
    ];
    let points = road::catmull_rom(&control, road::SUBDIVISIONS);
    assert_eq!(points.len(), (control.len() - 1) * road::SUBDIVISIONS + 1);
    for (k, p) in control.iter().enumerate() {
        let q = points[k * road::SUBDIVISIONS];
        assert_relative_eq!(q.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(q.y, p.y, epsilon = 1e-3);
    }
}

#[test]
fn bake_rejects_degenerate_tables() {
    assert!(road::bake("dot", &[[0.0, 0.0]], 1).is_err());
    assert!(road::bake("nan", &[[0.0, 0.0], [f32::NAN, 1.0]], 1).is_err());
    let course = road::bake("line", &[[0.0, 0.0], [500.0, 0.0]], 1).unwrap();
    assert_eq!(course.len(), road::SUBDIVISIONS + 1);
}

#[test]
fn course_needs_three_stations() {
    let stations = straight_course(3).stations().to_vec();
    assert!(Course::new("short", stations[..2].to_vec()).is_err());
    assert_eq!(Course::new("ok", stations).unwrap().len(), MIN_STATIONS);
}

#[test]
fn catalog_needs_a_course_and_a_vehicle() {
    assert!(Catalog::new(vec![], vec![mesh::car()]).is_err());
    assert!(Catalog::new(vec![straight_course(5)], vec![]).is_err());
}

#[test]
fn selectors_advance_round_robin() {
    let catalog =
        Catalog::new(vec![straight_course(5); 3], vec![mesh::car(), mesh::scooter()]).unwrap();
    let mut selection = Selection::new(2, Stage::Night, 1);
    selection.advance(&catalog);
    assert_eq!(selection, Selection::new(0, Stage::Summer, 0));
    selection.advance(&catalog);
    assert_eq!(selection, Selection::new(1, Stage::Autumn, 1));
}

#[test]
fn stage_index_wraps() {
    for (i, stage) in Stage::ALL.iter().enumerate() {
        assert_eq!(Stage::from_index(i), *stage);
        assert_eq!(Stage::from_index(i + Stage::COUNT), *stage);
        assert_eq!(stage.index(), i);
    }
    assert_eq!(Stage::Night.next(), Stage::Summer);
}

#[test]
fn vehicle_meshes_are_whole_triangles() {
    for vehicle in [mesh::car(), mesh::scooter()] {
        assert!(!vehicle.mesh.is_empty());
        assert_eq!(vehicle.mesh.len() % 3, 0);
        assert!(vehicle.scale > 0.0);
        for v in vehicle.mesh.iter() {
            let n = cgmath::Vector3::from(v.normal);
            assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-4);
        }
    }
    assert_relative_eq!(mesh::car().max_speed(0.25), 0.25);
    assert!(mesh::scooter().max_speed(0.25) < 0.25);
}
