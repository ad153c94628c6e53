use std::sync::Arc;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use cgmath::{Point2, SquareMatrix, Vector4};
use isoroad::{
    DrawBatch, Viewport,
    data_structures::{
        catalog::{Catalog, Selection},
        course::Tree,
        stage::Stage,
    },
    render::Blend,
    scene::{
        BASE_HALF_HEIGHT, DEPTH_RANGE, FpsReadout, SceneComposer, overlay::SHADOW_OFFSET, road,
        trees::TREE_APEX_RATIO, vehicle,
    },
    sim::{Phase, PhaseController, TraversalState, Tuning},
};

use crate::common::test_utils::{
    FRAME, car_catalog, course_with_tree, driver, first_selection, straight_course, tick_until,
};
mod common;

fn composer() -> SceneComposer {
    SceneComposer::new(Viewport::new(1280, 720))
}

fn cruising(n: usize) -> (Arc<Catalog>, TraversalState) {
    let catalog = car_catalog(vec![straight_course(n)]);
    let (controller, mut state) = driver(catalog.clone());
    tick_until(&controller, &mut state, 1000, |s| s.phase == Phase::Cruise);
    (catalog, state)
}

#[test]
fn fully_faded_frame_is_black_without_world() {
    let catalog = car_catalog(vec![straight_course(100)]);
    let (controller, mut state) = driver(catalog.clone());
    controller.update(&mut state, FRAME);
    assert_eq!(state.fadev(), 1.0);

    let frame = composer().compose(&catalog, &state, None);
    assert_eq!(frame.clear_colour, [0.0, 0.0, 0.0, 1.0]);
    assert!(!frame.has_world());
    assert_eq!(frame.world_vertex_count(), 0);
    let (alpha, blend) = frame.fade().unwrap();
    assert_eq!(alpha, 1.0);
    assert_eq!(blend, Blend::Opaque);
}

#[test]
fn mid_fade_blends_over_the_stage_tint() {
    let catalog = car_catalog(vec![straight_course(100)]);
    let (controller, mut state) = driver(catalog.clone());
    controller.update(&mut state, FRAME);
    controller.update(&mut state, FRAME);
    let fadev = state.fadev();
    assert!(fadev > 0.0 && fadev < 1.0);

    let frame = composer().compose(&catalog, &state, None);
    assert_eq!(frame.clear_colour, Stage::Summer.clear_colour());
    assert!(frame.has_world());
    let (alpha, blend) = frame.fade().unwrap();
    assert_eq!(alpha, fadev);
    assert_eq!(blend, Blend::Alpha);
}

#[test]
fn cruising_frame_has_no_fade_quad() {
    let (catalog, state) = cruising(200);
    let frame = composer().compose(&catalog, &state, None);
    assert!(frame.fade().is_none());
    assert!(frame.has_world());
    assert_eq!(frame.clear_colour, Stage::Summer.clear_colour());
}

#[test]
fn batches_follow_the_draw_order() {
    let catalog = car_catalog(vec![course_with_tree(
        50,
        3,
        Tree {
            position: Point2::new(30.0, 120.0),
            radius: 30.0,
            palette_index: 2,
        },
    )]);
    let (controller, mut state) = driver(catalog.clone());
    controller.update(&mut state, FRAME);
    controller.update(&mut state, FRAME);

    let fps = FpsReadout {
        observed: 58,
        target: 60,
    };
    let frame = composer().compose(&catalog, &state, Some(fps));
    let kinds: Vec<&str> = frame
        .batches
        .iter()
        .map(|b| match b {
            DrawBatch::World(_) => "world",
            DrawBatch::Model { .. } => "model",
            DrawBatch::Fade { .. } => "fade",
            DrawBatch::Text(_) => "text",
        })
        .collect();
    assert_eq!(
        kinds,
        ["world", "world", "model", "fade", "text", "text", "text", "text"]
    );
}

#[test]
fn road_window_covers_stations_around_the_vehicle() {
    let catalog = car_catalog(vec![straight_course(50)]);
    let mut state = TraversalState::new(first_selection());
    PhaseController::new(catalog.clone(), Tuning::default()).update(&mut state, FRAME);
    state.set_fadev(0.0);

    // every station but the last one is visited, the first only seeds the strip
    let frame = composer().compose(&catalog, &state, None);
    let segments = 48;
    let markers = 24;
    assert_eq!(frame.world_vertex_count(), segments * 12 + markers * 6);

    state.set_idx(10.5);
    let frame = composer().with_window(2).compose(&catalog, &state, None);
    // stations 8..=11 joined: segments ending at 9, 10 and 11, marker on 10
    assert_eq!(frame.world_vertex_count(), 3 * 12 + 6);
}

#[test]
fn road_quads_are_relative_to_the_camera() {
    let catalog = car_catalog(vec![straight_course(50)]);
    let mut state = TraversalState::new(first_selection());
    PhaseController::new(catalog.clone(), Tuning::default()).update(&mut state, FRAME);
    state.set_fadev(0.0);
    state.set_idx(10.5);

    let camera = SceneComposer::camera_reference(&catalog, &state);
    assert_relative_eq!(camera.x, 105.0);
    assert_abs_diff_eq!(camera.y, 0.0);

    let frame = composer().with_window(1).compose(&catalog, &state, None);
    let DrawBatch::World(ground) = &frame.batches[0] else {
        panic!("ground first");
    };
    // stations 9 and 10: shadow quad prevLeft, prevRight, curRight, curLeft
    assert_eq!(ground.len(), 12 + 6);
    let shadow: Vec<[f32; 3]> = ground[..6].iter().map(|v| v.position).collect();
    assert_eq!(shadow[0], [-15.0, road::SHADOW_HEIGHT, -40.0]);
    assert_eq!(shadow[1], [-15.0, road::SHADOW_HEIGHT, 40.0]);
    assert_eq!(shadow[2], [-5.0, road::SHADOW_HEIGHT, 40.0]);
    assert_eq!(shadow[5], [-5.0, road::SHADOW_HEIGHT, -40.0]);
    assert!(ground[6..12].iter().all(|v| v.position[1] == road::SURFACE_HEIGHT));
    assert!(ground[6..12].iter().all(|v| v.colour == road::SURFACE_EVEN));
    assert!(ground[12..].iter().all(|v| v.position[1] == road::MARKER_HEIGHT));
    assert!(ground.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
}

#[test]
fn trees_are_upright_triangles_in_the_stage_palette() {
    let tree = Tree {
        position: Point2::new(30.0, 120.0),
        radius: 30.0,
        palette_index: 2,
    };
    let catalog = car_catalog(vec![course_with_tree(50, 3, tree)]);
    let mut state = TraversalState::new(Selection::new(0, Stage::Winter, 0));
    PhaseController::new(catalog.clone(), Tuning::default()).update(&mut state, FRAME);
    state.set_fadev(0.5);

    let frame = composer().compose(&catalog, &state, None);
    let DrawBatch::World(forest) = &frame.batches[1] else {
        panic!("trees second");
    };
    assert_eq!(forest.len(), 3);
    let apex = forest[0].position;
    assert_relative_eq!(apex[0], 30.0);
    assert_relative_eq!(apex[1], 30.0 * TREE_APEX_RATIO);
    assert_relative_eq!(apex[2], -120.0);
    assert_eq!(forest[1].position, [0.0, 0.0, -120.0]);
    assert_eq!(forest[2].position, [60.0, 0.0, -120.0]);
    for v in forest {
        assert_eq!(v.colour, Stage::Winter.tree_palette()[2]);
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }

    // out of the window, no tree batch at all
    let frame = composer().with_window(1).compose(
        &catalog,
        &{
            let mut far = state.clone();
            far.set_idx(30.0);
            far
        },
        None,
    );
    let worlds = frame
        .batches
        .iter()
        .filter(|b| matches!(b, DrawBatch::World(_)))
        .count();
    assert_eq!(worlds, 1);
}

#[test]
fn vehicle_rides_in_the_left_lane_facing_travel() {
    let course = straight_course(50);
    let car = isoroad::resources::mesh::car();
    let camera = Point2::new(105.0, 0.0);
    let m = vehicle::transform(&course, 10.5, &car, camera);

    let origin = m * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(origin.x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(origin.y, vehicle::RIDE_HEIGHT);
    assert_relative_eq!(origin.z, -20.0, epsilon = 1e-4);

    // model +Z turns into the direction of travel, +x
    let forward = m * Vector4::new(0.0, 0.0, 1.0, 0.0);
    assert_relative_eq!(forward.x, car.scale, epsilon = 1e-4);
    assert_abs_diff_eq!(forward.z, 0.0, epsilon = 1e-4);
    assert!(m.invert().is_some());
}

#[test]
fn texts_carry_their_shadow_first() {
    let (catalog, state) = {
        let catalog = car_catalog(vec![straight_course(100)]);
        let (controller, mut state) = driver(catalog.clone());
        controller.update(&mut state, FRAME);
        (catalog, state)
    };
    let composer = composer();
    let fps = FpsReadout {
        observed: 59,
        target: 66,
    };
    let frame = composer.compose(&catalog, &state, Some(fps));
    let projection = composer.projection(state.view_scale);
    let texts: Vec<_> = frame.texts().collect();
    assert_eq!(texts.len(), 4);

    let d = SHADOW_OFFSET * state.view_scale;
    for pair in texts.chunks(2) {
        let (shadow, text) = (pair[0], pair[1]);
        assert_eq!(shadow.text, text.text);
        assert_relative_eq!(shadow.position[0], text.position[0] + d);
        assert_relative_eq!(shadow.position[1], text.position[1] - d);
        assert_eq!(&shadow.colour[..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&text.colour[..3], &[1.0, 1.0, 1.0]);
        assert!(shadow.depth < text.depth);
        assert!(text.depth < DEPTH_RANGE);
    }

    assert_eq!(texts[1].text, "FPS 59/66");
    assert_relative_eq!(texts[1].position[0], -0.05 * projection.half_width);
    assert_relative_eq!(texts[1].position[1], 0.9 * projection.half_height);

    assert_eq!(texts[3].text, "straight");
    assert_relative_eq!(texts[3].position[0], -0.9 * projection.half_width);
    assert_relative_eq!(texts[3].position[1], -0.9 * projection.half_height);
    assert_eq!(texts[3].colour[3], 1.0);
}

#[test]
fn course_name_fades_over_its_last_second() {
    let catalog = car_catalog(vec![straight_course(400)]);
    let (controller, mut state) = driver(catalog.clone());
    controller.update(&mut state, FRAME);
    state.name_timer = 0.25;
    let frame = composer().compose(&catalog, &state, None);
    let texts: Vec<_> = frame.texts().collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].colour[3], 0.25);
    assert_eq!(texts[1].colour[3], 0.25);

    state.name_timer = 0.0;
    let frame = composer().compose(&catalog, &state, None);
    assert_eq!(frame.texts().count(), 0);
}

#[test]
fn projection_follows_view_scale_and_aspect() {
    let mut composer = composer();
    let p = composer.projection(0.5);
    assert_relative_eq!(p.half_height, BASE_HALF_HEIGHT * 0.5);
    assert_relative_eq!(p.half_width, BASE_HALF_HEIGHT * 0.5 * 1280.0 / 720.0, epsilon = 1e-3);
    assert_eq!(p.near, -DEPTH_RANGE);
    assert_eq!(p.far, DEPTH_RANGE);

    assert!(!composer.resize(0, 300));
    assert!(!composer.resize(300, 0));
    assert_eq!(composer.viewport(), Viewport::new(1280, 720));
    assert!(composer.resize(400, 400));
    let p = composer.projection(1.0);
    assert_relative_eq!(p.half_width, p.half_height);
}

#[test]
fn world_is_tilted_for_the_isometric_look() {
    let (catalog, state) = cruising(200);
    let frame = composer().compose(&catalog, &state, None);
    // vertical vectors stay in the y/z plane
    let up = frame.view * Vector4::new(0.0, 1.0, 0.0, 0.0);
    assert_abs_diff_eq!(up.x, 0.0);
    assert_relative_eq!(up.y, 30f32.to_radians().cos(), epsilon = 1e-6);
    assert_relative_eq!(up.z, 30f32.to_radians().sin(), epsilon = 1e-6);
}
