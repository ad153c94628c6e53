#![allow(dead_code)]

use std::{cell::Cell, rc::Rc, sync::Arc};

use cgmath::Point2;
use isoroad::{
    BackendError, Frame, RenderBackend,
    data_structures::{
        catalog::{Catalog, Selection},
        course::{Course, Tree},
        stage::Stage,
    },
    resources::{mesh, road},
    sim::{PhaseController, TraversalState, Tuning},
};

/// Spacing between synthetic stations.
pub const STEP: f32 = 10.0;

pub fn course_from_centers(name: &str, centers: &[Point2<f32>]) -> Course {
    Course::new(name, road::stations_from_centers(centers)).unwrap()
}

/// `n` stations along +x, starting at the origin.
pub fn straight_course(n: usize) -> Course {
    let centers: Vec<_> = (0..n).map(|i| Point2::new(i as f32 * STEP, 0.0)).collect();
    course_from_centers("straight", &centers)
}

/// `n` stations along +y, starting at the origin.
pub fn northbound_course(n: usize) -> Course {
    let centers: Vec<_> = (0..n).map(|i| Point2::new(0.0, i as f32 * STEP)).collect();
    course_from_centers("northbound", &centers)
}

/// `n` stations on a counter-clockwise circle, `step_deg` apart.
pub fn circle_course(n: usize, radius: f32, step_deg: f32) -> Course {
    let centers: Vec<_> = (0..n)
        .map(|i| {
            let a = (i as f32 * step_deg).to_radians();
            Point2::new(radius * a.cos(), radius * a.sin())
        })
        .collect();
    course_from_centers("circle", &centers)
}

/// Alternating left and right kinks every `period` stations.
pub fn zigzag_course(n: usize, period: usize) -> Course {
    let mut centers = Vec::with_capacity(n);
    let mut p = Point2::new(0.0, 0.0);
    for i in 0..n {
        centers.push(p);
        let dy = if (i / period) % 2 == 0 { STEP } else { -STEP };
        p = Point2::new(p.x + STEP, p.y + dy);
    }
    course_from_centers("zigzag", &centers)
}

/// Straight course with one tree planted next to station `at`.
pub fn course_with_tree(n: usize, at: usize, tree: Tree) -> Course {
    let centers: Vec<_> = (0..n).map(|i| Point2::new(i as f32 * STEP, 0.0)).collect();
    let mut stations = road::stations_from_centers(&centers);
    stations[at].tree = Some(tree);
    Course::new("tree", stations).unwrap()
}

/// Catalog over `courses` with the built-in car and scooter.
pub fn catalog_with(courses: Vec<Course>) -> Arc<Catalog> {
    Arc::new(Catalog::new(courses, vec![mesh::car(), mesh::scooter()]).unwrap())
}

/// Catalog over `courses` with the car only.
pub fn car_catalog(courses: Vec<Course>) -> Arc<Catalog> {
    Arc::new(Catalog::new(courses, vec![mesh::car()]).unwrap())
}

pub fn first_selection() -> Selection {
    Selection::new(0, Stage::Summer, 0)
}

/// A controller with default tuning and a fresh state on the first selection.
pub fn driver(catalog: Arc<Catalog>) -> (PhaseController, TraversalState) {
    (
        PhaseController::new(catalog, Tuning::default()),
        TraversalState::new(first_selection()),
    )
}

pub const FRAME: f32 = 1.0 / 60.0;

/// Tick until `done` holds, at most `limit` times. Returns the ticks taken.
pub fn tick_until(
    controller: &PhaseController,
    state: &mut TraversalState,
    limit: usize,
    done: impl Fn(&TraversalState) -> bool,
) -> usize {
    for n in 0..limit {
        if done(state) {
            return n;
        }
        controller.update(state, FRAME);
    }
    panic!("condition not reached after {} ticks", limit);
}

/// Backend that fails with a scripted sequence of errors, then draws.
///
/// The teardown counter is shared so it can be read after the flow is gone.
pub struct FailingBackend {
    pub errors: Vec<BackendError>,
    pub drawn: usize,
    pub teardowns: Rc<Cell<usize>>,
}

impl FailingBackend {
    pub fn new(errors: Vec<BackendError>) -> Self {
        Self {
            errors,
            drawn: 0,
            teardowns: Rc::new(Cell::new(0)),
        }
    }
}

impl RenderBackend for FailingBackend {
    fn draw(&mut self, _frame: &Frame) -> Result<(), BackendError> {
        if self.errors.is_empty() {
            self.drawn += 1;
            Ok(())
        } else {
            Err(self.errors.remove(0))
        }
    }

    fn teardown(&mut self) {
        self.teardowns.set(self.teardowns.get() + 1);
    }
}
