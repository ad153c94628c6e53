//! Translation of simulation state into a [`Frame`].
//!
//! Composition is pure: it reads a [`TraversalState`] and the catalog and
//! returns an owned frame. Course coordinates `(x, y)` map to world
//! coordinates `(x - cam.x, height, -(y - cam.y))`, i.e. everything is
//! relative to the camera reference point and the course's y axis runs
//! into the screen. The world is then tilted about X before the
//! orthographic projection, which gives the isometric look.
//!
//! Submission order per frame:
//! 1. road ribbon (shadow, surface, centre line)
//! 2. trees
//! 3. vehicle
//! 4. fade quad
//! 5. frame-rate readout and course name, each after its drop shadow

use cgmath::{Deg, Matrix4, Point2};

use crate::{
    data_structures::catalog::Catalog,
    render::{DirectionalLight, DrawBatch, Frame, Projection, Viewport},
    sim::traversal::{TraversalState, clamp_position},
};

pub mod overlay;
pub mod road;
pub mod trees;
pub mod vehicle;

pub use overlay::FpsReadout;

/// Stations drawn on either side of the vehicle.
pub const DEFAULT_WINDOW: usize = 600;
/// Half the view height at a view scale of one.
pub const BASE_HALF_HEIGHT: f32 = 360.0;
/// Orthographic depth range is `[-DEPTH_RANGE, DEPTH_RANGE]`.
pub const DEPTH_RANGE: f32 = 1000.0;
pub const WORLD_TILT: Deg<f32> = Deg(30.0);

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Course point at `height`, relative to `camera`.
pub(crate) fn to_world(p: Point2<f32>, height: f32, camera: Point2<f32>) -> [f32; 3] {
    [p.x - camera.x, height, -(p.y - camera.y)]
}

#[derive(Debug, Clone)]
pub struct SceneComposer {
    viewport: Viewport,
    window: usize,
}

impl SceneComposer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            window: DEFAULT_WINDOW,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Take a new viewport size. Sizes with a zero side are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.viewport = Viewport::new(width, height);
        log::debug!("viewport resized to {}x{}", width, height);
        true
    }

    pub fn projection(&self, view_scale: f32) -> Projection {
        let half_height = BASE_HALF_HEIGHT * view_scale;
        Projection {
            half_width: half_height * self.viewport.aspect(),
            half_height,
            near: -DEPTH_RANGE,
            far: DEPTH_RANGE,
        }
    }

    /// The camera reference point: the centre line at `idx`.
    pub fn camera_reference(catalog: &Catalog, state: &TraversalState) -> Point2<f32> {
        let course = catalog.course(&state.selection);
        let idx = clamp_position(state.idx(), course.last_position());
        let i = idx.floor() as usize;
        let f = idx - i as f32;
        let c0 = course.station(i).center;
        if i + 1 < course.len() {
            c0 + (course.station(i + 1).center - c0) * f
        } else {
            c0
        }
    }

    pub fn compose(
        &self,
        catalog: &Catalog,
        state: &TraversalState,
        fps: Option<FpsReadout>,
    ) -> Frame {
        let selection = state.selection;
        let course = catalog.course(&selection);
        let fadev = state.fadev();
        let projection = self.projection(state.view_scale);
        let clear_colour = if fadev >= 1.0 {
            BLACK
        } else {
            selection.stage.clear_colour()
        };

        let mut batches = Vec::new();
        if fadev < 1.0 {
            let idx = clamp_position(state.idx(), course.last_position());
            let base = idx.floor() as usize;
            let camera = Self::camera_reference(catalog, state);

            let mut ground = Vec::new();
            road::ribbon(course, base, self.window, camera, &mut ground);
            let mut forest = Vec::new();
            trees::trees(
                course,
                base,
                self.window,
                camera,
                selection.stage.tree_palette(),
                &mut forest,
            );
            batches.push(DrawBatch::World(ground));
            if !forest.is_empty() {
                batches.push(DrawBatch::World(forest));
            }
            batches.push(vehicle::vehicle(
                course,
                idx,
                catalog.vehicle(&selection),
                camera,
            ));
        }

        if let Some(fade) = overlay::fade(fadev, &projection) {
            batches.push(fade);
        }
        if let Some(readout) = fps {
            overlay::fps_readout(&mut batches, readout, state.view_scale, &projection);
        }
        overlay::course_name(
            &mut batches,
            course.name(),
            state.name_timer,
            state.view_scale,
            &projection,
        );

        Frame {
            clear_colour,
            projection,
            view: Matrix4::from_angle_x(WORLD_TILT),
            light: DirectionalLight::default(),
            batches,
        }
    }
}
