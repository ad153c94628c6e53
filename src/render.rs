//! The per-tick output of the engine.
//!
//! A [`Frame`] is an owned, ordered list of [`DrawBatch`]es plus everything a
//! backend needs to set up the pass: clear colour, orthographic projection,
//! the world tilt and one directional light. Frames carry no GPU handles, so
//! they can be recorded, compared and asserted on without a graphics context.
//!
//! # Key types
//!
//! - [`Frame`] is one tick's worth of drawing
//! - [`DrawBatch`] is a single draw: world geometry, a placed mesh, the fade quad or text
//! - [`Projection`] holds the orthographic half extents and depth range
//! - [`DirectionalLight`] describes the single light source
//!

use std::sync::Arc;

use cgmath::{Matrix4, Vector3};

use crate::data_structures::{stage::Colour, vertex::ColoredVertex};

/// Window size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Orthographic projection `[-half_width, half_width] × [-half_height, half_height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub half_width: f32,
    pub half_height: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// OpenGL convention clip matrix, depth in `[-1, 1]`.
    pub fn matrix(&self) -> Matrix4<f32> {
        cgmath::ortho(
            -self.half_width,
            self.half_width,
            -self.half_height,
            self.half_height,
            self.near,
            self.far,
        )
    }
}

/// One light at infinity, given in view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vector3::new(1.0, 1.0, 1.0),
            ambient: 0.5,
            diffuse: 1.0,
            specular: 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Blending disabled, alpha ignored.
    Opaque,
    /// `src * a + dst * (1 - a)`.
    Alpha,
}

/// A string placed in projection units, bottom-left anchored.
#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub position: [f32; 2],
    pub depth: f32,
    pub colour: Colour,
}

/// A single draw call.
///
/// # Variants
///
/// - `World` is lit, depth-tested, back-face culled geometry relative to the camera
/// - `Model` is a shared mesh placed by a model matrix, lit like `World`
/// - `Fade` is the full-screen transition quad, unlit and drawn over the world
/// - `Text` is a glyph run, drawn last
///
#[derive(Clone, Debug)]
pub enum DrawBatch {
    World(Vec<ColoredVertex>),
    Model {
        mesh: Arc<[ColoredVertex]>,
        transform: Matrix4<f32>,
    },
    Fade {
        alpha: f32,
        blend: Blend,
        vertices: Vec<ColoredVertex>,
    },
    Text(TextDraw),
}

/// Everything drawn in one tick, in submission order.
#[derive(Clone, Debug)]
pub struct Frame {
    pub clear_colour: Colour,
    pub projection: Projection,
    /// Applied to `World` and `Model` batches after their own transform.
    pub view: Matrix4<f32>,
    pub light: DirectionalLight,
    pub batches: Vec<DrawBatch>,
}

impl Frame {
    pub fn world_vertex_count(&self) -> usize {
        self.batches
            .iter()
            .map(|b| match b {
                DrawBatch::World(v) => v.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextDraw> {
        self.batches.iter().filter_map(|b| match b {
            DrawBatch::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Alpha and blend mode of the fade quad, if one was emitted.
    pub fn fade(&self) -> Option<(f32, Blend)> {
        self.batches.iter().find_map(|b| match b {
            DrawBatch::Fade { alpha, blend, .. } => Some((*alpha, *blend)),
            _ => None,
        })
    }

    pub fn has_world(&self) -> bool {
        self.batches
            .iter()
            .any(|b| matches!(b, DrawBatch::World(_) | DrawBatch::Model { .. }))
    }
}
