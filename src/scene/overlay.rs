use crate::{
    data_structures::{
        stage::Colour,
        vertex::{ColoredVertex, push_quad},
    },
    render::{Blend, DrawBatch, Projection, TextDraw},
};

const FADE_DEPTH_OFFSET: f32 = 0.005;
const SHADOW_DEPTH_OFFSET: f32 = 0.002;
const TEXT_DEPTH_OFFSET: f32 = 0.001;

const TEXT_COLOUR: [f32; 3] = [1.0, 1.0, 1.0];
const SHADOW_COLOUR: [f32; 3] = [0.0, 0.0, 0.0];

/// Drop shadow offset in projection units at a view scale of one.
pub const SHADOW_OFFSET: f32 = 1.0;

/// Frame-rate readout shown in the top half of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpsReadout {
    pub observed: u32,
    pub target: u32,
}

impl FpsReadout {
    pub fn label(&self) -> String {
        format!("FPS {}/{}", self.observed, self.target)
    }
}

/// Black full-screen quad for the scene transition, `None` when fully transparent.
pub(crate) fn fade(fadev: f32, projection: &Projection) -> Option<DrawBatch> {
    if fadev <= 0.0 {
        return None;
    }
    let (alpha, blend) = if fadev >= 1.0 {
        (1.0, Blend::Opaque)
    } else {
        (fadev, Blend::Alpha)
    };
    let w = projection.half_width * 2.0;
    let h = projection.half_height * 2.0;
    let z = projection.far - FADE_DEPTH_OFFSET;
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        [[-w, h, z], [-w, -h, z], [w, -h, z], [w, h, z]],
        ColoredVertex::FACING,
        [0.0, 0.0, 0.0, alpha],
    );
    Some(DrawBatch::Fade {
        alpha,
        blend,
        vertices,
    })
}

/// Push `text` preceded by its drop shadow, both with `alpha` clamped to `[0, 1]`.
pub(crate) fn shadowed_text(
    out: &mut Vec<DrawBatch>,
    text: &str,
    position: [f32; 2],
    alpha: f32,
    view_scale: f32,
    projection: &Projection,
) {
    let alpha = alpha.clamp(0.0, 1.0);
    let d = SHADOW_OFFSET * view_scale;
    let [x, y] = position;
    out.push(DrawBatch::Text(TextDraw {
        text: text.to_string(),
        position: [x + d, y - d],
        depth: projection.far - SHADOW_DEPTH_OFFSET,
        colour: with_alpha(SHADOW_COLOUR, alpha),
    }));
    out.push(DrawBatch::Text(TextDraw {
        text: text.to_string(),
        position,
        depth: projection.far - TEXT_DEPTH_OFFSET,
        colour: with_alpha(TEXT_COLOUR, alpha),
    }));
}

pub(crate) fn fps_readout(
    out: &mut Vec<DrawBatch>,
    readout: FpsReadout,
    view_scale: f32,
    projection: &Projection,
) {
    let position = [
        projection.half_width * -0.05,
        projection.half_height * 0.9,
    ];
    shadowed_text(out, &readout.label(), position, 1.0, view_scale, projection);
}

/// The course name, fading out over its last second.
pub(crate) fn course_name(
    out: &mut Vec<DrawBatch>,
    name: &str,
    timer: f32,
    view_scale: f32,
    projection: &Projection,
) {
    if timer <= 0.0 {
        return;
    }
    let position = [
        projection.half_width * -0.9,
        projection.half_height * -0.9,
    ];
    shadowed_text(out, name, position, timer.min(1.0), view_scale, projection);
}

fn with_alpha(rgb: [f32; 3], alpha: f32) -> Colour {
    [rgb[0], rgb[1], rgb[2], alpha]
}
