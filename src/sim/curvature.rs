//! Heading, curvature lookahead and lateral placement along a course.
//!
//! All queries take a continuous position: the integer part selects the
//! bracketing stations and the fraction blends between them. Positions are
//! clamped first, so no query can index outside the course.

use cgmath::{EuclideanSpace, Point2};

use crate::{data_structures::course::Course, sim::traversal::clamp_position};

/// Number of unit steps summed by [`CurvatureAnalyzer::lookahead`].
pub const LOOKAHEAD_STEPS: usize = 8;

/// How a heading change beyond ±180° is folded back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WrapCorrection {
    /// `> 180`: `a1 - a0 * 360`; `< -180`: `a1 + 360 - a0`.
    ///
    /// The positive branch does not fold into ±180°, it overshoots. Kept
    /// because the speed controller was tuned against it.
    #[default]
    Literal,
    /// Fold both branches by a full turn.
    Symmetric,
}

impl WrapCorrection {
    /// Heading change from `a0` to `a1`, in degrees.
    pub fn turn(self, a0: f32, a1: f32) -> f32 {
        let a = a1 - a0;
        match self {
            WrapCorrection::Literal if a > 180.0 => a1 - a0 * 360.0,
            WrapCorrection::Literal if a < -180.0 => (a1 + 360.0) - a0,
            WrapCorrection::Symmetric if a > 180.0 => a - 360.0,
            WrapCorrection::Symmetric if a < -180.0 => a + 360.0,
            _ => a,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CurvatureAnalyzer<'a> {
    course: &'a Course,
    wrap: WrapCorrection,
}

impl<'a> CurvatureAnalyzer<'a> {
    pub fn new(course: &'a Course) -> Self {
        Self {
            course,
            wrap: WrapCorrection::default(),
        }
    }

    pub fn with_wrap(mut self, wrap: WrapCorrection) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn course(&self) -> &'a Course {
        self.course
    }

    /// Direction of travel at `pos`, in degrees in `(-180, 180]`.
    ///
    /// Blends the forward differences of `(i0, i0+1)` and `(i0+1, i0+2)`,
    /// which is continuous across integer positions.
    pub fn heading(&self, pos: f32) -> f32 {
        let (i0, f) = bracket(pos, self.course.last_position());
        let s0 = self.course.station(i0).center;
        let s1 = self.course.station(i0 + 1).center;
        let s2 = self.course.station(i0 + 2).center;
        let c = lerp(s0, s1, f);
        let t = lerp(s1, s2, f);
        let d = t - c;
        d.y.atan2(d.x).to_degrees()
    }

    /// Sum of absolute heading changes over the next [`LOOKAHEAD_STEPS`] stations.
    pub fn lookahead(&self, pos: f32) -> f32 {
        let mut a0 = self.heading(pos);
        let mut sum = 0.0;
        for step in 1..=LOOKAHEAD_STEPS {
            let a1 = self.heading(pos + step as f32);
            sum += self.wrap.turn(a0, a1).abs();
            a0 = a1;
        }
        sum
    }

    /// Point across the road at `pos`: 0 is the right edge, 1 the left edge.
    pub fn lateral_position(&self, pos: f32, lateral: f32) -> Point2<f32> {
        let last = (self.course.len() - 2) as f32;
        let (i0, f) = bracket(pos, last);
        let a = self.course.station(i0);
        let b = self.course.station(i0 + 1);
        let right = lerp(a.right_edge, b.right_edge, f);
        let left = lerp(a.left_edge, b.left_edge, f);
        Point2::from_vec(right.to_vec() * (1.0 - lateral) + left.to_vec() * lateral)
    }
}

fn bracket(pos: f32, last: f32) -> (usize, f32) {
    let pos = clamp_position(pos, last);
    let i0 = pos.floor();
    (i0 as usize, pos - i0)
}

fn lerp(a: Point2<f32>, b: Point2<f32>, f: f32) -> Point2<f32> {
    a + (b - a) * f
}
