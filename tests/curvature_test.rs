use approx::{assert_abs_diff_eq, assert_relative_eq};
use isoroad::sim::{CurvatureAnalyzer, WrapCorrection, curvature::LOOKAHEAD_STEPS};

use crate::common::test_utils::{circle_course, northbound_course, straight_course};
mod common;

#[test]
fn heading_follows_the_axis_of_a_straight_course() {
    let east = straight_course(20);
    let north = northbound_course(20);
    for pos in [0.0, 3.5, 10.0, 16.9] {
        assert_abs_diff_eq!(CurvatureAnalyzer::new(&east).heading(pos), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(CurvatureAnalyzer::new(&north).heading(pos), 90.0, epsilon = 1e-4);
    }
}

#[test]
fn heading_is_continuous_across_stations() {
    let course = circle_course(60, 1000.0, 3.0);
    let analyzer = CurvatureAnalyzer::new(&course);
    for k in 1..(course.len() - 3) {
        let k = k as f32;
        let before = analyzer.heading(k - 1e-3);
        let after = analyzer.heading(k + 1e-3);
        assert_abs_diff_eq!(before, after, epsilon = 0.05);
    }
}

#[test]
fn heading_turns_by_the_circle_step() {
    let course = circle_course(40, 1000.0, 3.0);
    let analyzer = CurvatureAnalyzer::new(&course);
    // travel direction at station k points along the chord to k + 1
    assert_relative_eq!(analyzer.heading(0.0), 91.5, epsilon = 1e-2);
    assert_relative_eq!(analyzer.heading(10.0), 121.5, epsilon = 1e-2);
}

#[test]
fn straight_course_has_no_curvature() {
    let course = straight_course(50);
    let analyzer = CurvatureAnalyzer::new(&course);
    for pos in [0.0, 12.25, 40.0, 47.0] {
        assert_abs_diff_eq!(analyzer.lookahead(pos), 0.0, epsilon = 1e-3);
    }
}

#[test]
fn lookahead_sums_the_turn_ahead() {
    let course = circle_course(40, 1000.0, 3.0);
    let analyzer = CurvatureAnalyzer::new(&course);
    assert_relative_eq!(
        analyzer.lookahead(0.0),
        3.0 * LOOKAHEAD_STEPS as f32,
        epsilon = 2e-2
    );
}

#[test]
fn lookahead_near_the_end_stays_in_bounds() {
    let course = circle_course(12, 1000.0, 3.0);
    let analyzer = CurvatureAnalyzer::new(&course);
    let last = course.last_position();
    // steps past the end clamp onto the last position and add nothing
    assert_abs_diff_eq!(analyzer.lookahead(last), 0.0, epsilon = 1e-3);
    assert!(analyzer.lookahead(last - 2.0) <= 2.0 * 3.0 + 1e-2);
    assert!(analyzer.lookahead(f32::NAN).is_finite());
    assert!(analyzer.lookahead(1e9).is_finite());
}

#[test]
fn literal_wrap_overshoots_only_on_the_positive_branch() {
    let literal = WrapCorrection::Literal;
    let symmetric = WrapCorrection::Symmetric;

    assert_relative_eq!(literal.turn(179.0, -179.0), 2.0);
    assert_relative_eq!(symmetric.turn(179.0, -179.0), 2.0);

    assert_relative_eq!(symmetric.turn(-179.0, 179.0), -2.0);
    assert_relative_eq!(literal.turn(-179.0, 179.0), 179.0 + 179.0 * 360.0);

    assert_relative_eq!(literal.turn(10.0, 30.0), 20.0);
    assert_relative_eq!(symmetric.turn(30.0, 10.0), -20.0);
}

#[test]
fn clockwise_crossing_is_flagged_as_sharp_by_the_literal_wrap() {
    // heading runs 0 → -180 → 180 while turning clockwise
    let course = circle_course(90, 1000.0, -3.0);
    let literal = CurvatureAnalyzer::new(&course);
    let symmetric = CurvatureAnalyzer::new(&course).with_wrap(WrapCorrection::Symmetric);
    // station 28 heads at -91.5 - 3 * 28 = -175.5, two steps on it crosses -180
    assert_relative_eq!(symmetric.lookahead(28.0), 24.0, epsilon = 2e-2);
    assert!(literal.lookahead(28.0) > 1000.0);
}

#[test]
fn lateral_extremes_hit_the_edges_exactly() {
    let course = circle_course(30, 500.0, 7.0);
    let analyzer = CurvatureAnalyzer::new(&course);
    for pos in [0.0_f32, 4.6, 12.37, 26.99] {
        let i0 = pos.floor() as usize;
        let f = pos - i0 as f32;
        let a = course.station(i0);
        let b = course.station(i0 + 1);
        let right = a.right_edge + (b.right_edge - a.right_edge) * f;
        let left = a.left_edge + (b.left_edge - a.left_edge) * f;
        assert_eq!(analyzer.lateral_position(pos, 0.0), right);
        assert_eq!(analyzer.lateral_position(pos, 1.0), left);
    }
}

#[test]
fn lateral_middle_is_the_centre_line() {
    let course = straight_course(10);
    let analyzer = CurvatureAnalyzer::new(&course);
    let p = analyzer.lateral_position(2.5, 0.5);
    assert_relative_eq!(p.x, 25.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-4);
    // three quarters from the right edge
    let p = analyzer.lateral_position(2.5, 0.75);
    assert_relative_eq!(p.y, 20.0, epsilon = 1e-4);
}

#[test]
fn lateral_position_clamps_beyond_the_course() {
    let course = straight_course(10);
    let analyzer = CurvatureAnalyzer::new(&course);
    let end = analyzer.lateral_position((course.len() - 2) as f32, 0.5);
    assert_eq!(analyzer.lateral_position(1e6, 0.5), end);
    assert_eq!(
        analyzer.lateral_position(-3.0, 0.5),
        analyzer.lateral_position(0.0, 0.5)
    );
}
