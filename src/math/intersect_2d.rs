use super::orient_2d::{same_side_measure, turn, within_bounds};
use super::Point2;

/// Intersection of the infinite lines through `a1`–`a2` and `b1`–`b2`.
///
/// Returns `None` when the lines are parallel (`cross(a, b) == 0`),
/// including the coincident case where every point would qualify.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_intersect(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    let a = a2 - a1;
    let b = b2 - b1;
    let s = b1 - a1;

    let denom = a.x * b.y - a.y * b.x;
    if denom == 0.0 {
        return None;
    }

    let t = (s.x * b.y - s.y * b.x) / denom;
    Some(a1 + a * t)
}

/// Representative point for two collinear, possibly overlapping segments.
///
/// Returns a shared exact endpoint when one exists and the remaining
/// endpoints sit on compatible sides of it. `None` does not mean the
/// segments are disjoint — only that no single representative point could
/// be chosen.
#[must_use]
pub fn shared_collinear_endpoint(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
) -> Option<Point2> {
    if a1 == b1 && same_side_measure(a1, a2, b2) <= 0.0 {
        return Some(*a1);
    }
    if a1 == b2 && same_side_measure(a1, a2, b1) <= 0.0 {
        return Some(*a1);
    }
    if a2 == b1 && same_side_measure(a2, a1, b2) <= 0.0 {
        return Some(*a2);
    }
    if a2 == b2 && same_side_measure(a2, a1, b1) <= 0.0 {
        return Some(*a2);
    }
    None
}

/// Bounded segment-segment intersection.
///
/// Classifies by the four orientation tests, in this order:
/// - both pairs strictly straddle: proper crossing, delegate to
///   [`line_line_intersect`];
/// - both `b` endpoints collinear with segment `a`: delegate to
///   [`shared_collinear_endpoint`];
/// - one endpoint collinear with the other segment and inside its
///   bounding box: that endpoint is the touch point;
/// - otherwise no intersection.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segment_segment_intersect(
    a1: &Point2,
    a2: &Point2,
    b1: &Point2,
    b2: &Point2,
) -> Option<Point2> {
    let c1 = turn(a1, a2, b1);
    let c2 = turn(a1, a2, b2);
    let c3 = turn(b1, b2, a1);
    let c4 = turn(b1, b2, a2);

    if c1 * c2 < 0.0 && c3 * c4 < 0.0 {
        return line_line_intersect(a1, a2, b1, b2);
    }

    if c1 == 0.0 && c2 == 0.0 {
        return shared_collinear_endpoint(a1, a2, b1, b2);
    }

    if c1 == 0.0 && within_bounds(a1, a2, b1) {
        return Some(*b1);
    }
    if c2 == 0.0 && within_bounds(a1, a2, b2) {
        return Some(*b2);
    }
    if c3 == 0.0 && within_bounds(b1, b2, a1) {
        return Some(*a1);
    }
    if c4 == 0.0 && within_bounds(b1, b2, a2) {
        return Some(*a2);
    }

    None
}
