use super::{Point2, Vector2};

/// 2D cross product of two vectors.
#[must_use]
pub fn cross(v1: &Vector2, v2: &Vector2) -> f32 {
    v1.x * v2.y - v1.y * v2.x
}

/// Signed doubled area of the triangle `o`, `a`, `b`.
///
/// Positive for a counter-clockwise turn `o → a → b`, negative for
/// clockwise, zero when the three points are collinear.
#[must_use]
pub fn turn(o: &Point2, a: &Point2, b: &Point2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Same-side measure for three collinear points.
///
/// This is deliberately NOT a dot product: the y term is subtracted,
/// `(a.x−o.x)(b.x−o.x) − (a.y−o.y)(b.y−o.y)`. Callers use its sign to
/// decide whether `a` and `b` lie on the same side of `o` along a shared
/// line, and every classification in the cut engine depends on this
/// exact formula.
#[must_use]
pub fn same_side_measure(o: &Point2, a: &Point2, b: &Point2) -> f32 {
    (a.x - o.x) * (b.x - o.x) - (a.y - o.y) * (b.y - o.y)
}

/// True if `p` lies within the axis-aligned bounding box of the segment
/// `p1`–`p2`. Only meaningful for points already known to be collinear
/// with the segment.
#[must_use]
pub fn within_bounds(p1: &Point2, p2: &Point2, p: &Point2) -> bool {
    p.x >= p1.x.min(p2.x)
        && p.x <= p1.x.max(p2.x)
        && p.y >= p1.y.min(p2.y)
        && p.y <= p1.y.max(p2.y)
}

/// Squared distance between two points.
#[must_use]
pub fn distance_squared(a: &Point2, b: &Point2) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn cross_perpendicular() {
        let v1 = Vector2::new(1.0, 0.0);
        let v2 = Vector2::new(0.0, 2.0);
        assert_eq!(cross(&v1, &v2), 2.0);
        assert_eq!(cross(&v2, &v1), -2.0);
    }

    #[test]
    fn cross_parallel_is_zero() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(2.0, 4.0);
        assert_eq!(cross(&v1, &v2), 0.0);
    }

    #[test]
    fn turn_signs() {
        let o = p(0.0, 0.0);
        assert!(turn(&o, &p(1.0, 0.0), &p(1.0, 1.0)) > 0.0);
        assert!(turn(&o, &p(1.0, 0.0), &p(1.0, -1.0)) < 0.0);
        assert_eq!(turn(&o, &p(1.0, 0.0), &p(2.0, 0.0)), 0.0);
    }

    #[test]
    fn same_side_measure_vertical_between() {
        // o between a and b on a vertical line: the subtracted y term
        // makes the measure positive, unlike a true dot product.
        let m = same_side_measure(&p(0.0, 1.0), &p(0.0, 2.0), &p(0.0, 0.0));
        assert_eq!(m, 1.0);
    }

    #[test]
    fn same_side_measure_horizontal_between() {
        // Between on a horizontal line the measure is negative.
        let m = same_side_measure(&p(1.5, 2.0), &p(3.0, 2.0), &p(0.0, 2.0));
        assert_eq!(m, -2.25);
    }

    #[test]
    fn within_bounds_inclusive() {
        let p1 = p(0.0, 0.0);
        let p2 = p(2.0, 2.0);
        assert!(within_bounds(&p1, &p2, &p(1.0, 1.0)));
        assert!(within_bounds(&p1, &p2, &p(0.0, 0.0)));
        assert!(within_bounds(&p1, &p2, &p(2.0, 2.0)));
        assert!(!within_bounds(&p1, &p2, &p(2.5, 1.0)));
    }

    #[test]
    fn distance_squared_basic() {
        assert_eq!(distance_squared(&p(0.0, 0.0), &p(3.0, 4.0)), 25.0);
        assert_eq!(distance_squared(&p(1.0, 1.0), &p(1.0, 1.0)), 0.0);
    }
}
