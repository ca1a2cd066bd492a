use super::orient_2d::{same_side_measure, turn};
use super::Point2;

/// True if `point` lies on the boundary of the closed polygon `points`.
///
/// A point is on edge (prev, i) when it is collinear with the edge and
/// the same-side measure against the two endpoints is strictly positive.
/// The measure's subtracted y term makes this test asymmetric: interiors
/// of vertical edges qualify, interiors of horizontal edges do not and
/// fall through to the parity test in [`point_in_polygon`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_on_boundary(points: &[Point2], point: &Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        if turn(point, &points[i], &points[j]) == 0.0
            && same_side_measure(point, &points[i], &points[j]) > 0.0
        {
            return true;
        }
        j = i;
    }
    false
}

/// True if `point` lies inside the closed polygon `points` or on its
/// boundary as classified by [`point_on_boundary`].
///
/// The interior test is the standard +x ray-crossing parity walk.
#[must_use]
pub fn point_in_polygon(points: &[Point2], point: &Point2) -> bool {
    if point_on_boundary(points, point) {
        return true;
    }

    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&points[i], &points[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(0.0, 2.0), p(3.0, 2.0), p(3.0, 0.0)]
    }

    #[test]
    fn vertical_edge_midpoints_are_on_boundary() {
        let sq = square();
        assert!(point_on_boundary(&sq, &p(0.0, 1.0)));
        assert!(point_on_boundary(&sq, &p(3.0, 1.0)));
    }

    #[test]
    fn horizontal_edge_midpoints_are_not_on_boundary() {
        // The same-side measure subtracts the y term, so horizontal edge
        // interiors never satisfy the strict-positive test.
        let sq = square();
        assert!(!point_on_boundary(&sq, &p(1.5, 0.0)));
        assert!(!point_on_boundary(&sq, &p(1.5, 2.0)));
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(point_in_polygon(&square(), &p(1.5, 1.0)));
    }

    #[test]
    fn exterior_points_are_outside() {
        let sq = square();
        assert!(!point_in_polygon(&sq, &p(4.0, 1.0)));
        assert!(!point_in_polygon(&sq, &p(-0.5, 1.0)));
        assert!(!point_in_polygon(&sq, &p(1.5, 2.5)));
    }

    #[test]
    fn boundary_classification_asymmetry() {
        // The parity walk counts the bottom edge but not the top one:
        // bottom midpoint reads inside, top midpoint reads outside.
        let sq = square();
        assert!(point_in_polygon(&sq, &p(1.5, 0.0)));
        assert!(!point_in_polygon(&sq, &p(1.5, 2.0)));
    }

    #[test]
    fn left_edge_point_is_inside() {
        assert!(point_in_polygon(&square(), &p(0.0, 1.0)));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // C shape opening right; the notch interior is outside material.
        let c = vec![
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(3.0, 2.0),
            p(3.0, 3.0),
            p(0.0, 3.0),
        ];
        assert!(!point_in_polygon(&c, &p(2.0, 1.5)));
        assert!(point_in_polygon(&c, &p(0.5, 1.5)));
        assert!(point_in_polygon(&c, &p(2.0, 0.5)));
    }
}
