use crate::math::intersect_2d::segment_segment_intersect;
use crate::math::Point2;

/// A boundary crossing: the intersection point and the index of the
/// polygon edge it lies on (edge `i` starts at vertex `i`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCrossing {
    pub edge: usize,
    pub point: Point2,
}

/// Intersects the probe segment `p1`–`p2` with every polygon edge.
///
/// Crossings are returned in increasing edge-index order, which the cut
/// engine's splice ordering depends on.
#[must_use]
pub fn collect_crossings(points: &[Point2], p1: &Point2, p2: &Point2) -> Vec<EdgeCrossing> {
    let n = points.len();
    let mut crossings = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        if let Some(point) = segment_segment_intersect(&points[i], &points[j], p1, p2) {
            crossings.push(EdgeCrossing { edge: i, point });
        }
    }
    crossings
}

/// Collapses runs of adjacent crossings with exactly equal points.
///
/// A single left-to-right pass: of each equal adjacent pair the earlier
/// entry is dropped, so a run survives as its last entry (the highest
/// edge index). Equal points separated by a different point are NOT
/// merged. Applying the pass twice changes nothing.
pub fn collapse_adjacent(crossings: &mut Vec<EdgeCrossing>) {
    let mut i = 0;
    while i + 1 < crossings.len() {
        if crossings[i].point == crossings[i + 1].point {
            crossings.remove(i);
        } else {
            i += 1;
        }
    }
}
