use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{point_in_polygon, point_on_boundary};
use crate::math::{Point2, Vector2};
use crate::operations::probe::EdgeCrossing;

/// A simple closed polygon revolved into the lathed surface.
///
/// Vertices form a cyclic sequence: edge `i` connects vertex `i` to
/// vertex `(i + 1) % n`. The normal cache holds one entry per edge of
/// the open traversal (`n - 1` entries, no normal for the closing
/// wraparound edge) and is rebuilt after every vertex mutation.
/// Vertices change only through [`Profile::set`] and the cut engine's
/// splice.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<Point2>,
    normals: Vec<Vector2>,
}

impl Profile {
    /// Creates a profile from an ordered vertex ring.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        let mut profile = Self {
            points: Vec::new(),
            normals: Vec::new(),
        };
        profile.set(points)?;
        Ok(profile)
    }

    /// Replaces the vertex ring wholesale and rebuilds the normal cache.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given.
    pub fn set(&mut self, points: Vec<Point2>) -> Result<()> {
        if points.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "profile needs at least 3 vertices, got {}",
                points.len()
            ))
            .into());
        }
        self.points = points;
        self.recompute_normals();
        Ok(())
    }

    /// The vertex ring, in cyclic order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Cached per-edge normals for the open traversal (`len() - 1` entries).
    #[must_use]
    pub fn normals(&self) -> &[Vector2] {
        &self.normals
    }

    /// True if `point` is inside the profile or on its boundary.
    #[must_use]
    pub fn is_inside(&self, point: &Point2) -> bool {
        point_in_polygon(&self.points, point)
    }

    /// True if `point` lies on a profile edge.
    #[must_use]
    pub fn is_on_boundary(&self, point: &Point2) -> bool {
        point_on_boundary(&self.points, point)
    }

    /// Replaces the vertex run spanned by two boundary crossings.
    ///
    /// Removes the vertices at linear indices `first.edge + 1 ..= last.edge`
    /// and inserts `first.point`, the optional middle point, then
    /// `last.point` in their place. Crossings arrive in increasing edge
    /// order, so the replaced run never wraps past the ring's seam; all
    /// index arithmetic for the splice lives here.
    pub(crate) fn splice(
        &mut self,
        first: &EdgeCrossing,
        middle: Option<Point2>,
        last: &EdgeCrossing,
    ) {
        debug_assert!(first.edge <= last.edge);

        let start = first.edge + 1;
        self.points.drain(start..=last.edge);

        let mut at = start;
        self.points.insert(at, first.point);
        at += 1;
        if let Some(point) = middle {
            self.points.insert(at, point);
            at += 1;
        }
        self.points.insert(at, last.point);

        self.recompute_normals();
    }

    /// Rebuilds the per-edge normal cache.
    ///
    /// Each edge vector is rotated 90 degrees, with one global sign flip
    /// chosen from the first two edges' dot product so the whole cache
    /// shares a consistent winding. Shading-only derived data.
    fn recompute_normals(&mut self) {
        self.normals.clear();

        let first = self.points[1] - self.points[0];
        let second = self.points[2] - self.points[1];
        let flip = if first.dot(&second) > 0.0 { -1.0 } else { 1.0 };

        for pair in self.points.windows(2) {
            let edge = pair[1] - pair[0];
            self.normals
                .push(Vector2::new(-flip * edge.y, flip * edge.x));
        }
    }
}
