use crate::math::Point2;

/// The cutting tool: a single tracked position plus two illustrative
/// marker points that ride along with it. Only `position` participates
/// in the cut algorithm; the markers exist for display.
#[derive(Debug, Clone)]
pub struct Tool {
    position: Point2,
    left: Point2,
    right: Point2,
}

impl Tool {
    /// Creates a tool at the stock's default parking position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point2::new(10.0, 10.0),
            left: Point2::new(9.0, 12.0),
            right: Point2::new(12.0, 2.0),
        }
    }

    /// Moves the tool to `target`, shifting the marker points by the
    /// same delta.
    pub fn move_to(&mut self, target: Point2) {
        let shift = target - self.position;
        self.position = target;
        self.left += shift;
        self.right += shift;
    }

    /// The tool's current position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    /// The left display marker.
    #[must_use]
    pub fn left(&self) -> &Point2 {
        &self.left
    }

    /// The right display marker.
    #[must_use]
    pub fn right(&self) -> &Point2 {
        &self.right
    }
}

impl Default for Tool {
    fn default() -> Self {
        Self::new()
    }
}
