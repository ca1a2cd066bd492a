use crate::error::Result;
use crate::math::{Point2, Vector2};
use crate::operations::cut::{Cut, CutOutcome};
use crate::profile::Profile;
use crate::tool::Tool;

/// Offset magnitude of one directional step command.
pub const STEP: f32 = 0.1;

/// The eight directional cut commands an input handler can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    DownLeft,
    Down,
    DownRight,
    Left,
    Right,
    UpLeft,
    Up,
    UpRight,
}

impl StepDirection {
    /// The fixed offset this direction applies to the tool position.
    #[must_use]
    pub fn offset(self) -> Vector2 {
        match self {
            Self::DownLeft => Vector2::new(-STEP, -STEP),
            Self::Down => Vector2::new(0.0, -STEP),
            Self::DownRight => Vector2::new(STEP, -STEP),
            Self::Left => Vector2::new(-STEP, 0.0),
            Self::Right => Vector2::new(STEP, 0.0),
            Self::UpLeft => Vector2::new(-STEP, STEP),
            Self::Up => Vector2::new(0.0, STEP),
            Self::UpRight => Vector2::new(STEP, STEP),
        }
    }
}

/// Owns the profile and the tool and wires them to the cut engine.
///
/// One workbench is constructed at startup and handed by reference to the
/// input handler and the renderer; there is no global state.
#[derive(Debug, Clone)]
pub struct Workbench {
    profile: Profile,
    tool: Tool,
}

impl Workbench {
    /// Creates a workbench holding the given profile polygon, with the
    /// tool parked at its default position.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has fewer than 3 vertices.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        Ok(Self {
            profile: Profile::new(points)?,
            tool: Tool::new(),
        })
    }

    /// Repositions the tool without cutting (startup placement).
    pub fn place_tool(&mut self, position: Point2) {
        self.tool.move_to(position);
    }

    /// Moves the tool to `target`, cutting the profile where the travel
    /// crosses it.
    ///
    /// # Errors
    ///
    /// Propagates the cut engine's invariant violations; the profile is
    /// untouched on error.
    pub fn cut(&mut self, target: Point2) -> Result<CutOutcome> {
        Cut::new(target).execute(&mut self.profile, &mut self.tool)
    }

    /// Applies one directional step command to the tool.
    ///
    /// # Errors
    ///
    /// Same as [`Workbench::cut`].
    pub fn step(&mut self, direction: StepDirection) -> Result<CutOutcome> {
        self.cut(self.tool.position() + direction.offset())
    }

    /// The current profile (read-only; renderers draw from this).
    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The tool (read-only).
    #[must_use]
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// True if `point` is inside the profile or on its boundary.
    #[must_use]
    pub fn is_inside(&self, point: &Point2) -> bool {
        self.profile.is_inside(point)
    }

    /// True if `point` lies on a profile edge.
    #[must_use]
    pub fn is_on_boundary(&self, point: &Point2) -> bool {
        self.profile.is_on_boundary(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2 {
        Point2::new(x, y)
    }

    /// The original stock: a 3x2 rectangle with the tool off to the right.
    fn bench() -> Workbench {
        let mut bench =
            Workbench::new(vec![p(0.0, 0.0), p(0.0, 2.0), p(3.0, 2.0), p(3.0, 0.0)]).unwrap();
        bench.place_tool(p(4.0, 1.5));
        bench
    }

    #[test]
    fn startup_state_matches_the_stock() {
        let bench = bench();
        assert_eq!(bench.profile().points().len(), 4);
        assert_eq!(*bench.tool().position(), p(4.0, 1.5));
        assert!(bench.is_inside(&p(0.0, 1.0)));
    }

    #[test]
    fn step_offsets_cover_eight_directions() {
        let dirs = [
            StepDirection::DownLeft,
            StepDirection::Down,
            StepDirection::DownRight,
            StepDirection::Left,
            StepDirection::Right,
            StepDirection::UpLeft,
            StepDirection::Up,
            StepDirection::UpRight,
        ];
        for d in dirs {
            let o = d.offset();
            assert!(o.x.abs() == STEP || o.x == 0.0);
            assert!(o.y.abs() == STEP || o.y == 0.0);
            assert!(o != Vector2::new(0.0, 0.0));
        }
    }

    #[test]
    fn step_moves_the_tool_by_the_fixed_offset() {
        let mut bench = bench();
        let outcome = bench.step(StepDirection::Right).unwrap();
        assert_eq!(outcome, CutOutcome::Unchanged);
        assert_eq!(*bench.tool().position(), p(4.1, 1.5));
    }

    #[test]
    fn stepping_into_the_stock_cuts_it() {
        let mut bench = bench();
        bench.place_tool(p(3.05, 1.5));
        let outcome = bench.step(StepDirection::Left).unwrap();
        assert_eq!(outcome, CutOutcome::Notched);
        assert!(bench.profile().points().len() > 4);
    }

    #[test]
    fn cut_errors_leave_the_bench_consistent() {
        let mut bench = bench();
        let before = bench.profile().points().to_vec();
        // A degenerate zero-length travel cannot cross anything.
        let outcome = bench.cut(p(4.0, 1.5)).unwrap();
        assert_eq!(outcome, CutOutcome::Unchanged);
        assert_eq!(bench.profile().points(), &before[..]);
    }
}
