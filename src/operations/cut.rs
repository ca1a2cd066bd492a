use crate::error::{InvariantError, Result};
use crate::math::orient_2d::distance_squared;
use crate::math::Point2;
use crate::profile::Profile;
use crate::tool::Tool;

use super::probe::{collapse_adjacent, collect_crossings, EdgeCrossing};

/// Height of the vertical clearance probe's far endpoint. Must clear the
/// profile's bounding box.
const CLEARANCE_Y: f32 = 10.0;

/// What a cut did to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutOutcome {
    /// The tool moved but its travel left the boundary alone.
    Unchanged,
    /// One boundary crossing: a notch was carved through the crossing,
    /// the tool position, and the clearance-probe crossing.
    Notched,
    /// Two boundary crossings: the spanned vertex run was removed and the
    /// boundary reconnected through the two crossings.
    Trimmed,
}

/// Moves the tool to a target position and splices the profile wherever
/// the tool's travel segment crossed the boundary.
///
/// The tool position updates unconditionally, even when the cut is a
/// no-op or aborts on an invariant violation.
#[derive(Debug, Clone, Copy)]
pub struct Cut {
    target: Point2,
}

impl Cut {
    /// Creates a cut towards `target`.
    #[must_use]
    pub fn new(target: Point2) -> Self {
        Self { target }
    }

    /// Executes the cut.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantError`] when the crossings cannot be
    /// classified safely — the clearance probe not producing exactly one
    /// crossing, a crossing pair landing on one edge or one point, or
    /// more than two travel crossings. The profile is left untouched in
    /// every error case.
    pub fn execute(&self, profile: &mut Profile, tool: &mut Tool) -> Result<CutOutcome> {
        let origin = *tool.position();
        tool.move_to(self.target);

        let mut crossings = collect_crossings(profile.points(), &self.target, &origin);
        if crossings.is_empty() {
            return Ok(CutOutcome::Unchanged);
        }
        collapse_adjacent(&mut crossings);

        match crossings.len() {
            1 => self.notch(profile, &origin, &crossings[0]),
            2 => {
                let (first, last) = (crossings[0], crossings[1]);
                if first.edge == last.edge || first.point == last.point {
                    return Err(InvariantError::CoincidentCrossings.into());
                }
                profile.splice(&first, None, &last);
                Ok(CutOutcome::Trimmed)
            }
            n => Err(InvariantError::TooManyCrossings(n).into()),
        }
    }

    /// Handles the single-crossing case: carve a notch bounded by the
    /// travel crossing, the tool position, and a vertical clearance probe.
    fn notch(
        &self,
        profile: &mut Profile,
        origin: &Point2,
        travel: &EdgeCrossing,
    ) -> Result<CutOutcome> {
        // Touches that change nothing visible: the tool stopped exactly on
        // the boundary, or it only grazed the boundary on its way out.
        if travel.point == self.target
            || (travel.point == *origin && !profile.is_inside(&self.target))
            || (profile.is_inside(origin) && !profile.is_inside(&self.target))
        {
            return Ok(CutOutcome::Unchanged);
        }

        let ceiling = Point2::new(self.target.x, CLEARANCE_Y);
        let mut upward = collect_crossings(profile.points(), &self.target, &ceiling);
        collapse_adjacent(&mut upward);
        if upward.len() != 1 {
            return Err(InvariantError::ClearanceProbeCrossings(upward.len()).into());
        }
        let clearance = upward[0];

        // Splice in edge-index order; on a shared edge the crossing closer
        // to the edge's start vertex goes first, exact ties clearance-first.
        if clearance.edge < travel.edge {
            profile.splice(&clearance, Some(self.target), travel);
        } else if clearance.edge == travel.edge {
            let start = profile.points()[clearance.edge];
            if distance_squared(&start, &clearance.point) > distance_squared(&start, &travel.point)
            {
                profile.splice(travel, Some(self.target), &clearance);
            } else {
                profile.splice(&clearance, Some(self.target), travel);
            }
        } else {
            profile.splice(travel, Some(self.target), &clearance);
        }
        Ok(CutOutcome::Notched)
    }
}
