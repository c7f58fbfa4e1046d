use unordered_pair::UnorderedPair;

use crate::color::ColorId;
use crate::grid::Grid;
use crate::location::{Dimension, Location};

/// The two fixed endpoint cells ("terminals") of one color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TerminalPair {
    /// The color owning both endpoints.
    pub color: ColorId,
    /// The endpoint cells. Connectivity between them is symmetric, so the
    /// order in which they are specified does not matter.
    pub endpoints: UnorderedPair<Location>,
}

impl TerminalPair {
    /// A terminal pair for `color` at the two given `locations`.
    pub fn new(color: ColorId, locations: (Location, Location)) -> Self {
        Self { color, endpoints: UnorderedPair::from(locations) }
    }

    /// Whether `location` lies inside the axis-aligned bounding box spanned by
    /// the two endpoints, endpoints included.
    pub fn bounding_box_contains(&self, location: Location) -> bool {
        let UnorderedPair(a, b) = self.endpoints;
        (a.0.min(b.0)..=a.0.max(b.0)).contains(&location.0)
            && (a.1.min(b.1)..=a.1.max(b.1)).contains(&location.1)
    }
}

/// One color's connector route, endpoints included: consecutive entries are
/// orthogonally adjacent and no location repeats.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColorPath {
    /// The color the route belongs to.
    pub color: ColorId,
    /// The route, from one endpoint to the other.
    pub path: Vec<Location>,
}

/// A generated puzzle: the board as presented to a player (sources only) plus
/// the terminal set and the routed reference solution.
///
/// Every terminal coordinate appears in `grid` as a [`Cell::Source`] of the
/// matching color; the interiors of any two distinct colors' solution paths
/// are disjoint.
///
/// [`Cell::Source`]: crate::cell::Cell::Source
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// Side length of the board.
    pub size: Dimension,
    /// Number of colors placed and routed.
    pub num_colors: usize,
    /// The board with each terminal marked as a source cell.
    pub grid: Grid,
    /// One terminal pair per color.
    pub terminals: Vec<TerminalPair>,
    /// The routed reference solution, one path per color in routing order.
    pub solution: Vec<ColorPath>,
}

impl Puzzle {
    /// A copy of the grid with the reference solution overlaid onto its empty
    /// cells, suitable for display or for feeding to the solution checker.
    pub fn solved_grid(&self) -> Grid {
        let mut grid = self.grid.clone();
        grid.overlay_solution(&self.solution);
        grid
    }
}
