//! Unit steps between orthogonally adjacent cells of a square board.

use strum::VariantArray;

use crate::location::Location;

/// One step in a cardinal direction, as taken by paths on a square board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Step {
    /// The "forward" directions: stepping this way moves to a location indexed
    /// higher in the row-major cell array, so visiting every cell and adding
    /// only forward edges covers each adjacency exactly once.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Down, Self::Right];

    /// Attempt the step from `location` and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap below zero and therefore fail any
    /// subsequent bounds check, mirroring an out-of-bounds step on the other
    /// edges.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Determine the direction from `a` to `b` by attempting every step
    /// direction, or [`None`] if the two locations are not orthogonally
    /// adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|step| step.attempt_from(a) == b).copied()
    }
}
