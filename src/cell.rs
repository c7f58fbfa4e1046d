use crate::color::ColorId;

/// The contents of one grid cell.
///
/// A cell holds at most one color; two paths can never occupy the same cell in
/// this representation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A fixed endpoint of `color`'s connection.
    Source {
        /// The owning color.
        color: ColorId,
    },
    /// A connector cell filled with `color`.
    Path {
        /// The owning color.
        color: ColorId,
    },
    /// Not yet claimed by any color.
    #[default]
    Empty,
}

impl Cell {
    /// The color held by this cell, if any.
    pub fn color(self) -> Option<ColorId> {
        match self {
            Cell::Source { color } | Cell::Path { color } => Some(color),
            Cell::Empty => None,
        }
    }

    /// Whether this cell holds no color.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Whether this cell is a fixed endpoint.
    pub fn is_source(self) -> bool {
        matches!(self, Cell::Source { .. })
    }
}
