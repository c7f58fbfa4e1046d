//! Verification of filled boards and a coarse hint heuristic.

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::{Bfs, NodeFiltered};
use unordered_pair::UnorderedPair;

use crate::color::ColorId;
use crate::grid::{lattice, Grid};
use crate::location::Location;
use crate::puzzle::TerminalPair;
use crate::step::Step;

/// A suggestion for the next cell a player could fill.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The empty cell to fill.
    pub location: Location,
    /// The color suggested for it.
    pub color: ColorId,
    /// A human-readable version of the suggestion.
    pub message: String,
}

/// Checks whether a filled grid is a legal solution for a terminal set.
///
/// The checker only reads its inputs; it works equally on a generated puzzle's
/// overlaid grid and on a player-edited board.
pub struct SolutionChecker<'a> {
    grid: &'a Grid,
    terminals: &'a [TerminalPair],
    lattice: UnGraphMap<Location, Step>,
}

impl<'a> SolutionChecker<'a> {
    /// A checker for `grid` against `terminals`.
    pub fn new(grid: &'a Grid, terminals: &'a [TerminalPair]) -> Self {
        let lattice = lattice(grid.size());
        Self { grid, terminals, lattice }
    }

    /// Whether the grid is a legal solution: every pair's endpoints are joined
    /// by a connected run of its own color, no cell is left empty, and no cell
    /// is claimed by two colors.
    ///
    /// An illegal board yields `false`; nothing here panics or errors.
    pub fn check_solution(&self) -> bool {
        self.terminals.iter().all(|pair| self.is_connected(pair))
            && self.grid.is_full()
            && !self.has_crossing()
    }

    /// Whether `pair`'s endpoints reach one another through cells of the
    /// pair's color, by breadth-first search over the same-colored portion of
    /// the lattice.
    pub fn is_connected(&self, pair: &TerminalPair) -> bool {
        let UnorderedPair(start, goal) = pair.endpoints;
        let same_color = NodeFiltered::from_fn(&self.lattice, |location: Location| {
            self.grid.cell(location).color() == Some(pair.color)
        });

        let mut search = Bfs::new(&same_color, start);
        while let Some(location) = search.next(&same_color) {
            if location == goal {
                return true;
            }
        }

        false
    }

    // A cell stores at most one color, so crossing paths cannot be expressed
    // on this grid at all. A representation that allowed transient
    // multi-occupancy (say, drag-to-draw overlap before release) would need a
    // real disjointness scan here.
    fn has_crossing(&self) -> bool {
        false
    }

    /// Suggest a cell to fill: the first empty cell, scanning in row-major
    /// order, that lies inside some pair's endpoint bounding box, tagged with
    /// the first such pair's color.
    ///
    /// This is a coarse heuristic, not a solver move; membership in the
    /// bounding box does not prove a path through the cell exists. Returns
    /// [`None`] when no empty cell remains or no pair's box covers any empty
    /// cell.
    pub fn hint(&self) -> Option<Hint> {
        for (index, cell) in self.grid.cells().indexed_iter() {
            if !cell.is_empty() {
                continue;
            }

            let location = Location::from(index);
            if let Some(pair) =
                self.terminals.iter().find(|pair| pair.bounding_box_contains(location))
            {
                return Some(Hint {
                    location,
                    color: pair.color,
                    message: format!(
                        "try filling ({}, {}) with color {}",
                        location.0,
                        location.1,
                        self.grid.display_char(pair.color)
                    ),
                });
            }
        }

        None
    }
}
