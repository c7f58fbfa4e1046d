use std::fmt::{Display, Formatter};

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::cell::Cell;
use crate::color::ColorId;
use crate::location::{Dimension, Location};
use crate::puzzle::ColorPath;
use crate::step::Step;

/// A square board of [`Cell`]s together with the display character assigned to
/// each color.
///
/// The grid is the shared substrate of every other component: the generator
/// marks sources on it, the checker reads it back, and `Display` dumps it as
/// ASCII with sources uppercase, path cells lowercase, and empty cells as `.`.
#[derive(Clone, Debug)]
pub struct Grid {
    size: Dimension,
    cells: Array2<Cell>,
    displays: Vec<char>,
}

impl Grid {
    /// An empty `size` × `size` grid using `displays` as the per-color display
    /// characters.
    pub fn new(size: Dimension, displays: Vec<char>) -> Self {
        Self {
            size,
            cells: Array2::from_shape_simple_fn((size.get(), size.get()), Cell::default),
            displays,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Whether `location` lies on the board.
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.size.get() && location.1 < self.size.get()
    }

    /// The cell at `location`.
    pub fn cell(&self, location: Location) -> Cell {
        self.cells[location.as_index()]
    }

    /// Overwrite the cell at `location`.
    pub fn set(&mut self, location: Location, cell: Cell) {
        self.cells[location.as_index()] = cell;
    }

    /// The display character assigned to `color`.
    pub fn display_char(&self, color: ColorId) -> char {
        self.displays.get(color).copied().unwrap_or('?')
    }

    /// The number of cells holding any color.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether every cell holds a color.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Write each path's cells into the grid, filling empty cells only: sources
    /// and previously overlaid cells keep their color.
    pub fn overlay_solution(&mut self, solution: &[ColorPath]) {
        for color_path in solution {
            for &location in &color_path.path {
                if self.cell(location).is_empty() {
                    self.set(location, Cell::Path { color: color_path.color });
                }
            }
        }
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get();
        let mut out = String::with_capacity(n * (n + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(match cell {
                    Cell::Source { color } => self.display_char(*color).to_ascii_uppercase(),
                    Cell::Path { color } => self.display_char(*color).to_ascii_lowercase(),
                    Cell::Empty => '.',
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}

/// The 4-connected lattice graph over a `size` × `size` board: one node per
/// cell, one edge per orthogonal adjacency, weighted with the forward step
/// direction from the lower-indexed cell.
pub fn lattice(size: Dimension) -> UnGraphMap<Location, Step> {
    let n = size.get();
    let mut graph = UnGraphMap::with_capacity(n * n, 2 * n * (n - 1));

    for x in 0..n {
        for y in 0..n {
            let location = Location(x, y);
            graph.add_node(location);

            for step in Step::FORWARD_VARIANTS {
                let neighbor = step.attempt_from(location);
                if neighbor.0 < n && neighbor.1 < n {
                    graph.add_edge(location, neighbor, *step);
                }
            }
        }
    }

    graph
}
