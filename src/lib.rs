#![warn(missing_docs)]

//! # `effusion`
//!
//! A procedural generator and validator for [Numberlink](https://en.wikipedia.org/wiki/Numberlink)-style
//! connection puzzles as posited in the mobile game Flow Free: each color owns two terminal cells, and a
//! solution joins every pair with non-crossing orthogonal paths while covering the board.
//! Build a [`PuzzleGenerator`] for a board size and color count and call [`generate()`](PuzzleGenerator::generate)
//! with an RNG and an attempt budget, or go through the [`catalog`] module's level lookup, which serves the
//! stored levels first and generates beyond them.
//! [`SolutionChecker`] independently verifies any filled board, generated or player-edited, against a
//! terminal set.
//!
//! # Internals
//! Finding simultaneous vertex-disjoint paths for every color is NP-hard in general, and this crate makes no
//! attempt at an exact solver. Instead, generation is a rejection loop:
//!
//! 1. Terminal pairs are rejection-sampled one color at a time, requiring all coordinates distinct and each
//!    pair separated by a Manhattan distance of at least `max(3, size / 2)`.
//! 2. Colors are routed sequentially over the 4-connected lattice with an A* search (unit cost,
//!    Manhattan-distance heuristic); every committed path's interior becomes off-limits to later colors.
//! 3. The attempt is accepted only if every color routed and the paths cover at least 80% of the board;
//!    otherwise it is discarded wholesale and generation starts over on a fresh board, up to the
//!    caller-supplied attempt budget.
//!
//! The checker works on the filled board alone: a per-color breadth-first search over same-colored cells
//! establishes endpoint connectivity, and a full-occupancy scan establishes coverage. Cells hold at most one
//! color, so path crossings are unrepresentable by construction.
//! Every randomized entry point draws from a caller-supplied [`rand::Rng`], so seeded generation is fully
//! reproducible.

pub use cell::Cell;
pub use checker::{Hint, SolutionChecker};
pub use color::ColorId;
pub use generator::{GenerateFailure, PuzzleGenerator};
pub use grid::{lattice, Grid};
pub use location::{Dimension, Location};
pub use placer::{minimum_separation, place_terminals, PlacementFailure};
pub use puzzle::{ColorPath, Puzzle, TerminalPair};
pub use router::shortest_path;

pub mod catalog;
pub(crate) mod cell;
pub(crate) mod checker;
pub(crate) mod color;
pub(crate) mod generator;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod placer;
pub(crate) mod puzzle;
pub(crate) mod router;
pub mod step;
mod tests;
