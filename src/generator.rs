//! Assembly of complete puzzles: place terminals, route every color, accept or
//! discard.

use std::collections::HashSet;

use log::debug;
use petgraph::graphmap::UnGraphMap;
use rand::Rng;
use unordered_pair::UnorderedPair;

use crate::cell::Cell;
use crate::color::{default_displays, ColorId};
use crate::grid::{lattice, Grid};
use crate::location::{Dimension, Location};
use crate::placer::{place_terminals, PlacementFailure};
use crate::puzzle::{ColorPath, Puzzle};
use crate::router::shortest_path;
use crate::step::Step;

/// Reasons generation may fail outright.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GenerateFailure {
    /// Every attempt was discarded. Small boards with many colors can make the
    /// coverage threshold statistically unlikely, so the budget is the
    /// caller's call.
    AttemptsExhausted {
        /// The attempt budget that was spent.
        attempts: usize,
    },
}

/// Reasons one attempt gets discarded. Attempt state is never reused: the next
/// attempt starts from an empty board.
#[derive(Debug)]
enum AttemptFailure {
    Placement(PlacementFailure),
    NoRoute { color: ColorId },
    LowCoverage { filled: usize, total: usize },
}

/// Builds puzzles for a fixed board size and color count.
///
/// Each attempt places terminals, routes the colors one at a time in placement
/// order, and accepts the result only if every color routed and the paths
/// cover at least 80% of the board. Routing is greedy: a committed path's
/// interior is off-limits to every later color, which can strand a routable
/// color behind an earlier route. Such attempts are simply discarded, so this
/// is a heuristic generator, not an exact disjoint-paths solver.
pub struct PuzzleGenerator {
    size: Dimension,
    num_colors: usize,
}

impl PuzzleGenerator {
    /// A generator for `size` × `size` boards with `num_colors` colors.
    pub fn new(size: Dimension, num_colors: usize) -> Self {
        Self { size, num_colors }
    }

    /// Generate a puzzle, spending at most `max_attempts` attempts.
    ///
    /// Generation draws only from `rng`, so a seeded generator reproduces its
    /// output exactly.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        max_attempts: usize,
    ) -> Result<Puzzle, GenerateFailure> {
        let lattice = lattice(self.size);

        for attempt in 1..=max_attempts {
            match self.attempt(rng, &lattice) {
                Ok(puzzle) => {
                    debug!("accepted a {} color puzzle on attempt {}", self.num_colors, attempt);
                    return Ok(puzzle);
                }
                Err(AttemptFailure::Placement(PlacementFailure::SeparationExhausted {
                    color,
                })) => debug!("attempt {}: no placement for color {}", attempt, color),
                Err(AttemptFailure::NoRoute { color }) => {
                    debug!("attempt {}: color {} has no route left", attempt, color)
                }
                Err(AttemptFailure::LowCoverage { filled, total }) => {
                    debug!("attempt {}: only {} of {} cells covered", attempt, filled, total)
                }
            }
        }

        Err(GenerateFailure::AttemptsExhausted { attempts: max_attempts })
    }

    fn attempt(
        &self,
        rng: &mut impl Rng,
        lattice: &UnGraphMap<Location, Step>,
    ) -> Result<Puzzle, AttemptFailure> {
        let terminals =
            place_terminals(self.size, self.num_colors, rng).map_err(AttemptFailure::Placement)?;

        let mut grid = Grid::new(self.size, default_displays(self.num_colors));
        for pair in &terminals {
            let UnorderedPair(a, b) = pair.endpoints;
            grid.set(a, Cell::Source { color: pair.color });
            grid.set(b, Cell::Source { color: pair.color });
        }

        // every terminal is claimed up front, so no route may cross a foreign
        // source even before that color has been routed
        let mut claimed: HashSet<Location> = terminals
            .iter()
            .flat_map(|pair| [pair.endpoints.0, pair.endpoints.1])
            .collect();

        let mut solution = Vec::with_capacity(terminals.len());
        for pair in &terminals {
            let UnorderedPair(start, goal) = pair.endpoints;
            let path = shortest_path(lattice, start, goal, &claimed)
                .ok_or(AttemptFailure::NoRoute { color: pair.color })?;

            claimed.extend(path[1..path.len() - 1].iter().copied());
            solution.push(ColorPath { color: pair.color, path });
        }

        // committed paths are disjoint, endpoints included, so the filled cell
        // count is just the sum of path lengths
        let filled: usize = solution.iter().map(|color_path| color_path.path.len()).sum();
        let total = self.size.get() * self.size.get();
        if 5 * filled < 4 * total {
            return Err(AttemptFailure::LowCoverage { filled, total });
        }

        Ok(Puzzle {
            size: self.size,
            num_colors: self.num_colors,
            grid,
            terminals,
            solution,
        })
    }
}
