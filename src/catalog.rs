//! The stored level set and the level lookup entry point.
//!
//! The first ten levels ship as fixed [`LevelRecord`]s; any level beyond them
//! is generated on demand from a size/color formula. Obstacles are carried on
//! records for the benefit of outer layers but are never interpreted by
//! placement, routing, or checking.

use std::num::NonZero;
use std::sync::LazyLock;

use itertools::Itertools;
use rand::Rng;
use strum::Display;
use unordered_pair::UnorderedPair;

use crate::cell::Cell;
use crate::checker::SolutionChecker;
use crate::color::{default_displays, ColorId};
use crate::generator::{GenerateFailure, PuzzleGenerator};
use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::puzzle::{ColorPath, Puzzle, TerminalPair};

/// Difficulty grade carried on a stored level.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Master,
    Grandmaster,
}

/// Obstacle flavor carried on a stored level.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ObstacleKind {
    /// An impassable cell.
    Wall,
    /// A cell paths slide across.
    Ice,
    /// A cell that teleports a path to its `target` partner.
    Portal,
}

/// A map feature attached to a stored level. Opaque to this crate's logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Obstacle {
    /// What kind of feature sits on the cell.
    pub kind: ObstacleKind,
    /// The cell the feature occupies.
    pub position: Location,
    /// The exit cell, for kinds that teleport.
    pub target: Option<Location>,
}

/// A level as stored in the catalog: terminals, optionally a precomputed
/// solution, optionally obstacles.
#[derive(Clone, Debug)]
pub struct LevelRecord {
    /// 1-based level number.
    pub id: u32,
    /// Side length of the board.
    pub size: Dimension,
    /// Difficulty grade.
    pub difficulty: Difficulty,
    /// One terminal pair per color.
    pub endpoints: Vec<TerminalPair>,
    /// A reference solution, where one has been stored.
    pub solution: Option<Vec<ColorPath>>,
    /// Map features, carried through untouched.
    pub obstacles: Vec<Obstacle>,
}

/// The result of a level lookup.
pub enum LevelPuzzle {
    /// A level inside the stored set, returned as-is.
    Stored(&'static LevelRecord),
    /// A level beyond the stored set, generated procedurally.
    Generated(Puzzle),
}

fn dim(n: usize) -> Dimension {
    NonZero::new(n).unwrap()
}

fn pair(color: ColorId, a: (usize, usize), b: (usize, usize)) -> TerminalPair {
    TerminalPair::new(color, (Location(a.0, a.1), Location(b.0, b.1)))
}

fn path(color: ColorId, cells: &[(usize, usize)]) -> ColorPath {
    ColorPath { color, path: cells.iter().map(|&(x, y)| Location(x, y)).collect_vec() }
}

static CATALOG: LazyLock<Vec<LevelRecord>> = LazyLock::new(|| {
    vec![
        LevelRecord {
            id: 1,
            size: dim(5),
            difficulty: Difficulty::Easy,
            endpoints: vec![pair(0, (0, 0), (4, 4)), pair(1, (0, 1), (3, 4)), pair(2, (1, 1), (3, 3))],
            solution: Some(vec![
                path(0, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]),
                path(1, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4)]),
                path(2, &[(1, 1), (2, 1), (3, 1), (3, 2), (2, 2), (1, 2), (1, 3), (2, 3), (3, 3)]),
            ]),
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 2,
            size: dim(5),
            difficulty: Difficulty::Medium,
            endpoints: vec![
                pair(0, (0, 0), (2, 2)),
                pair(1, (4, 0), (4, 4)),
                pair(2, (0, 3), (3, 1)),
                pair(3, (1, 4), (3, 4)),
            ],
            solution: None,
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 3,
            size: dim(6),
            difficulty: Difficulty::Medium,
            endpoints: vec![
                pair(0, (0, 0), (5, 5)),
                pair(1, (0, 5), (5, 0)),
                pair(2, (1, 1), (4, 4)),
                pair(3, (2, 2), (3, 3)),
            ],
            solution: None,
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 4,
            size: dim(6),
            difficulty: Difficulty::Hard,
            endpoints: vec![
                pair(0, (0, 0), (3, 2)),
                pair(1, (5, 0), (2, 3)),
                pair(2, (0, 5), (5, 5)),
                pair(3, (1, 1), (4, 1)),
                pair(4, (1, 4), (4, 3)),
            ],
            solution: None,
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 5,
            size: dim(7),
            difficulty: Difficulty::Hard,
            endpoints: vec![
                pair(0, (0, 0), (6, 6)),
                pair(1, (0, 6), (6, 0)),
                pair(2, (3, 0), (3, 6)),
                pair(3, (0, 3), (6, 3)),
                pair(4, (1, 1), (5, 5)),
            ],
            solution: None,
            obstacles: vec![Obstacle {
                kind: ObstacleKind::Wall,
                position: Location(3, 3),
                target: None,
            }],
        },
        LevelRecord {
            id: 6,
            size: dim(7),
            difficulty: Difficulty::Expert,
            endpoints: vec![
                pair(0, (0, 0), (4, 3)),
                pair(1, (6, 0), (2, 4)),
                pair(2, (0, 6), (6, 6)),
                pair(3, (1, 1), (5, 2)),
                pair(4, (2, 5), (4, 5)),
                pair(5, (3, 2), (3, 4)),
            ],
            solution: None,
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 7,
            size: dim(8),
            difficulty: Difficulty::Expert,
            endpoints: vec![
                pair(0, (0, 0), (7, 7)),
                pair(1, (0, 7), (7, 0)),
                pair(2, (2, 1), (5, 6)),
                pair(3, (1, 3), (6, 4)),
                pair(4, (3, 0), (4, 7)),
                pair(5, (0, 4), (7, 3)),
            ],
            solution: None,
            obstacles: vec![
                Obstacle { kind: ObstacleKind::Ice, position: Location(3, 3), target: None },
                Obstacle { kind: ObstacleKind::Ice, position: Location(4, 4), target: None },
            ],
        },
        LevelRecord {
            id: 8,
            size: dim(8),
            difficulty: Difficulty::Master,
            endpoints: vec![
                pair(0, (0, 0), (5, 3)),
                pair(1, (7, 0), (2, 5)),
                pair(2, (0, 7), (7, 7)),
                pair(3, (1, 1), (6, 2)),
                pair(4, (2, 6), (5, 4)),
                pair(5, (3, 2), (4, 5)),
                pair(6, (0, 3), (7, 4)),
            ],
            solution: None,
            obstacles: Vec::new(),
        },
        LevelRecord {
            id: 9,
            size: dim(9),
            difficulty: Difficulty::Master,
            endpoints: vec![
                pair(0, (0, 0), (8, 8)),
                pair(1, (0, 8), (8, 0)),
                pair(2, (4, 0), (4, 8)),
                pair(3, (0, 4), (8, 4)),
                pair(4, (2, 2), (6, 6)),
                pair(5, (2, 6), (6, 2)),
                pair(6, (1, 4), (7, 4)),
            ],
            solution: None,
            obstacles: vec![Obstacle {
                kind: ObstacleKind::Portal,
                position: Location(3, 3),
                target: Some(Location(5, 5)),
            }],
        },
        LevelRecord {
            id: 10,
            size: dim(10),
            difficulty: Difficulty::Grandmaster,
            endpoints: vec![
                pair(0, (0, 0), (9, 9)),
                pair(1, (0, 9), (9, 0)),
                pair(2, (3, 0), (6, 9)),
                pair(3, (0, 3), (9, 6)),
                pair(4, (1, 1), (8, 8)),
                pair(5, (1, 8), (8, 1)),
                pair(6, (4, 2), (5, 7)),
                pair(7, (2, 4), (7, 5)),
            ],
            solution: None,
            obstacles: vec![
                Obstacle { kind: ObstacleKind::Wall, position: Location(4, 4), target: None },
                Obstacle { kind: ObstacleKind::Wall, position: Location(5, 5), target: None },
            ],
        },
    ]
});

/// The stored levels, in order of their 1-based ids.
pub fn catalog() -> &'static [LevelRecord] {
    &CATALOG
}

/// Board size and color count used to generate a 1-based `level` beyond the
/// stored set: `size = min(5 + level / 10, 12)`,
/// `num_colors = min(3 + level / 3, 10)`.
pub fn params_for_level(level: usize) -> (Dimension, usize) {
    let size = (5 + level / 10).min(12);
    let num_colors = (3 + level / 3).min(10);
    (dim(size), num_colors)
}

/// Look up the puzzle for a 1-based `level`.
///
/// Levels inside the stored set come back verbatim; anything else is generated
/// with [`params_for_level`], spending at most `max_attempts` generation
/// attempts.
pub fn puzzle_for_level(
    level: usize,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Result<LevelPuzzle, GenerateFailure> {
    if let Some(record) = level.checked_sub(1).and_then(|index| catalog().get(index)) {
        return Ok(LevelPuzzle::Stored(record));
    }

    let (size, num_colors) = params_for_level(level);
    PuzzleGenerator::new(size, num_colors)
        .generate(rng, max_attempts)
        .map(LevelPuzzle::Generated)
}

/// Check a stored level's solution: rebuild its board from the endpoints,
/// overlay the stored paths onto the empty cells, and run the solution
/// checker.
///
/// A record without a stored solution passes trivially: nothing disproves it,
/// but nothing proves it solvable either.
pub fn validate_level(record: &LevelRecord) -> bool {
    let Some(solution) = &record.solution else {
        return true;
    };

    let mut grid = Grid::new(record.size, default_displays(record.endpoints.len()));
    for pair in &record.endpoints {
        let UnorderedPair(a, b) = pair.endpoints;
        grid.set(a, Cell::Source { color: pair.color });
        grid.set(b, Cell::Source { color: pair.color });
    }
    grid.overlay_solution(solution);

    SolutionChecker::new(&grid, &record.endpoints).check_solution()
}
