//! Random placement of mutually distinct, well-separated terminal pairs.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::color::ColorId;
use crate::location::{Dimension, Location};
use crate::puzzle::TerminalPair;

/// How many coordinate pairs are sampled for one color before placement gives
/// up on the whole attempt.
const SAMPLES_PER_COLOR: usize = 100;

/// Reasons terminal placement may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PlacementFailure {
    /// `color` found no pair of free, sufficiently separated coordinates
    /// within its sampling budget. Earlier colors' placements are discarded
    /// along with the attempt; callers retry from scratch rather than work
    /// with a short terminal set.
    SeparationExhausted {
        /// The color that ran out of samples.
        color: ColorId,
    },
}

/// The minimum Manhattan distance required between the two endpoints of a
/// pair: `max(3, size / 2)`.
pub fn minimum_separation(size: Dimension) -> usize {
    (size.get() / 2).max(3)
}

/// Place exactly `num_colors` terminal pairs on a `size` × `size` board.
///
/// All `2 * num_colors` coordinates are pairwise distinct and each pair is
/// separated by at least [`minimum_separation`]. Colors are placed one at a
/// time by rejection sampling; an accepted placement is never revisited for
/// the benefit of a later color.
pub fn place_terminals(
    size: Dimension,
    num_colors: usize,
    rng: &mut impl Rng,
) -> Result<Vec<TerminalPair>, PlacementFailure> {
    let min_distance = minimum_separation(size);
    let mut used: HashSet<Location> = HashSet::with_capacity(2 * num_colors);
    let mut pairs = Vec::with_capacity(num_colors);

    for color in 0..num_colors {
        let mut placed = false;

        for _ in 0..SAMPLES_PER_COLOR {
            let a = random_location(size, rng);
            let b = random_location(size, rng);

            // distance >= 3 also rules out a == b
            if a.manhattan_distance(b) < min_distance || used.contains(&a) || used.contains(&b) {
                continue;
            }

            used.insert(a);
            used.insert(b);
            pairs.push(TerminalPair::new(color, (a, b)));
            placed = true;
            break;
        }

        if !placed {
            debug!(
                "color {} found no free pair at distance >= {} within {} samples",
                color, min_distance, SAMPLES_PER_COLOR
            );
            return Err(PlacementFailure::SeparationExhausted { color });
        }
    }

    Ok(pairs)
}

fn random_location(size: Dimension, rng: &mut impl Rng) -> Location {
    Location(rng.random_range(0..size.get()), rng.random_range(0..size.get()))
}
