//! Shortest-path routing around cells already claimed by other colors.

use std::collections::HashSet;

use petgraph::algo::astar;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::NodeFiltered;

use crate::location::Location;
use crate::step::Step;

/// Find a path from `start` to `goal` on `lattice` that avoids every location
/// in `claimed`, except that the route's own `start` and `goal` are always
/// passable.
///
/// The search is A* with unit step cost and the Manhattan distance to `goal`
/// as the heuristic, so a returned path is a shortest path under the current
/// claims and, with no obstruction, exactly Manhattan-distance long. The
/// lattice's fixed iteration order makes the route deterministic for a given
/// input.
///
/// Returns the full coordinate sequence from `start` to `goal` inclusive, or
/// [`None`] once the frontier empties without reaching `goal`.
pub fn shortest_path(
    lattice: &UnGraphMap<Location, Step>,
    start: Location,
    goal: Location,
    claimed: &HashSet<Location>,
) -> Option<Vec<Location>> {
    let open = NodeFiltered::from_fn(lattice, |location: Location| {
        location == start || location == goal || !claimed.contains(&location)
    });

    astar(
        &open,
        start,
        |location| location == goal,
        |_| 1usize,
        |location| location.manhattan_distance(goal),
    )
    .map(|(_, path)| path)
}
