#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZero;

    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use unordered_pair::UnorderedPair;

    use crate::catalog::{
        catalog, params_for_level, puzzle_for_level, validate_level, Difficulty, LevelPuzzle,
    };
    use crate::cell::Cell;
    use crate::checker::SolutionChecker;
    use crate::generator::{GenerateFailure, PuzzleGenerator};
    use crate::grid::{lattice, Grid};
    use crate::location::{Dimension, Location};
    use crate::placer::{minimum_separation, place_terminals, PlacementFailure};
    use crate::puzzle::TerminalPair;
    use crate::router::shortest_path;
    use crate::step::Step;

    fn dim(n: usize) -> Dimension {
        NonZero::new(n).unwrap()
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn assert_valid_path(path: &[Location], size: Dimension) {
        assert!(path.iter().all(|l| l.0 < size.get() && l.1 < size.get()), "path leaves the board");
        assert_eq!(path.iter().unique().count(), path.len(), "path repeats a cell");
        for (a, b) in path.iter().tuple_windows() {
            assert!(
                Step::direction_to(*a, *b).is_some(),
                "{:?} and {:?} are not orthogonally adjacent",
                a,
                b
            );
        }
    }

    /// The first stored level's board with its reference solution overlaid.
    fn level_one_filled() -> (Grid, &'static [TerminalPair]) {
        let record = &catalog()[0];
        let mut grid = Grid::new(record.size, vec!['A', 'B', 'C']);
        for pair in &record.endpoints {
            let UnorderedPair(a, b) = pair.endpoints;
            grid.set(a, Cell::Source { color: pair.color });
            grid.set(b, Cell::Source { color: pair.color });
        }
        grid.overlay_solution(record.solution.as_ref().unwrap());
        (grid, &record.endpoints)
    }

    #[test]
    fn steps_connect_adjacent_cells_only() {
        assert_eq!(Step::direction_to(Location(0, 0), Location(0, 1)), Some(Step::Down));
        assert_eq!(Step::direction_to(Location(3, 2), Location(2, 2)), Some(Step::Left));
        assert_eq!(Step::direction_to(Location(0, 0), Location(2, 0)), None);
        assert_eq!(Step::direction_to(Location(0, 0), Location(1, 1)), None);
    }

    #[test]
    fn placed_terminals_are_distinct_and_separated() {
        let size = dim(8);
        let pairs = place_terminals(size, 5, &mut seeded(0xC0FFEE)).unwrap();

        assert_eq!(pairs.len(), 5);
        let coordinates = pairs
            .iter()
            .flat_map(|pair| [pair.endpoints.0, pair.endpoints.1])
            .collect_vec();
        assert_eq!(coordinates.iter().unique().count(), 10);
        assert!(coordinates.iter().all(|l| l.0 < 8 && l.1 < 8));

        assert_eq!(minimum_separation(size), 4);
        for pair in &pairs {
            assert!(pair.endpoints.0.manhattan_distance(pair.endpoints.1) >= 4);
        }
    }

    #[test]
    fn placement_fails_when_endpoints_cannot_fit() {
        // 13 colors need 26 distinct cells; a 5x5 board has 25
        let result = place_terminals(dim(5), 13, &mut seeded(1));
        assert!(matches!(result, Err(PlacementFailure::SeparationExhausted { .. })));
    }

    #[test]
    fn unobstructed_route_has_manhattan_length() {
        let graph = lattice(dim(5));
        let (start, goal) = (Location(0, 0), Location(4, 2));

        let path = shortest_path(&graph, start, goal, &HashSet::new()).unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_eq!(path.len(), start.manhattan_distance(goal) + 1);
        assert_valid_path(&path, dim(5));
    }

    #[test]
    fn route_detours_around_claimed_cells() {
        let graph = lattice(dim(5));
        // wall off column 1 except its bottom cell
        let claimed: HashSet<Location> =
            [Location(1, 0), Location(1, 1), Location(1, 2), Location(1, 3)].into();

        let path = shortest_path(&graph, Location(0, 0), Location(2, 0), &claimed).unwrap();
        assert_eq!(path.len(), 11);
        assert!(path.iter().all(|location| !claimed.contains(location)));
        assert_valid_path(&path, dim(5));
    }

    #[test]
    fn route_reports_dead_ends() {
        let graph = lattice(dim(3));
        let claimed: HashSet<Location> =
            [Location(1, 0), Location(1, 1), Location(1, 2)].into();

        assert_eq!(shortest_path(&graph, Location(0, 1), Location(2, 1), &claimed), None);
    }

    #[test]
    fn generated_puzzle_upholds_invariants() {
        let size = dim(5);
        let puzzle =
            PuzzleGenerator::new(size, 3).generate(&mut seeded(0x5EED), 5000).unwrap();

        assert_eq!(puzzle.num_colors, 3);
        assert_eq!(puzzle.terminals.len(), 3);
        assert_eq!(puzzle.solution.len(), 3);

        let terminal_cells: HashSet<Location> = puzzle
            .terminals
            .iter()
            .flat_map(|pair| [pair.endpoints.0, pair.endpoints.1])
            .collect();
        assert_eq!(terminal_cells.len(), 6);
        for pair in &puzzle.terminals {
            for location in [pair.endpoints.0, pair.endpoints.1] {
                assert!(puzzle.grid.contains(location));
                assert_eq!(puzzle.grid.cell(location), Cell::Source { color: pair.color });
            }
        }

        let mut interiors = Vec::new();
        for (pair, color_path) in puzzle.terminals.iter().zip(&puzzle.solution) {
            assert_eq!(color_path.color, pair.color);
            assert_eq!(color_path.path.first(), Some(&pair.endpoints.0));
            assert_eq!(color_path.path.last(), Some(&pair.endpoints.1));
            assert_valid_path(&color_path.path, size);
            interiors.extend(color_path.path[1..color_path.path.len() - 1].iter().copied());
        }
        // interiors of distinct colors never intersect, nor touch any terminal
        assert_eq!(interiors.iter().unique().count(), interiors.len());
        assert!(interiors.iter().all(|location| !terminal_cells.contains(location)));

        let filled: usize = puzzle.solution.iter().map(|cp| cp.path.len()).sum();
        assert!(5 * filled >= 4 * 25, "only {} of 25 cells covered", filled);
        assert_eq!(puzzle.solved_grid().occupied_count(), filled);
    }

    #[test]
    fn generation_is_reproducible_for_a_seed() {
        let first = PuzzleGenerator::new(dim(6), 4).generate(&mut seeded(42), 5000).unwrap();
        let second = PuzzleGenerator::new(dim(6), 4).generate(&mut seeded(42), 5000).unwrap();

        assert_eq!(first.terminals, second.terminals);
        assert_eq!(first.solution, second.solution);
    }

    #[test]
    fn generation_surfaces_attempt_exhaustion() {
        // impossible placement, so every attempt is discarded
        let result = PuzzleGenerator::new(dim(5), 13).generate(&mut seeded(2), 4);
        assert_eq!(result.unwrap_err(), GenerateFailure::AttemptsExhausted { attempts: 4 });
    }

    #[test]
    fn stored_level_solution_satisfies_checker() {
        let record = &catalog()[0];
        assert!(validate_level(record));

        let (grid, endpoints) = level_one_filled();
        assert_eq!(format!("{}", grid), "Aaaaa
BCcca
bccca
bccCa
bbbBA
");
        assert!(SolutionChecker::new(&grid, endpoints).check_solution());
    }

    #[test]
    fn checker_rejects_missing_cell() {
        let (mut grid, endpoints) = level_one_filled();
        grid.set(Location(2, 2), Cell::Empty);

        assert!(!SolutionChecker::new(&grid, endpoints).check_solution());
    }

    #[test]
    fn checker_rejects_recolored_run() {
        let (mut grid, endpoints) = level_one_filled();
        // the board stays fully covered, but color 0's run is now severed
        grid.set(Location(4, 2), Cell::Path { color: 1 });

        assert!(grid.is_full());
        let checker = SolutionChecker::new(&grid, endpoints);
        assert!(!checker.is_connected(&endpoints[0]));
        assert!(!checker.check_solution());
    }

    #[test]
    fn level_lookup_returns_stored_records() {
        match puzzle_for_level(1, &mut seeded(3), 1).unwrap() {
            LevelPuzzle::Stored(record) => {
                assert_eq!(record.id, 1);
                assert_eq!(record.size, dim(5));
                assert_eq!(record.difficulty, Difficulty::Easy);
                assert_eq!(record.endpoints.len(), 3);
            }
            LevelPuzzle::Generated(_) => panic!("level 1 should come from the stored set"),
        }
    }

    #[test]
    fn level_lookup_generates_past_the_catalog() {
        assert_eq!(params_for_level(11), (dim(6), 6));
        assert_eq!(params_for_level(30), (dim(8), 10));
        assert_eq!(params_for_level(100), (dim(12), 10));

        match puzzle_for_level(11, &mut seeded(4), 5000).unwrap() {
            LevelPuzzle::Generated(puzzle) => {
                assert_eq!(puzzle.size, dim(6));
                assert_eq!(puzzle.num_colors, 6);
            }
            LevelPuzzle::Stored(_) => panic!("level 11 lies beyond the stored set"),
        }
    }

    #[test]
    fn hint_suggests_color_whose_box_covers_the_gap() {
        let mut grid = Grid::new(dim(5), vec!['A']);
        let endpoints = [TerminalPair::new(0, (Location(0, 0), Location(2, 2)))];
        grid.set(Location(0, 0), Cell::Source { color: 0 });
        grid.set(Location(2, 2), Cell::Source { color: 0 });

        let hint = SolutionChecker::new(&grid, &endpoints).hint().unwrap();
        // first empty cell in row-major order inside the pair's bounding box
        assert_eq!(hint.location, Location(1, 0));
        assert_eq!(hint.color, 0);
        assert_eq!(hint.message, "try filling (1, 0) with color A");
    }

    #[test]
    fn hint_skips_cells_outside_every_box() {
        let mut grid = Grid::new(dim(5), vec!['A']);
        let endpoints = [TerminalPair::new(0, (Location(3, 3), Location(4, 4)))];
        grid.set(Location(3, 3), Cell::Source { color: 0 });
        grid.set(Location(4, 4), Cell::Source { color: 0 });
        grid.set(Location(4, 3), Cell::Path { color: 0 });
        grid.set(Location(3, 4), Cell::Path { color: 0 });

        // plenty of empty cells remain, but none inside the only bounding box
        assert_eq!(SolutionChecker::new(&grid, &endpoints).hint(), None);
    }

    #[test]
    fn no_hint_on_a_full_board() {
        let (grid, endpoints) = level_one_filled();
        assert_eq!(SolutionChecker::new(&grid, endpoints).hint(), None);
    }

    #[test]
    fn records_without_solutions_validate_trivially() {
        let record = &catalog()[1];
        assert!(record.solution.is_none());
        assert!(validate_level(record));
    }

    #[test]
    fn stored_records_stay_inside_their_boards() {
        for (index, record) in catalog().iter().enumerate() {
            assert_eq!(record.id as usize, index + 1);

            let n = record.size.get();
            let coordinates = record
                .endpoints
                .iter()
                .flat_map(|pair| [pair.endpoints.0, pair.endpoints.1])
                .collect_vec();
            assert_eq!(
                coordinates.iter().unique().count(),
                coordinates.len(),
                "level {} reuses a terminal cell",
                record.id
            );
            assert!(coordinates.iter().all(|l| l.0 < n && l.1 < n));

            for obstacle in &record.obstacles {
                assert!(obstacle.position.0 < n && obstacle.position.1 < n);
                if let Some(target) = obstacle.target {
                    assert!(target.0 < n && target.1 < n);
                }
            }
        }
    }
}
