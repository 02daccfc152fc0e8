use std::collections::{HashSet, VecDeque};

use grid_solver::{
    algorithms::{Algorithm, Cost, SearchResult},
    grid::{Cell, Grid, Heuristic},
};
use rand::{Rng, RngExt, SeedableRng, rngs::StdRng};

fn random_grid(rng: &mut impl Rng) -> Grid {
    let rows = rng.random_range(2..12);
    let cols = rng.random_range(2..12);
    let mut symbols: Vec<Vec<char>> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| if rng.random_range(0..100) < 30 { 'X' } else { '0' })
                .collect()
        })
        .collect();

    let start = (rng.random_range(0..rows), rng.random_range(0..cols));
    let mut goal = start;
    while goal == start {
        goal = (rng.random_range(0..rows), rng.random_range(0..cols));
    }
    symbols[start.0][start.1] = 'S';
    symbols[goal.0][goal.1] = 'E';

    let text: String = symbols
        .into_iter()
        .map(|row| row.into_iter().collect::<String>() + "\n")
        .collect();
    Grid::load(&text).unwrap()
}

fn sample_grids() -> Vec<Grid> {
    // Fixed seed so failures reproduce.
    let mut rng = StdRng::seed_from_u64(42);
    let mut grids: Vec<Grid> = (0..200).map(|_| random_grid(&mut rng)).collect();
    for text in [
        "S0X\n0X0\n00E\n",
        "S000000\n0XXXXX0\n0X000X0\n0X0E0X0\n0X0XXX0\n0000000\n",
        "S0000\nXXXX0\n00000\n0XXXX\n0000E\n",
        "SX\nXE\n",
    ] {
        grids.push(Grid::load(text).unwrap());
    }
    grids
}

/// Cells reachable from the start, the start included.
fn component_size(grid: &Grid) -> usize {
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(cell) = queue.pop_front() {
        for next in grid.neighbors(cell) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

fn assert_valid_path(grid: &Grid, result: &SearchResult) {
    let path = result.path();
    assert_eq!(path.first(), Some(&grid.start()), "{}", result.name());
    assert_eq!(path.last(), Some(&grid.goal()), "{}", result.name());

    let unique: HashSet<Cell> = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "{} repeats a cell", result.name());

    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{}: {} -> {}", result.name(), pair[0], pair[1]);
        assert!(grid.is_walkable(pair[1]));
    }

    assert_eq!(result.cost(), Cost::Finite(path.len() - 1));
}

#[test]
fn optimal_strategies_agree_on_cost() {
    for grid in sample_grids() {
        let bfs = Algorithm::Bfs.run(&grid);
        for algorithm in [
            Algorithm::Dijkstra,
            Algorithm::AStar(Heuristic::Manhattan),
            Algorithm::AStar(Heuristic::Euclidean),
        ] {
            assert_eq!(algorithm.run(&grid).cost(), bfs.cost(), "{algorithm}");
        }

        for heuristic in Heuristic::all() {
            let greedy = Algorithm::Greedy(heuristic).run(&grid);
            assert_eq!(greedy.is_reachable(), bfs.is_reachable());
            if let (Some(g), Some(best)) = (greedy.cost().value(), bfs.cost().value()) {
                assert!(g >= best, "greedy {g} beat optimal {best}");
            }
        }
    }
}

#[test]
fn explored_count_is_bounded() {
    for grid in sample_grids() {
        for algorithm in Algorithm::all() {
            let result = algorithm.run(&grid);
            assert!(result.explored() >= 1);
            assert!(result.explored() <= grid.walkable_count() + 2);
        }
    }
}

#[test]
fn reported_paths_are_simple_and_adjacent() {
    for grid in sample_grids() {
        for algorithm in Algorithm::all() {
            let result = algorithm.run(&grid);
            if result.is_reachable() {
                assert_valid_path(&grid, &result);
            } else {
                assert!(result.path().is_empty());
            }
        }
    }
}

#[test]
fn runs_are_deterministic() {
    for grid in sample_grids().into_iter().take(50) {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.run(&grid), algorithm.run(&grid), "{algorithm}");
        }
    }
}

#[test]
fn unreachable_runs_explore_the_whole_component() {
    let mut checked = 0;
    for grid in sample_grids() {
        if Algorithm::Bfs.run(&grid).is_reachable() {
            continue;
        }
        checked += 1;
        let size = component_size(&grid);
        for algorithm in Algorithm::all() {
            let result = algorithm.run(&grid);
            assert_eq!(result.cost(), Cost::Unreachable, "{algorithm}");
            assert_eq!(result.cost().to_string(), "-");
            assert_eq!(result.explored(), size, "{algorithm}");
            assert_eq!(result.remaining(), 0, "{algorithm}");
        }
    }
    assert!(checked > 0, "sample has no unreachable grids");
}

#[test]
fn concurrent_runs_share_one_grid() {
    let grid = std::sync::Arc::new(Grid::load("S0000\n0XXX0\n0000E\n").unwrap());
    let handles: Vec<_> = Algorithm::all()
        .map(|algorithm| {
            let grid = std::sync::Arc::clone(&grid);
            std::thread::spawn(move || algorithm.run(&grid))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().cost(), Cost::Finite(6));
    }
}

#[test]
fn invalid_heuristic_selector_is_rejected_before_searching() {
    assert!(Algorithm::astar_with("manhattan").is_ok());
    assert!(Algorithm::greedy_with("Euclidean").is_ok());
    let err = Algorithm::astar_with("diagonal").unwrap_err();
    assert!(err.to_string().contains("diagonal"));
}

#[test]
fn generated_grids_are_reproducible_and_varied() {
    let first = sample_grids();
    let second = sample_grids();
    assert_eq!(first, second);

    let shapes: HashSet<_> = first.iter().map(Grid::bounds).collect();
    assert!(shapes.len() > 10, "only {} distinct shapes", shapes.len());
    assert!(
        first
            .iter()
            .all(|g| (2..12).contains(&g.rows()) && (2..12).contains(&g.cols()))
    );
    assert!(first.iter().any(|g| g.walkable_count() + 2 < g.rows() * g.cols()));
}
