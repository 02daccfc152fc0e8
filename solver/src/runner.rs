use std::sync::Arc;
use std::time::{Duration, Instant};

use grid_solver::{
    algorithms::{Algorithm, Search, SearchResult},
    grid::Grid,
    report::terminal::{self, Overlay},
};

/// A finished search and how long it took.
pub struct Run {
    pub result: SearchResult,
    pub elapsed: Duration,
}

pub fn solve(grid: &Grid, algorithm: Algorithm, max_steps: Option<usize>) -> Run {
    let started = Instant::now();
    let search = algorithm.search(grid);
    let result = match max_steps {
        Some(budget) => search.run_bounded(budget),
        None => search.run(),
    };
    let elapsed = started.elapsed();

    log::debug!("{} finished in {:?}", algorithm, elapsed);
    Run { result, elapsed }
}

/// Step through the search, redrawing the grid after every finalized cell.
pub async fn animate(
    grid: &Grid,
    algorithm: Algorithm,
    delay: Duration,
    max_steps: Option<usize>,
) -> Run {
    let started = Instant::now();
    let mut search: Search<'_, Algorithm> = algorithm.search(grid);
    let mut steps = 0;

    while !search.step().is_finished() {
        steps += 1;

        let overlay = Overlay {
            explored: search.visited().clone(),
            frontier: search.frontier_cells().into_iter().collect(),
            ..Default::default()
        };
        print!("\x1b[2J\x1b[H{}", terminal::render(grid, &overlay));
        println!("{algorithm}: {steps} cells finalized");

        if max_steps.is_some_and(|budget| steps >= budget) {
            break;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let result = if search.state().is_finished() {
        search.finish()
    } else {
        // budget hit mid-run
        search.run_bounded(0)
    };

    Run {
        result,
        elapsed: started.elapsed(),
    }
}

/// Run each algorithm on its own blocking worker against the shared grid.
/// Results come back in the order of `algorithms`.
pub async fn compare(
    grid: Arc<Grid>,
    algorithms: Vec<Algorithm>,
    max_steps: Option<usize>,
) -> eyre::Result<Vec<Run>> {
    let handles = algorithms.into_iter().map(|algorithm| {
        let grid = Arc::clone(&grid);
        tokio::task::spawn_blocking(move || solve(&grid, algorithm, max_steps))
    });

    futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.map_err(|e| eyre::eyre!("search worker panicked: {e}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_solver::algorithms::Cost;

    const MAP: &str = "S0X\n0X0\n00E\n";

    #[test]
    fn solve_respects_budget() {
        let grid = Grid::load(MAP).unwrap();
        let run = solve(&grid, Algorithm::Bfs, Some(2));
        assert_eq!(run.result.cost(), Cost::Unreachable);

        let run = solve(&grid, Algorithm::Bfs, None);
        assert_eq!(run.result.cost(), Cost::Finite(4));
    }

    #[tokio::test]
    async fn compare_keeps_input_order() {
        let grid = Arc::new(Grid::load(MAP).unwrap());
        let algorithms: Vec<_> = Algorithm::comparison_set().collect();
        let runs = compare(grid, algorithms.clone(), None).await.unwrap();

        let names: Vec<_> = runs.iter().map(|r| r.result.name()).collect();
        let expected: Vec<_> = algorithms.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, expected);
        assert!(runs.iter().all(|r| r.result.cost() == Cost::Finite(4)));
    }

    #[tokio::test]
    async fn animation_matches_plain_run() {
        let grid = Grid::load(MAP).unwrap();
        let animated = animate(&grid, Algorithm::Dijkstra, Duration::ZERO, None).await;
        let plain = solve(&grid, Algorithm::Dijkstra, None);
        assert_eq!(animated.result, plain.result);
    }
}
