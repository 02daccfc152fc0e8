mod cli;
mod logging;
mod runner;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use clap::Parser;
use eyre::{Result, WrapErr};
use grid_solver::{
    algorithms::{Algorithm, SearchResult},
    grid::Grid,
    report,
};
use log::{debug, info, warn};

use cli::{Args, Command};
use logging::Logger;
use runner::Run;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    match args.command {
        Command::Solve {
            map,
            algorithm,
            heuristic,
            output,
            animate,
            max_steps,
        } => {
            let algorithm = algorithm.with_heuristic(heuristic);
            run_solve(&map, algorithm, output, animate, args.delay, max_steps).await?;
        }
        Command::Compare {
            map,
            output,
            all,
            max_steps,
        } => {
            let algorithms: Vec<_> = if all {
                Algorithm::all().collect()
            } else {
                Algorithm::comparison_set().collect()
            };
            run_compare(&map, algorithms, output, max_steps).await?;
        }
    }

    Ok(())
}

fn load_grid(map: &Path) -> Result<Grid> {
    let grid = Grid::from_file(map).wrap_err_with(|| format!("failed to load {}", map.display()))?;
    info!(
        "loaded {}x{} grid, {} open cells",
        grid.rows(),
        grid.cols(),
        grid.walkable_count()
    );
    Ok(grid)
}

// ========== Single Strategy ==========

async fn run_solve(
    map: &Path,
    algorithm: Algorithm,
    output: Option<PathBuf>,
    animate: bool,
    delay: u64,
    max_steps: Option<usize>,
) -> Result<()> {
    let grid = load_grid(map)?;

    info!("solving with {}", algorithm);
    if delay > 0 {
        debug!("delay: {}ms", delay);
    }

    let run = if animate {
        runner::animate(&grid, algorithm, Duration::from_millis(delay), max_steps).await
    } else {
        runner::solve(&grid, algorithm, max_steps)
    };

    println!("{}", report::terminal::render_result(&grid, &run.result));
    print_result(&run);

    if let Some(dir) = output {
        write_reports(&dir, &grid, std::slice::from_ref(&run.result))?;
    }
    Ok(())
}

// ========== Comparison ==========

async fn run_compare(
    map: &Path,
    algorithms: Vec<Algorithm>,
    output: Option<PathBuf>,
    max_steps: Option<usize>,
) -> Result<()> {
    let grid = Arc::new(load_grid(map)?);
    info!("comparing {} strategies", algorithms.len());

    let runs = runner::compare(Arc::clone(&grid), algorithms, max_steps).await?;
    for run in &runs {
        print_result(run);
    }

    let results: Vec<SearchResult> = runs.iter().map(|r| r.result.clone()).collect();
    print_summary(&results);
    print_benchmark_summary(&runs);

    if let Some(dir) = output {
        write_reports(&dir, &grid, &results)?;
    }
    Ok(())
}

// ========== Utilities ==========

fn write_reports(dir: &Path, grid: &Grid, results: &[SearchResult]) -> Result<()> {
    let written = report::write_artifacts(dir, grid, results)
        .wrap_err_with(|| format!("failed to write reports to {}", dir.display()))?;
    info!("wrote {} files to {}", written.len(), dir.display());
    Ok(())
}

fn print_result(run: &Run) {
    let result = &run.result;
    if result.is_reachable() {
        info!(
            "{}: cost {} after exploring {} cells ({:?})",
            result.name(),
            result.cost(),
            result.explored(),
            run.elapsed
        );
    } else {
        warn!(
            "{}: goal unreachable after exploring {} cells",
            result.name(),
            result.explored()
        );
    }
    debug!("{}: {} entries left in frontier", result.name(), result.remaining());
}

fn print_summary(results: &[SearchResult]) {
    info!("\nsummary:");
    for line in report::summary_table(results).lines() {
        info!("{}", line);
    }
}

fn print_benchmark_summary(runs: &[Run]) {
    let best = runs
        .iter()
        .filter(|r| r.result.is_reachable())
        .min_by_key(|r| (r.result.cost(), r.result.explored()));
    if let Some(run) = best {
        info!(
            "\nbest: {} (cost {}, {} explored)",
            run.result.name(),
            run.result.cost(),
            run.result.explored()
        );
    }

    if let Some(run) = runs.iter().min_by_key(|r| r.elapsed) {
        info!("fastest: {} ({:?})", run.result.name(), run.elapsed);
    }
}
