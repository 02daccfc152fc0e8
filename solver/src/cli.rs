use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use grid_solver::{algorithms::Algorithm, grid::Heuristic};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-solver")]
#[command(about = "Grid pathfinding with BFS, Dijkstra, greedy best-first and A*")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info, global = true)]
    pub verbosity: LevelFilter,

    /// Delay between animation frames in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = 0, global = true)]
    pub delay: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single strategy on a grid file
    Solve {
        /// Grid file: rows of 0 (open), X (wall), S (start) and E (end)
        map: PathBuf,

        /// Search strategy to use
        #[arg(value_enum)]
        algorithm: AlgorithmKind,

        /// Heuristic for greedy and A* (ignored by the others)
        #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
        heuristic: Heuristic,

        /// Directory to write the annotated grid and summary.csv into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Redraw the grid after every finalized cell
        #[arg(short, long)]
        animate: bool,

        /// Give up after this many finalized cells
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },

    /// Run every strategy on the same grid and compare them
    Compare {
        /// Grid file: rows of 0 (open), X (wall), S (start) and E (end)
        map: PathBuf,

        /// Directory to write per-strategy grids and summary.csv into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Include the greedy euclidean variant
        #[arg(long)]
        all: bool,

        /// Give up after this many finalized cells per strategy
        #[arg(long, value_name = "N")]
        max_steps: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlgorithmKind {
    /// Breadth-first search
    #[value(name = "bfs")]
    Bfs,

    /// Dijkstra's lowest-cost search
    Dijkstra,

    /// Greedy best-first search on the heuristic alone
    Greedy,

    /// A* search on cost plus heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl AlgorithmKind {
    pub fn with_heuristic(self, heuristic: Heuristic) -> Algorithm {
        match self {
            Self::Bfs => Algorithm::Bfs,
            Self::Dijkstra => Algorithm::Dijkstra,
            Self::Greedy => Algorithm::Greedy(heuristic),
            Self::AStar => Algorithm::AStar(heuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_solve_with_heuristic() {
        let args = Args::parse_from([
            "grid-solver",
            "solve",
            "map.txt",
            "astar",
            "--heuristic",
            "euclidean",
            "-v",
            "debug",
        ]);
        assert_eq!(args.verbosity, LevelFilter::Debug);
        let Command::Solve {
            algorithm,
            heuristic,
            animate,
            ..
        } = args.command
        else {
            panic!("expected solve");
        };
        assert_eq!(
            algorithm.with_heuristic(heuristic),
            Algorithm::AStar(Heuristic::Euclidean)
        );
        assert!(!animate);
    }

    #[test]
    fn rejects_unknown_heuristic() {
        let parsed = Args::try_parse_from([
            "grid-solver",
            "solve",
            "map.txt",
            "greedy",
            "--heuristic",
            "chebyshev",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn compare_defaults() {
        let args = Args::parse_from(["grid-solver", "compare", "map.txt"]);
        assert_eq!(args.delay, 0);
        assert!(matches!(
            args.command,
            Command::Compare {
                all: false,
                output: None,
                max_steps: None,
                ..
            }
        ));
    }
}
