use std::fmt;

use super::{
    AStar, BFS, Dijkstra, Greedy,
    engine::Search,
    result::SearchResult,
    traits::{PopPolicy, RevisitRule, SearchStrategy},
};
use crate::{
    error::Result,
    grid::{Cell, Grid, Heuristic},
};

/// Any of the four strategies, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    Greedy(Heuristic),
    AStar(Heuristic),
}

impl Algorithm {
    /// The variants compared side by side by default.
    pub fn comparison_set() -> impl Iterator<Item = Self> {
        [
            Self::Bfs,
            Self::Dijkstra,
            Self::Greedy(Heuristic::Manhattan),
            Self::AStar(Heuristic::Manhattan),
            Self::AStar(Heuristic::Euclidean),
        ]
        .into_iter()
    }

    /// Every selectable variant, both heuristics included.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Bfs, Self::Dijkstra]
            .into_iter()
            .chain(Heuristic::all().map(Self::Greedy))
            .chain(Heuristic::all().map(Self::AStar))
    }

    /// Greedy with a heuristic named by a string selector.
    pub fn greedy_with(selector: &str) -> Result<Self> {
        Ok(Self::Greedy(selector.parse()?))
    }

    /// A* with a heuristic named by a string selector.
    pub fn astar_with(selector: &str) -> Result<Self> {
        Ok(Self::AStar(selector.parse()?))
    }

    pub fn search(self, grid: &Grid) -> Search<'_, Self> {
        Search::new(grid, self)
    }

    pub fn run(self, grid: &Grid) -> SearchResult {
        self.search(grid).run()
    }

    fn delegate(&self) -> &dyn SearchStrategy {
        match self {
            Self::Bfs => &BFS,
            Self::Dijkstra => &Dijkstra,
            Self::Greedy(Heuristic::Manhattan) => &Greedy {
                heuristic: Heuristic::Manhattan,
            },
            Self::Greedy(Heuristic::Euclidean) => &Greedy {
                heuristic: Heuristic::Euclidean,
            },
            Self::AStar(Heuristic::Manhattan) => &AStar {
                heuristic: Heuristic::Manhattan,
            },
            Self::AStar(Heuristic::Euclidean) => &AStar {
                heuristic: Heuristic::Euclidean,
            },
        }
    }
}

impl SearchStrategy for Algorithm {
    fn pop_policy(&self) -> PopPolicy {
        self.delegate().pop_policy()
    }

    fn revisit_rule(&self) -> RevisitRule {
        self.delegate().revisit_rule()
    }

    fn initial_key(&self, start: Cell, goal: Cell) -> f64 {
        self.delegate().initial_key(start, goal)
    }

    fn key_for(&self, neighbor: Cell, goal: Cell, g_of_current: usize) -> f64 {
        self.delegate().key_for(neighbor, goal, g_of_current)
    }

    fn name(&self) -> &'static str {
        self.delegate().name()
    }

    fn stem(&self) -> &'static str {
        self.delegate().stem()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
