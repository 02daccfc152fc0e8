use std::collections::{HashMap, HashSet};

use super::{
    frontier::Frontier,
    reconstruct::reconstruct,
    result::{Cost, SearchResult},
    traits::{RevisitRule, STEP_COST, SearchStrategy},
};
use crate::grid::{Cell, Grid, Terrain};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Ready,
    Running,
    Succeeded,
    Exhausted,
}

impl SearchState {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Succeeded | Self::Exhausted)
    }
}

/// One search run over a borrowed grid.
///
/// All bookkeeping is owned by the run, so any number of runs may share the
/// same `Grid` at once.
pub struct Search<'g, S: SearchStrategy> {
    grid: &'g Grid,
    strategy: S,
    start: Cell,
    goal: Cell,
    state: SearchState,
    frontier: Frontier,
    visited: HashSet<Cell>,
    finalized: Vec<Cell>,
    discovered: HashSet<Cell>,
    costs: HashMap<Cell, usize>,
    parents: HashMap<Cell, Cell>,
}

impl<'g, S: SearchStrategy> Search<'g, S> {
    pub fn new(grid: &'g Grid, strategy: S) -> Self {
        Self::between(grid, strategy, grid.start(), grid.goal())
    }

    /// Search between explicit endpoints instead of the grid's markers.
    pub fn between(grid: &'g Grid, strategy: S, start: Cell, goal: Cell) -> Self {
        let mut frontier = Frontier::new(strategy.pop_policy());
        frontier.push(start, strategy.initial_key(start, goal));

        let mut costs = HashMap::new();
        if strategy.tracks_cost() {
            costs.insert(start, 0);
        }

        Self {
            grid,
            strategy,
            start,
            goal,
            state: SearchState::Ready,
            frontier,
            visited: HashSet::new(),
            finalized: Vec::new(),
            discovered: HashSet::from([start]),
            costs,
            parents: HashMap::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn visited(&self) -> &HashSet<Cell> {
        &self.visited
    }

    pub fn frontier_cells(&self) -> Vec<Cell> {
        self.frontier.cells()
    }

    /// Finalize at most one cell and return the new state.
    ///
    /// Stale frontier entries popped along the way do not count as a step.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_finished() {
            return self.state;
        }
        self.state = SearchState::Running;

        let current = loop {
            let Some(cell) = self.frontier.pop() else {
                log::debug!(
                    "{}: frontier exhausted after {} cells",
                    self.strategy.name(),
                    self.finalized.len()
                );
                self.state = SearchState::Exhausted;
                return self.state;
            };

            if self.visited.insert(cell) {
                break cell;
            }
        };

        self.finalized.push(current);
        log::trace!("{}: finalized {current}", self.strategy.name());

        if current == self.goal {
            log::debug!(
                "{}: reached goal after {} cells",
                self.strategy.name(),
                self.finalized.len()
            );
            self.state = SearchState::Succeeded;
            return self.state;
        }

        self.expand(current);
        self.state
    }

    fn expand(&mut self, current: Cell) {
        let grid = self.grid;
        let goal = self.goal;
        let g_current = self.costs.get(&current).copied().unwrap_or(0);

        for (neighbor, _) in current.neighbors(grid.bounds()) {
            if !self.enterable(neighbor) || self.visited.contains(&neighbor) {
                continue;
            }

            match self.strategy.revisit_rule() {
                RevisitRule::SkipDiscovered => {
                    if !self.discovered.insert(neighbor) {
                        continue;
                    }
                }
                RevisitRule::SkipFinalized => {}
                RevisitRule::ReenqueueOnImprovement => {
                    let tentative = g_current + STEP_COST;
                    if self
                        .costs
                        .get(&neighbor)
                        .is_some_and(|&known| tentative >= known)
                    {
                        continue;
                    }
                    self.costs.insert(neighbor, tentative);
                }
            }

            self.parents.insert(neighbor, current);
            let key = self.strategy.key_for(neighbor, goal, g_current);
            self.frontier.push(neighbor, key);
        }
    }

    /// Walkable cells, plus the goal itself when it sits on a marker other
    /// than `E` (explicit endpoints may put it on the start cell).
    fn enterable(&self, cell: Cell) -> bool {
        self.grid.is_walkable(cell)
            || (cell == self.goal && self.grid.get(cell).is_some_and(|t| t != Terrain::Wall))
    }

    /// Drive the loop until the goal is finalized or the frontier empties.
    pub fn run(mut self) -> SearchResult {
        log::debug!(
            "{}: searching {} -> {}",
            self.strategy.name(),
            self.start,
            self.goal
        );
        while !self.step().is_finished() {}
        self.finish()
    }

    /// Like [`Search::run`], but stop after `max_steps` finalizations and
    /// report the cut-off run as exhausted.
    pub fn run_bounded(mut self, max_steps: usize) -> SearchResult {
        for _ in 0..max_steps {
            if self.step().is_finished() {
                return self.finish();
            }
        }

        if !self.state.is_finished() {
            log::warn!(
                "{}: step budget of {max_steps} exceeded, treating as unreachable",
                self.strategy.name()
            );
            self.state = SearchState::Exhausted;
        }
        self.finish()
    }

    /// Package the current state as a result. Only meaningful once
    /// [`SearchState::is_finished`] holds.
    pub fn finish(self) -> SearchResult {
        let (start, goal) = (self.start, self.goal);

        let reached = match self.state {
            SearchState::Succeeded => reconstruct(&self.parents, start, goal),
            _ => None,
        };

        let (path, cost) = match reached {
            Some((path, steps)) => {
                let cost = if self.strategy.tracks_cost() {
                    let tracked = self.costs.get(&goal).copied().unwrap_or(steps);
                    debug_assert_eq!(tracked, steps, "cost map disagrees with path length");
                    tracked
                } else {
                    steps
                };
                (path, Cost::Finite(cost))
            }
            None => (Vec::new(), Cost::Unreachable),
        };

        SearchResult::new(
            self.strategy.name(),
            self.strategy.stem(),
            path,
            cost,
            self.finalized,
            self.frontier.len(),
        )
    }
}
