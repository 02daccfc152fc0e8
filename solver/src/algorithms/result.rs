use std::fmt;

use crate::grid::Cell;

/// Path cost, or the "-" sentinel when no path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(usize),
    Unreachable,
}

impl Cost {
    pub fn value(self) -> Option<usize> {
        match self {
            Self::Finite(cost) => Some(cost),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(cost) => write!(f, "{cost}"),
            Self::Unreachable => f.write_str("-"),
        }
    }
}

/// Outcome of one finished search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    name: &'static str,
    stem: &'static str,
    path: Vec<Cell>,
    cost: Cost,
    finalized: Vec<Cell>,
    remaining: usize,
}

impl SearchResult {
    pub(crate) fn new(
        name: &'static str,
        stem: &'static str,
        path: Vec<Cell>,
        cost: Cost,
        finalized: Vec<Cell>,
        remaining: usize,
    ) -> Self {
        Self {
            name,
            stem,
            path,
            cost,
            finalized,
            remaining,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stem(&self) -> &'static str {
        self.stem
    }

    /// Start-to-goal cells, empty when the goal was not reached.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_reachable()
    }

    /// Cells in the order they were finalized.
    pub fn finalized(&self) -> &[Cell] {
        &self.finalized
    }

    pub fn explored(&self) -> usize {
        self.finalized.len()
    }

    /// Frontier entries left when the run stopped, stale duplicates included.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
