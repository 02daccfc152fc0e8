use crate::grid::Cell;

use super::traits::{PopPolicy, RevisitRule, SearchStrategy};

/// Breadth-first search. Unit edges make queue order equal path length,
/// so no cost map is kept.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BFS;

impl SearchStrategy for BFS {
    fn pop_policy(&self) -> PopPolicy {
        PopPolicy::Fifo
    }

    fn revisit_rule(&self) -> RevisitRule {
        RevisitRule::SkipDiscovered
    }

    fn initial_key(&self, _start: Cell, _goal: Cell) -> f64 {
        0.0
    }

    fn key_for(&self, _neighbor: Cell, _goal: Cell, _g_of_current: usize) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn stem(&self) -> &'static str {
        "bfs"
    }
}
