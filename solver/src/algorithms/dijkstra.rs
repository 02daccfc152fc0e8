use crate::grid::Cell;

use super::traits::{PopPolicy, RevisitRule, STEP_COST, SearchStrategy};

/// Uniform-cost search ordered by cumulative cost g.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl SearchStrategy for Dijkstra {
    fn pop_policy(&self) -> PopPolicy {
        PopPolicy::MinPriority
    }

    fn revisit_rule(&self) -> RevisitRule {
        RevisitRule::ReenqueueOnImprovement
    }

    fn initial_key(&self, _start: Cell, _goal: Cell) -> f64 {
        0.0
    }

    fn key_for(&self, _neighbor: Cell, _goal: Cell, g_of_current: usize) -> f64 {
        (g_of_current + STEP_COST) as f64
    }

    fn name(&self) -> &'static str {
        "Dijkstra (Lowest Cost)"
    }

    fn stem(&self) -> &'static str {
        "dijkstra"
    }
}
