use crate::grid::{Cell, Heuristic};

use super::traits::{PopPolicy, RevisitRule, SearchStrategy};

/// Greedy best-first search: ordered by the heuristic alone, path cost is
/// ignored while searching.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy {
    pub heuristic: Heuristic,
}

impl Greedy {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for Greedy {
    fn pop_policy(&self) -> PopPolicy {
        PopPolicy::MinPriority
    }

    fn revisit_rule(&self) -> RevisitRule {
        RevisitRule::SkipFinalized
    }

    fn initial_key(&self, start: Cell, goal: Cell) -> f64 {
        self.heuristic.estimate(start, goal)
    }

    fn key_for(&self, neighbor: Cell, goal: Cell, _g_of_current: usize) -> f64 {
        self.heuristic.estimate(neighbor, goal)
    }

    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "Greedy Best-First (Manhattan)",
            Heuristic::Euclidean => "Greedy Best-First (Euclidean)",
        }
    }

    fn stem(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "greedy_manhattan",
            Heuristic::Euclidean => "greedy_euclidean",
        }
    }
}
