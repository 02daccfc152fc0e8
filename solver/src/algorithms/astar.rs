use crate::grid::{Cell, Heuristic};

use super::traits::{PopPolicy, RevisitRule, STEP_COST, SearchStrategy};

/// A* ordered by f = g + h. Optimal as long as the heuristic is admissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStar {
    fn pop_policy(&self) -> PopPolicy {
        PopPolicy::MinPriority
    }

    fn revisit_rule(&self) -> RevisitRule {
        RevisitRule::ReenqueueOnImprovement
    }

    fn initial_key(&self, start: Cell, goal: Cell) -> f64 {
        self.heuristic.estimate(start, goal)
    }

    fn key_for(&self, neighbor: Cell, goal: Cell, g_of_current: usize) -> f64 {
        let g = (g_of_current + STEP_COST) as f64;
        g + self.heuristic.estimate(neighbor, goal)
    }

    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "A* (Manhattan)",
            Heuristic::Euclidean => "A* (Euclidean)",
        }
    }

    fn stem(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "astar_manhattan",
            Heuristic::Euclidean => "astar_euclidean",
        }
    }
}
