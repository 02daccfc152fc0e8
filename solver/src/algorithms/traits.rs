use crate::grid::Cell;

/// Every move between adjacent cells costs the same.
pub const STEP_COST: usize = 1;

/// How the frontier hands back its next cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopPolicy {
    /// First in, first out. Keys are ignored.
    Fifo,
    /// Lowest key first, ties broken by insertion order.
    MinPriority,
}

/// What happens when a neighbor that is not yet finalized is seen again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisitRule {
    /// Enqueue a cell at most once for the whole run.
    SkipDiscovered,
    /// Enqueue again every time; stale duplicates are dropped at pop time.
    SkipFinalized,
    /// Enqueue again only when a strictly cheaper g is found.
    ReenqueueOnImprovement,
}

/// Ordering policy plugged into the shared explore loop.
pub trait SearchStrategy {
    fn pop_policy(&self) -> PopPolicy;

    fn revisit_rule(&self) -> RevisitRule;

    /// Key of the start cell.
    fn initial_key(&self, start: Cell, goal: Cell) -> f64;

    /// Key of `neighbor` reached from a cell whose cumulative cost is
    /// `g_of_current`.
    fn key_for(&self, neighbor: Cell, goal: Cell, g_of_current: usize) -> f64;

    fn name(&self) -> &'static str;

    /// Short snake_case label used for output file names.
    fn stem(&self) -> &'static str;

    /// Whether the run keeps a cost map (and reports its value at the goal).
    fn tracks_cost(&self) -> bool {
        self.revisit_rule() == RevisitRule::ReenqueueOnImprovement
    }
}
