use std::collections::HashMap;

use crate::grid::Cell;

/// Walk the parent map backward from `goal` to `start`.
///
/// Returns the path in start-to-goal order and its unit-step cost, or
/// `None` when `goal` was never reached. `start == goal` is a one-cell path
/// of cost 0 even though the start never has a parent.
pub fn reconstruct(
    parents: &HashMap<Cell, Cell>,
    start: Cell,
    goal: Cell,
) -> Option<(Vec<Cell>, usize)> {
    if start == goal {
        return Some((vec![start], 0));
    }

    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        current = *parents.get(&current)?;
        path.push(current);

        // A parent chain longer than the map means a cycle slipped in.
        if path.len() > parents.len() + 1 {
            log::error!("parent chain from {goal} does not reach {start}");
            return None;
        }
    }

    path.reverse();
    let cost = path.len() - 1;
    Some((path, cost))
}
