use std::collections::HashSet;

use crate::{
    algorithms::SearchResult,
    grid::{Cell, Grid, Terrain},
};

pub const PATH_MARK: char = '.';
pub const EXPLORED_MARK: char = '*';

pub const LEGEND: &str = "\
=== Legend ===
S = Start
E = End
0 = Unvisited walkable space
X = Wall/blocked cell
'.' = Final path from S to E
'*' = Explored during search
";

/// Render the grid with the path and explored cells marked, followed by
/// the legend. Only plain walkable cells are rewritten; markers and walls
/// keep their symbols.
pub fn annotate(grid: &Grid, result: &SearchResult) -> String {
    let path: HashSet<Cell> = result.path().iter().copied().collect();
    let explored: HashSet<Cell> = result.finalized().iter().copied().collect();

    let mut out = String::from("=== Final Grid with Path and Explored States ===\n");
    for row in 0..grid.rows() {
        let line: String = (0..grid.cols())
            .map(|col| {
                let cell = Cell::new(row, col);
                match grid.get(cell) {
                    Some(Terrain::Walkable) if path.contains(&cell) => PATH_MARK,
                    Some(Terrain::Walkable) if explored.contains(&cell) => EXPLORED_MARK,
                    Some(terrain) => terrain.as_char(),
                    None => ' ',
                }
            })
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(LEGEND);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::grid::Heuristic;

    #[test]
    fn marks_path_and_explored_cells() {
        let grid = Grid::load("S0X\n0X0\n00E\n").unwrap();
        let result = Algorithm::Greedy(Heuristic::Manhattan).run(&grid);
        let text = annotate(&grid, &result);

        let expected = "=== Final Grid with Path and Explored States ===\n\
                        S0X\n\
                        .X0\n\
                        ..E\n\
                        \n";
        assert!(text.starts_with(expected), "{text}");
        assert!(text.ends_with(LEGEND));
    }

    #[test]
    fn unreachable_marks_only_explored() {
        let grid = Grid::load("S00\nXXX\n00E\n").unwrap();
        let result = Algorithm::Bfs.run(&grid);
        let text = annotate(&grid, &result);
        let rows: Vec<_> = text.lines().skip(1).take(3).collect();
        assert_eq!(rows, vec!["S**", "XXX", "00E"]);
    }

    #[test]
    fn canonical_grid_is_untouched() {
        let grid = Grid::load("S0\n0E\n").unwrap();
        let before = grid.clone();
        let result = Algorithm::Dijkstra.run(&grid);
        let _ = annotate(&grid, &result);
        assert_eq!(grid, before);
    }
}
