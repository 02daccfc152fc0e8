use std::collections::HashSet;

use colored::{ColoredString, Colorize};

use crate::{
    algorithms::SearchResult,
    grid::{Cell, Grid, Terrain},
};

pub const FRONTIER_MARK: &str = "o";

/// Live search state to overlay on the grid.
#[derive(Debug, Default)]
pub struct Overlay {
    pub path: HashSet<Cell>,
    pub explored: HashSet<Cell>,
    pub frontier: HashSet<Cell>,
}

impl Overlay {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            path: result.path().iter().copied().collect(),
            explored: result.finalized().iter().copied().collect(),
            frontier: HashSet::new(),
        }
    }
}

/// Colored grid for terminal output. Path beats explored beats frontier.
pub fn render(grid: &Grid, overlay: &Overlay) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            out.push_str(&paint(grid, overlay, cell).to_string());
        }
        out.push('\n');
    }
    out
}

pub fn render_result(grid: &Grid, result: &SearchResult) -> String {
    render(grid, &Overlay::from_result(result))
}

fn paint(grid: &Grid, overlay: &Overlay, cell: Cell) -> ColoredString {
    match grid.get(cell) {
        Some(Terrain::Start) => "S".blue().bold(),
        Some(Terrain::Goal) => "E".red().bold(),
        Some(Terrain::Wall) => "X".bright_black(),
        Some(Terrain::Walkable) if overlay.path.contains(&cell) => ".".green().bold(),
        Some(Terrain::Walkable) if overlay.explored.contains(&cell) => "*".yellow(),
        Some(Terrain::Walkable) if overlay.frontier.contains(&cell) => FRONTIER_MARK.cyan(),
        Some(Terrain::Walkable) => "0".normal(),
        None => " ".normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    #[test]
    fn plain_rendering_matches_annotation_marks() {
        colored::control::set_override(false);

        let grid = Grid::load("S0X\n0X0\n00E\n").unwrap();
        let result = Algorithm::Bfs.run(&grid);
        assert_eq!(render_result(&grid, &result), "S*X\n.X0\n..E\n");
    }

    #[test]
    fn frontier_cells_are_marked() {
        colored::control::set_override(false);

        let grid = Grid::load("S00E\n").unwrap();
        let overlay = Overlay {
            explored: HashSet::from([Cell::new(0, 1)]),
            frontier: HashSet::from([Cell::new(0, 2)]),
            ..Default::default()
        };
        assert_eq!(render(&grid, &overlay), "S*oE\n");
    }
}
