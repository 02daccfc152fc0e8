use std::{fmt, str::FromStr};

use clap::ValueEnum;

use super::Cell;
use crate::error::GridError;

/// Distance estimate used by the informed strategies.
///
/// Both are admissible on a 4-connected unit-cost grid: Manhattan is the
/// exact obstacle-free distance, Euclidean never exceeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Manhattan, Self::Euclidean].into_iter()
    }

    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        match self {
            Self::Manhattan => from.manhattan_distance(to) as f64,
            Self::Euclidean => from.euclidean_distance(to),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Euclidean => "Euclidean",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(GridError::InvalidHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Manhattan".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
        assert_eq!(" EUCLIDEAN ".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
    }

    #[test]
    fn unknown_selector_is_rejected() {
        let err = "chebyshev".parse::<Heuristic>().unwrap_err();
        assert!(matches!(err, GridError::InvalidHeuristic(ref s) if s == "chebyshev"));
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        let origin = Cell::new(0, 0);
        for row in 0..6 {
            for col in 0..6 {
                let cell = Cell::new(row, col);
                let m = Heuristic::Manhattan.estimate(origin, cell);
                let e = Heuristic::Euclidean.estimate(origin, cell);
                assert!(e <= m, "{cell}: euclidean {e} > manhattan {m}");
            }
        }
    }
}
