use std::fmt;

pub type Result<T> = std::result::Result<T, GridError>;

/// One of the two single-occurrence markers a grid must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start (S)"),
            Self::Goal => f.write_str("goal (E)"),
        }
    }
}

/// Failures raised while loading a grid or configuring a search.
///
/// All of these are detected before the explore loop starts. An unreachable
/// goal is not an error, see [`crate::algorithms::Cost::Unreachable`].
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("malformed grid: line {line} has {found} columns, expected {expected}")]
    MalformedGrid {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed grid: no rows found")]
    EmptyGrid,

    #[error("malformed grid: unknown symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },

    #[error("expected exactly one {marker} marker, found {count}")]
    MissingMarker { marker: Marker, count: usize },

    #[error("invalid heuristic selector {0:?} (expected manhattan or euclidean)")]
    InvalidHeuristic(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// True for every error raised by the grid parser itself.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedGrid { .. } | Self::EmptyGrid | Self::UnknownSymbol { .. }
        )
    }
}
