#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Walkable,
    Wall,
    Start,
    Goal,
}

impl Terrain {
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Walkable),
            'X' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::Goal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Walkable => '0',
            Self::Wall => 'X',
            Self::Start => 'S',
            Self::Goal => 'E',
        }
    }

    /// Whether a search may step onto this cell. The start is only ever
    /// the origin, never a destination.
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Walkable | Self::Goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        for symbol in ['0', 'X', 'S', 'E'] {
            let terrain = Terrain::from_char(symbol).unwrap();
            assert_eq!(terrain.as_char(), symbol);
        }
        assert_eq!(Terrain::from_char('#'), None);
    }

    #[test]
    fn goal_is_walkable_start_is_not() {
        assert!(Terrain::Walkable.is_walkable());
        assert!(Terrain::Goal.is_walkable());
        assert!(!Terrain::Start.is_walkable());
        assert!(!Terrain::Wall.is_walkable());
    }
}
