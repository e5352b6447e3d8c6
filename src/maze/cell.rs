use std::fmt;

/// The four cardinal directions a passage can be carved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions, in the order candidates are collected during generation.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::West | Direction::East)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        write!(f, "{}", name)
    }
}

/// A single cell of the logical lattice.
///
/// Tracks whether the generator has visited the cell and which of its four
/// walls have been carved open. Openings are always mutual: carving east on
/// one cell carves west on its neighbor (see [`CellGrid::open`]).
///
/// [`CellGrid::open`]: super::grid::CellGrid::open
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub visited: bool,
    pub open_north: bool,
    pub open_south: bool,
    pub open_west: bool,
    pub open_east: bool,
}

impl Cell {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.open_north,
            Direction::South => self.open_south,
            Direction::West => self.open_west,
            Direction::East => self.open_east,
        }
    }

    pub(crate) fn set_open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.open_north = true,
            Direction::South => self.open_south = true,
            Direction::West => self.open_west = true,
            Direction::East => self.open_east = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_axis_predicates() {
        assert!(Direction::West.is_horizontal());
        assert!(Direction::East.is_horizontal());
        assert!(Direction::North.is_vertical());
        assert!(Direction::South.is_vertical());
    }

    #[test]
    fn test_cell_starts_closed() {
        let cell = Cell::default();
        assert!(!cell.visited);
        assert!(Direction::ALL.iter().all(|&d| !cell.is_open(d)));
    }

    #[test]
    fn test_set_open_single_flag() {
        let mut cell = Cell::default();
        cell.set_open(Direction::East);
        assert!(cell.open_east);
        assert!(!cell.open_north && !cell.open_south && !cell.open_west);
    }
}
