pub mod cell;
pub mod grid;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use cell::{Cell, Direction};
pub use grid::CellGrid;

use crate::entry::EntryNodes;

/// Character emitted for a wall cell in the serialized grid.
pub const WALL_CHAR: char = 'X';
/// Character emitted for an open cell in the serialized grid.
pub const OPEN_CHAR: char = '.';

/// The physical wall grid: a row-major bit matrix where `true` is a wall.
///
/// For a `w x h` logical lattice the matrix is `(2w + 1) x (2h + 1)`:
/// cell interiors sit at odd-odd positions, the wall segments between two
/// adjacent cells at mixed-parity positions, and wall junctions at even-even
/// positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallMatrix {
    cols: usize,
    rows: usize,
    bits: Vec<bool>,
}

impl WallMatrix {
    /// Creates a matrix of the given dimensions with every cell a wall.
    pub fn solid(cols: usize, rows: usize) -> Self {
        WallMatrix {
            cols,
            rows,
            bits: vec![true; cols * rows],
        }
    }

    /// Expands a carved logical lattice into the physical wall matrix.
    ///
    /// Each cell contributes a 2x2 block (its north wall segment, northeast
    /// junction, interior, and east wall segment); the left and bottom
    /// borders are appended separately. A junction only opens when all four
    /// wall segments around it are open, which the look-ahead to the next
    /// cell and the cell above detects without a second pass.
    pub fn from_grid(grid: &CellGrid) -> Self {
        let w = grid.width() as usize;
        let h = grid.height() as usize;
        let cols = 2 * w + 1;
        let rows = 2 * h + 1;
        let cells = grid.cells();

        let mut bits = Vec::with_capacity(cols * rows);
        for y in 0..h {
            let mut row1 = Vec::with_capacity(cols);
            let mut row2 = Vec::with_capacity(cols);
            row1.push(true);
            row2.push(true);

            for x in 0..w {
                let i = y * w + x;
                let cell = &cells[i];

                if !cell.open_north {
                    row1.extend([true, true]);
                    row2.extend([false, !cell.open_east]);
                } else {
                    let has_above = i >= w && !cells[i - w].open_east;
                    let has_next = i + 1 < cells.len() && !cells[i + 1].open_north;

                    if !cell.open_east {
                        row1.extend([false, true]);
                        row2.extend([false, true]);
                    } else if has_next || has_above {
                        row1.extend([false, true]);
                        row2.extend([false, false]);
                    } else {
                        row1.extend([false, false]);
                        row2.extend([false, false]);
                    }
                }
            }

            bits.append(&mut row1);
            bits.append(&mut row2);
        }
        bits.extend(std::iter::repeat_n(true, cols));

        WallMatrix { cols, rows, bits }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.cols && y < self.rows);
        y * self.cols + x
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.bits[self.ravel_index(x, y)]
    }

    /// Turns the cell at `(x, y)` into open space.
    pub fn carve(&mut self, x: usize, y: usize) {
        let idx = self.ravel_index(x, y);
        self.bits[idx] = false;
    }

    /// Count of open wall-segment slots between two cell interiors, i.e. the
    /// number of edges in the logical adjacency graph. A perfect maze over
    /// `w x h` cells has exactly `w * h - 1` of these.
    pub fn open_adjacencies(&self) -> usize {
        let mut count = 0;
        for y in 0..self.rows {
            for x in 0..self.cols {
                if (x % 2 == 0) != (y % 2 == 0) && !self.is_wall(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Error produced when re-parsing a serialized grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixParseError {
    #[error("serialized grid is empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized character {found:?} at ({x}, {y})")]
    UnknownChar { found: char, x: usize, y: usize },
}

impl FromStr for WallMatrix {
    type Err = MatrixParseError;

    /// Parses the line-oriented `X`/`.` grid back into a bit matrix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::new();
        let mut cols = 0;
        let mut rows = 0;

        for (y, line) in s.lines().enumerate() {
            let len = line.chars().count();
            if y == 0 {
                cols = len;
            } else if len != cols {
                return Err(MatrixParseError::RaggedRow {
                    row: y,
                    len,
                    expected: cols,
                });
            }
            for (x, c) in line.chars().enumerate() {
                match c {
                    WALL_CHAR => bits.push(true),
                    OPEN_CHAR => bits.push(false),
                    found => return Err(MatrixParseError::UnknownChar { found, x, y }),
                }
            }
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(MatrixParseError::Empty);
        }
        Ok(WallMatrix { cols, rows, bits })
    }
}

/// A generated maze: the wall matrix, its entry nodes, and how many extra
/// walls the remover actually managed to take out.
pub struct Maze {
    matrix: WallMatrix,
    entry: EntryNodes,
    walls_removed: u32,
}

impl Maze {
    pub(crate) fn new(matrix: WallMatrix, entry: EntryNodes, walls_removed: u32) -> Self {
        Maze {
            matrix,
            entry,
            walls_removed,
        }
    }

    pub fn matrix(&self) -> &WallMatrix {
        &self.matrix
    }

    pub fn entry_nodes(&self) -> &EntryNodes {
        &self.entry
    }

    /// How many walls the remover took out; at most the requested count,
    /// possibly fewer if the retry budget ran dry.
    pub fn walls_removed(&self) -> u32 {
        self.walls_removed
    }
}

impl fmt::Display for Maze {
    /// Serializes the maze as one line per physical row, `X` for walls and
    /// `.` for open cells. The two gate cells are always emitted open no
    /// matter what the matrix holds at those positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.matrix.rows() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.matrix.cols() {
                let c = if self.entry.is_gate(x, y) || !self.matrix.is_wall(x, y) {
                    OPEN_CHAR
                } else {
                    WALL_CHAR
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
