use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Where the entry and exit gates are punched through the boundary wall.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Opposite corners: top-left in, bottom-right out.
    #[default]
    Diagonal,
    /// Left border in, right border out, both on the mid row.
    Horizontal,
    /// Top border in, bottom border out, on parity-adjusted mid columns.
    Vertical,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryType::Diagonal => "diagonal",
            EntryType::Horizontal => "horizontal",
            EntryType::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EntryType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diagonal" => Ok(EntryType::Diagonal),
            "horizontal" => Ok(EntryType::Horizontal),
            "vertical" => Ok(EntryType::Vertical),
            other => Err(ConfigError::UnknownEntryType(other.to_string())),
        }
    }
}

/// A position in the physical wall matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// An entry node: the cell just inside the maze plus the boundary cell
/// forced open to admit entry or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryNode {
    pub x: usize,
    pub y: usize,
    pub gate: Point,
}

/// The start/end pair computed once per maze and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryNodes {
    pub start: EntryNode,
    pub end: EntryNode,
}

impl EntryNodes {
    /// Computes gate placement for a physical matrix of `cols x rows` cells.
    ///
    /// Working in physical coordinates lets the same planner serve both
    /// generator variants regardless of how they interpret the configured
    /// dimensions. `x` and `y` below are the last interior column and row.
    pub fn plan(cols: usize, rows: usize, entry_type: EntryType) -> EntryNodes {
        // A single-column or single-row matrix has no boundary slot to punch
        // through; the clamped gate coordinates then simply match nothing.
        let x = cols.saturating_sub(2).max(1);
        let y = rows.saturating_sub(2).max(1);

        match entry_type {
            EntryType::Diagonal => EntryNodes {
                start: EntryNode {
                    x: 1,
                    y: 1,
                    gate: Point { x: 1, y: 0 },
                },
                end: EntryNode {
                    x,
                    y,
                    gate: Point { x, y: y + 1 },
                },
            },
            EntryType::Horizontal => {
                let mid = (y - 1) / 2;
                let mid = if mid % 2 == 0 { mid + 1 } else { mid };
                EntryNodes {
                    start: EntryNode {
                        x: 1,
                        y: mid,
                        gate: Point { x: 0, y: mid },
                    },
                    end: EntryNode {
                        x,
                        y: mid,
                        gate: Point { x: x + 1, y: mid },
                    },
                }
            }
            EntryType::Vertical => {
                let mid = (x - 1) / 2;
                let even = mid % 2 == 0;
                let start_x = if even { mid + 1 } else { mid };
                // Odd cell counts shift the exit two columns right so both
                // gates land on carveable columns.
                let end_x = if even { start_x } else { start_x + 2 };
                EntryNodes {
                    start: EntryNode {
                        x: start_x,
                        y: 1,
                        gate: Point { x: start_x, y: 0 },
                    },
                    end: EntryNode {
                        x: end_x,
                        y,
                        gate: Point { x: end_x, y: y + 1 },
                    },
                }
            }
        }
    }

    /// Whether `(x, y)` is one of the two gate cells.
    pub fn is_gate(&self, x: usize, y: usize) -> bool {
        (self.start.gate.x == x && self.start.gate.y == y)
            || (self.end.gate.x == x && self.end.gate.y == y)
    }
}
