use std::fmt;

use crate::topology::{Side, Topology};

/// Errors raised while building or re-binding a [`CellGrid`](crate::CellGrid).
///
/// These are programmer errors in the grid description; they are reported
/// when the grid is constructed or its topology changes, never mid-search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero columns or zero rows.
    EmptyGrid { columns: usize, rows: usize },
    /// Dimensions whose cell count overflows `usize`, or whose coordinates
    /// do not fit in an `i32`.
    TooLarge { columns: usize, rows: usize },
    /// The cell vector does not hold `columns * rows` entries.
    SizeMismatch { expected: usize, actual: usize },
    /// A cell's per-side cost array has the wrong length for the topology.
    SideCostLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// A cell index past the end of the grid.
    CellOutOfRange { index: usize, len: usize },
    /// A side that the topology's polygon does not have.
    SideNotInTopology { side: Side, topology: Topology },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { columns, rows } => {
                write!(f, "grid: empty dimensions {columns}x{rows}")
            }
            Self::TooLarge { columns, rows } => {
                write!(f, "grid: dimensions {columns}x{rows} are too large")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid: expected {expected} cells, got {actual}")
            }
            Self::SideCostLength {
                index,
                expected,
                actual,
            } => write!(
                f,
                "grid: cell {index} has {actual} side costs, topology needs {expected}"
            ),
            Self::CellOutOfRange { index, len } => {
                write!(f, "grid: cell {index} out of range (len {len})")
            }
            Self::SideNotInTopology { side, topology } => {
                write!(f, "grid: side {side} does not exist on a {topology} cell")
            }
        }
    }
}

impl std::error::Error for GridError {}
