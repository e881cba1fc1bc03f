//! Mapping between linear cell indices and grid coordinates.
//!
//! A cell's linear index is `row * columns + column`. When the column count
//! is a power of two the same mapping is computed with shifts and masks; the
//! choice is made once, when the grid is built, and never changes results.

use crate::geom::Point;

/// Index mapping strategy for a grid with a fixed column count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellIndexer {
    /// Multiply / divide / modulo by the column count.
    Linear { columns: usize },
    /// Shift and mask, for power-of-two column counts.
    Shift { shift: u32, mask: usize },
}

impl CellIndexer {
    /// Pick the fastest mapping for `columns`.
    pub fn for_columns(columns: usize) -> Self {
        if columns.is_power_of_two() {
            Self::Shift {
                shift: columns.trailing_zeros(),
                mask: columns - 1,
            }
        } else {
            Self::Linear { columns }
        }
    }

    /// Number of columns this mapping was built for.
    #[inline]
    pub fn columns(self) -> usize {
        match self {
            Self::Linear { columns } => columns,
            Self::Shift { mask, .. } => mask + 1,
        }
    }

    /// Linear index of the cell at (`x`, `y`). The caller guarantees the
    /// coordinates are in bounds.
    #[inline]
    pub fn to_index(self, x: usize, y: usize) -> usize {
        match self {
            Self::Linear { columns } => y * columns + x,
            Self::Shift { shift, .. } => (y << shift) | x,
        }
    }

    /// Coordinates of the cell at linear index `idx`.
    #[inline]
    pub fn to_point(self, idx: usize) -> Point {
        let (x, y) = match self {
            Self::Linear { columns } => (idx % columns, idx / columns),
            Self::Shift { shift, mask } => (idx & mask, idx >> shift),
        };
        Point::new(x as i32, y as i32)
    }
}
