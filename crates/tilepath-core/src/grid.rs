//! A rectangular grid of [`CellData`] with its topology.
//!
//! A grid is validated once when it is built: dimensions must be non-zero
//! and match the cell count, and every per-side cost array must have one
//! entry per side of the topology. The mutators below keep those invariants,
//! so a search never has to re-check them.

use std::ops::Index;

use crate::cell::CellData;
use crate::error::GridError;
use crate::geom::Point;
use crate::index::CellIndexer;
use crate::topology::{Side, Topology};

/// A rectangular grid of cells with a fixed topology.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    cells: Vec<CellData>,
    rows: usize,
    topology: Topology,
    indexer: CellIndexer,
}

impl CellGrid {
    /// Create a grid of `columns * rows` open cells.
    pub fn new(columns: usize, rows: usize, topology: Topology) -> Result<Self, GridError> {
        let len = cell_count(columns, rows)?;
        Self::from_cells(
            vec![CellData::default(); len],
            columns,
            rows,
            topology,
        )
    }

    /// Build a grid from row-major cell data.
    pub fn from_cells(
        cells: Vec<CellData>,
        columns: usize,
        rows: usize,
        topology: Topology,
    ) -> Result<Self, GridError> {
        let len = cell_count(columns, rows)?;
        check_cells(&cells, len, topology)?;
        Ok(Self {
            cells,
            rows,
            topology,
            indexer: CellIndexer::for_columns(columns),
        })
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.indexer.columns()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: empty grids are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid's topology.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The index mapping selected for this grid's column count.
    #[inline]
    pub fn indexer(&self) -> CellIndexer {
        self.indexer
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CellData] {
        &self.cells
    }

    /// The cell at linear index `idx`, if any.
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&CellData> {
        self.cells.get(idx)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.columns() && (p.y as usize) < self.rows
    }

    /// Linear index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(self.indexer.to_index(p.x as usize, p.y as usize))
        } else {
            None
        }
    }

    /// Coordinates of the cell at `idx`. The index is not bounds-checked.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.indexer.to_point(idx)
    }

    /// Change the topology. Fails, leaving the grid untouched, if any cell's
    /// side-cost array does not fit the new topology.
    pub fn set_topology(&mut self, topology: Topology) -> Result<(), GridError> {
        if topology == self.topology {
            return Ok(());
        }
        check_cells(&self.cells, self.cells.len(), topology)?;
        self.topology = topology;
        Ok(())
    }

    /// Swap in new cell content with the same dimensions and topology.
    pub fn replace_cells(&mut self, cells: Vec<CellData>) -> Result<(), GridError> {
        check_cells(&cells, self.cells.len(), self.topology)?;
        self.cells = cells;
        Ok(())
    }

    /// Mark a cell crossable or blocked.
    pub fn set_can_cross(&mut self, idx: usize, can_cross: bool) -> Result<(), GridError> {
        self.cell_mut(idx)?.can_cross = can_cross;
        Ok(())
    }

    /// Mark a cell visible or hidden.
    pub fn set_visible(&mut self, idx: usize, visible: bool) -> Result<(), GridError> {
        self.cell_mut(idx)?.visible = visible;
        Ok(())
    }

    /// Set a cell's group tag.
    pub fn set_group(&mut self, idx: usize, group: u32) -> Result<(), GridError> {
        self.cell_mut(idx)?.group = group;
        Ok(())
    }

    /// Set a cell's clearance.
    pub fn set_clearance(&mut self, idx: usize, clearance: u32) -> Result<(), GridError> {
        self.cell_mut(idx)?.clearance = clearance;
        Ok(())
    }

    /// Set the cost of entering cell `idx` through `side`.
    ///
    /// The first call on a uniform cell allocates its side-cost array with
    /// every entry at `0.0`, which searches read as the default cost.
    pub fn set_side_cost(&mut self, idx: usize, side: Side, cost: f32) -> Result<(), GridError> {
        let topology = self.topology;
        let slot = topology
            .slot(side)
            .ok_or(GridError::SideNotInTopology { side, topology })?;
        let cell = self.cell_mut(idx)?;
        let costs = cell
            .cross_cost
            .get_or_insert_with(|| vec![0.0; topology.side_count()]);
        costs[slot] = cost;
        Ok(())
    }

    /// Set the same entry cost on every side of cell `idx`.
    pub fn set_all_side_costs(&mut self, idx: usize, cost: f32) -> Result<(), GridError> {
        let n = self.topology.side_count();
        self.cell_mut(idx)?.cross_cost = Some(vec![cost; n]);
        Ok(())
    }

    /// Drop a cell's side costs, making it uniform again.
    pub fn clear_side_costs(&mut self, idx: usize) -> Result<(), GridError> {
        self.cell_mut(idx)?.cross_cost = None;
        Ok(())
    }

    /// Recompute every cell's clearance as the side of the largest square of
    /// crossable cells whose top-left corner is that cell, capped at `max`.
    /// Blocked cells get 0. On hexagonal grids the square is taken in offset
    /// coordinates.
    pub fn compute_clearance(&mut self, max: u32) {
        let (w, h) = (self.columns(), self.rows);
        let indexer = self.indexer;
        for y in (0..h).rev() {
            for x in (0..w).rev() {
                let i = indexer.to_index(x, y);
                if !self.cells[i].can_cross {
                    self.cells[i].clearance = 0;
                    continue;
                }
                let at = |cells: &[CellData], x: usize, y: usize| {
                    if x < w && y < h {
                        cells[indexer.to_index(x, y)].clearance
                    } else {
                        0
                    }
                };
                let right = at(&self.cells, x + 1, y);
                let down = at(&self.cells, x, y + 1);
                let corner = at(&self.cells, x + 1, y + 1);
                let c = 1 + right.min(down).min(corner);
                self.cells[i].clearance = c.min(max);
            }
        }
        log::debug!("computed clearance on {w}x{h} grid (cap {max})");
    }

    fn cell_mut(&mut self, idx: usize) -> Result<&mut CellData, GridError> {
        let len = self.cells.len();
        self.cells
            .get_mut(idx)
            .ok_or(GridError::CellOutOfRange { index: idx, len })
    }
}

impl Index<usize> for CellGrid {
    type Output = CellData;

    #[inline]
    fn index(&self, idx: usize) -> &CellData {
        &self.cells[idx]
    }
}

/// Cell count for `columns x rows`, rejecting empty dimensions and any
/// dimension a [`Point`] coordinate cannot hold.
fn cell_count(columns: usize, rows: usize) -> Result<usize, GridError> {
    if columns == 0 || rows == 0 {
        return Err(GridError::EmptyGrid { columns, rows });
    }
    if columns > i32::MAX as usize || rows > i32::MAX as usize {
        return Err(GridError::TooLarge { columns, rows });
    }
    columns
        .checked_mul(rows)
        .ok_or(GridError::TooLarge { columns, rows })
}

fn check_cells(cells: &[CellData], expected: usize, topology: Topology) -> Result<(), GridError> {
    if cells.len() != expected {
        return Err(GridError::SizeMismatch {
            expected,
            actual: cells.len(),
        });
    }
    let sides = topology.side_count();
    for (index, cell) in cells.iter().enumerate() {
        if let Some(costs) = &cell.cross_cost {
            if costs.len() != sides {
                return Err(GridError::SideCostLength {
                    index,
                    expected: sides,
                    actual: costs.len(),
                });
            }
        }
    }
    Ok(())
}
