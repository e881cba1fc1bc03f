use tilepath_core::{CellGrid, Point};

use crate::pathfinder::Pathfinder;

/// A route found by [`Pathfinder::find_path`].
///
/// Cells run from the goal back to the start, both included, in the order
/// the parent chain is walked. Use [`iter_from_start`](Self::iter_from_start)
/// or [`into_forward`](Self::into_forward) for the other orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    cells: Vec<usize>,
    cost: f32,
}

impl Route {
    pub(crate) fn new(cells: Vec<usize>, cost: f32) -> Self {
        Self { cells, cost }
    }

    /// Linear cell indices, goal first.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Total accumulated cost of the route.
    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a route holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> usize {
        self.cells[0]
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Cells from start to goal.
    pub fn iter_from_start(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Consume the route, returning its cells from start to goal.
    pub fn into_forward(mut self) -> Vec<usize> {
        self.cells.reverse();
        self.cells
    }

    /// Coordinates of the cells, goal first.
    pub fn points(&self, grid: &CellGrid) -> Vec<Point> {
        self.cells.iter().map(|&i| grid.point(i)).collect()
    }
}

impl Pathfinder {
    /// Walk parent links from `goal` to the start into `out` (goal first)
    /// and return the goal's accumulated cost.
    pub(crate) fn reconstruct(&self, goal: usize, out: &mut Vec<usize>) -> f32 {
        out.clear();
        let mut ci = goal;
        loop {
            out.push(ci);
            let parent = self.nodes[ci].parent;
            if parent == ci {
                break;
            }
            debug_assert!(out.len() <= self.nodes.len(), "parent chain loops");
            ci = parent;
        }
        self.nodes[goal].g
    }
}
