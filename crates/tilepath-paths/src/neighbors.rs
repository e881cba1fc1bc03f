//! Neighbour enumeration for each topology.
//!
//! Steps are constant tables indexed by topology and, for hexagons, by
//! whether the cell's column (flat-top) or row (pointy-top) is the shifted
//! one. A column or row is shifted when its index modulo 2 equals the
//! search's parity bit: shifted flat-top columns sit half a cell lower,
//! shifted pointy-top rows half a cell to the right.

use tilepath_core::{CellGrid, Point, Side, Topology};

/// One candidate move: the coordinate offset and the side of the
/// destination cell the move enters through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub offset: Point,
    pub side: Side,
}

const fn step(dx: i32, dy: i32, side: Side) -> Step {
    Step {
        offset: Point::new(dx, dy),
        side,
    }
}

static BOX_8: [Step; 8] = [
    step(0, -1, Side::Bottom),
    step(1, -1, Side::BottomLeft),
    step(1, 0, Side::Left),
    step(1, 1, Side::TopLeft),
    step(0, 1, Side::Top),
    step(-1, 1, Side::TopRight),
    step(-1, 0, Side::Right),
    step(-1, -1, Side::BottomRight),
];

static BOX_4: [Step; 4] = [
    step(0, -1, Side::Bottom),
    step(1, 0, Side::Left),
    step(0, 1, Side::Top),
    step(-1, 0, Side::Right),
];

// Flat-top: [unshifted column, shifted column].
static FLAT_HEX: [[Step; 6]; 2] = [
    [
        step(0, -1, Side::Bottom),
        step(1, -1, Side::BottomLeft),
        step(1, 0, Side::TopLeft),
        step(0, 1, Side::Top),
        step(-1, 0, Side::TopRight),
        step(-1, -1, Side::BottomRight),
    ],
    [
        step(0, -1, Side::Bottom),
        step(1, 0, Side::BottomLeft),
        step(1, 1, Side::TopLeft),
        step(0, 1, Side::Top),
        step(-1, 1, Side::TopRight),
        step(-1, 0, Side::BottomRight),
    ],
];

// Pointy-top: [unshifted row, shifted row].
static POINTY_HEX: [[Step; 6]; 2] = [
    [
        step(0, -1, Side::BottomLeft),
        step(1, 0, Side::Left),
        step(0, 1, Side::TopLeft),
        step(-1, 1, Side::TopRight),
        step(-1, 0, Side::Right),
        step(-1, -1, Side::BottomRight),
    ],
    [
        step(1, -1, Side::BottomLeft),
        step(1, 0, Side::Left),
        step(1, 1, Side::TopLeft),
        step(0, 1, Side::TopRight),
        step(-1, 0, Side::Right),
        step(0, -1, Side::BottomRight),
    ],
];

#[inline]
fn shifted(coord: i32, parity: bool) -> usize {
    usize::from((coord & 1) == i32::from(parity))
}

/// Candidate steps from `p`, before bounds clipping.
///
/// `diagonals` only matters for box grids; `parity` only for hexagonal ones.
#[inline]
pub fn steps(topology: Topology, diagonals: bool, parity: bool, p: Point) -> &'static [Step] {
    match topology {
        Topology::Box if diagonals => &BOX_8,
        Topology::Box => &BOX_4,
        Topology::FlatHex => &FLAT_HEX[shifted(p.x, parity)],
        Topology::PointyHex => &POINTY_HEX[shifted(p.y, parity)],
    }
}

/// In-bounds neighbours of cell `idx` with the step that reaches each one.
/// No wraparound at the grid edges.
pub fn neighbors(
    grid: &CellGrid,
    diagonals: bool,
    parity: bool,
    idx: usize,
) -> impl Iterator<Item = (usize, Step)> + '_ {
    let p = grid.point(idx);
    steps(grid.topology(), diagonals, parity, p)
        .iter()
        .filter_map(move |s| grid.index_of(p + s.offset).map(|ni| (ni, *s)))
}
