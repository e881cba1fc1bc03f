//! Shared pieces of the tilepath terminal demo: random map generation and
//! ASCII rendering of a grid with a route drawn on it.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tilepath_core::{CellData, CellGrid, GridError, Point, Topology};
use tilepath_paths::Route;

/// Probability that a generated cell is a wall.
pub const WALL_DENSITY: f64 = 0.28;
/// Probability that an open cell gets a side cost surcharge.
pub const ROUGH_DENSITY: f64 = 0.1;

const WALL: char = '#';
const FLOOR: char = '.';
const ROUGH: char = '~';
const ROUTE: char = '*';
const START: char = 'S';
const GOAL: char = 'G';

/// Parse a topology name as accepted on the command line.
pub fn parse_topology(name: &str) -> Option<(Topology, bool)> {
    match name {
        "box" => Some((Topology::Box, false)),
        "box8" => Some((Topology::Box, true)),
        "flat" => Some((Topology::FlatHex, false)),
        "pointy" => Some((Topology::PointyHex, false)),
        _ => None,
    }
}

/// Generate a random grid from `seed`. The corners `(0, 0)` and
/// `(columns - 1, rows - 1)` are always open.
pub fn random_grid(
    columns: usize,
    rows: usize,
    topology: Topology,
    seed: u64,
) -> Result<CellGrid, GridError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = CellGrid::new(columns, rows, topology)?;
    for idx in 0..grid.len() {
        if rng.random_bool(WALL_DENSITY) {
            grid.set_can_cross(idx, false)?;
        } else if rng.random_bool(ROUGH_DENSITY) {
            let cost = rng.random_range(2..=4) as f32;
            grid.set_all_side_costs(idx, cost)?;
        }
    }
    grid.set_can_cross(0, true)?;
    grid.clear_side_costs(0)?;
    let last = grid.len() - 1;
    grid.set_can_cross(last, true)?;
    grid.clear_side_costs(last)?;
    Ok(grid)
}

/// Whether the row or column containing `p` is offset by half a cell.
fn shifted(topology: Topology, parity: bool, p: Point) -> bool {
    match topology {
        Topology::Box => false,
        Topology::FlatHex => (p.x & 1) == parity as i32,
        Topology::PointyHex => (p.y & 1) == parity as i32,
    }
}

/// Render `grid` as text, one line per row, with `route` drawn over it.
///
/// Shifted pointy-top rows are indented by one character. Flat-top hex
/// columns cannot be offset in plain text and are drawn unshifted.
pub fn render(grid: &CellGrid, route: Option<&Route>, parity: bool) -> String {
    let mut chars: Vec<char> = grid
        .cells()
        .iter()
        .map(|c| {
            if !c.can_cross {
                WALL
            } else if c.cross_cost.is_some() {
                ROUGH
            } else {
                FLOOR
            }
        })
        .collect();
    if let Some(route) = route {
        for &idx in route.cells() {
            chars[idx] = ROUTE;
        }
        chars[route.start()] = START;
        chars[route.goal()] = GOAL;
    }

    let columns = grid.columns();
    let mut out = String::with_capacity(grid.len() * 2 + grid.rows() * 2);
    for (y, row) in chars.chunks(columns).enumerate() {
        if grid.topology() == Topology::PointyHex
            && shifted(grid.topology(), parity, Point::new(0, y as i32))
        {
            out.push(' ');
        }
        for (x, ch) in row.iter().enumerate() {
            if x > 0 && grid.topology().is_hex() {
                out.push(' ');
            }
            out.push(*ch);
        }
        out.push('\n');
    }
    out
}

/// Convenience for building demo maps by hand: `#` is a wall, anything else
/// is open.
pub fn grid_from_ascii(map: &str, topology: Topology) -> Result<CellGrid, GridError> {
    let lines: Vec<&str> = map.lines().filter(|l| !l.is_empty()).collect();
    let rows = lines.len();
    let columns = lines.first().map_or(0, |l| l.chars().count());
    let cells = lines
        .iter()
        .flat_map(|l| l.chars())
        .map(|ch| if ch == WALL { CellData::BLOCKED } else { CellData::OPEN })
        .collect();
    CellGrid::from_cells(cells, columns, rows, topology)
}
