//! Grid topologies and the side identifiers of their cell polygons.
//!
//! Per-side cost arrays on [`CellData`](crate::CellData) are indexed by the
//! *slot* of a [`Side`] within the grid's [`Topology`], so a box cell carries
//! eight entries and a hexagonal cell six.

use std::fmt;

/// Connectivity scheme of the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Square cells; 4-way movement, or 8-way when diagonals are enabled.
    #[default]
    Box,
    /// Flat-top hexagons laid out in offset columns.
    FlatHex,
    /// Pointy-top hexagons laid out in offset rows.
    PointyHex,
}

/// Edge (or corner, for box diagonals) of a cell polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

const BOX_SIDES: [Side; 8] = [
    Side::Top,
    Side::TopRight,
    Side::Right,
    Side::BottomRight,
    Side::Bottom,
    Side::BottomLeft,
    Side::Left,
    Side::TopLeft,
];

const FLAT_HEX_SIDES: [Side; 6] = [
    Side::Top,
    Side::TopRight,
    Side::BottomRight,
    Side::Bottom,
    Side::BottomLeft,
    Side::TopLeft,
];

const POINTY_HEX_SIDES: [Side; 6] = [
    Side::TopRight,
    Side::Right,
    Side::BottomRight,
    Side::BottomLeft,
    Side::Left,
    Side::TopLeft,
];

impl Topology {
    /// Whether this is one of the hexagonal layouts.
    #[inline]
    pub const fn is_hex(self) -> bool {
        matches!(self, Self::FlatHex | Self::PointyHex)
    }

    /// Sides of a cell in clockwise order starting from the top.
    #[inline]
    pub const fn sides(self) -> &'static [Side] {
        match self {
            Self::Box => &BOX_SIDES,
            Self::FlatHex => &FLAT_HEX_SIDES,
            Self::PointyHex => &POINTY_HEX_SIDES,
        }
    }

    /// Required length of a per-side cost array.
    #[inline]
    pub const fn side_count(self) -> usize {
        self.sides().len()
    }

    /// Position of `side` inside a per-side cost array, or `None` if the
    /// topology has no such side (e.g. `Left` on a flat-top hexagon).
    #[inline]
    pub const fn slot(self, side: Side) -> Option<usize> {
        match self {
            Self::Box => Some(side as usize),
            Self::FlatHex => match side {
                Side::Top => Some(0),
                Side::TopRight => Some(1),
                Side::BottomRight => Some(2),
                Side::Bottom => Some(3),
                Side::BottomLeft => Some(4),
                Side::TopLeft => Some(5),
                Side::Left | Side::Right => None,
            },
            Self::PointyHex => match side {
                Side::TopRight => Some(0),
                Side::Right => Some(1),
                Side::BottomRight => Some(2),
                Side::BottomLeft => Some(3),
                Side::Left => Some(4),
                Side::TopLeft => Some(5),
                Side::Top | Side::Bottom => None,
            },
        }
    }
}

impl Side {
    /// The side facing this one across a shared edge.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopRight,
            Self::Left => Self::Right,
            Self::TopLeft => Self::BottomRight,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::FlatHex => "flat-top hex",
            Self::PointyHex => "pointy-top hex",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
