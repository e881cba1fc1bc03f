//! **tilepath-core** — the grid contract consumed by the tilepath search engine.
//!
//! This crate provides the read-only view a pathfinder works on: per-cell
//! traversal data ([`CellData`]), the rectangular [`CellGrid`] that owns it,
//! the supported [`Topology`] kinds with their [`Side`] identifiers, and the
//! [`CellIndexer`] that maps between linear indices and coordinates.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod topology;

pub use cell::CellData;
pub use error::GridError;
pub use geom::Point;
pub use grid::CellGrid;
pub use index::CellIndexer;
pub use topology::{Side, Topology};
