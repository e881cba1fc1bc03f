//! A* pathfinding over box and hexagonal cell grids.
//!
//! This crate finds minimum-cost routes on a [`CellGrid`](tilepath_core::CellGrid)
//! under configurable traversal rules: blocked and hidden cells, per-side
//! crossing costs, group masks, minimum clearance, and a caller-supplied
//! dynamic cost hook.
//!
//! All searches go through [`Pathfinder`], which owns its scratch buffer and
//! frontier and reuses them across calls, so repeated queries allocate only
//! the returned route (or nothing, with [`Pathfinder::find_path_into`]).
//!
//! # Topologies
//!
//! | Topology | Neighbours |
//! |---|---|
//! | [`Topology::Box`](tilepath_core::Topology::Box) | 4, or 8 with diagonals |
//! | [`Topology::FlatHex`](tilepath_core::Topology::FlatHex) | 6, offset columns |
//! | [`Topology::PointyHex`](tilepath_core::Topology::PointyHex) | 6, offset rows |

mod astar;
mod config;
mod cost;
mod frontier;
mod generation;
mod heuristic;
mod neighbors;
mod pathfinder;
mod route;

pub use config::{GroupMatch, SearchConfig};
pub use cost::{DynamicCost, StepContext};
pub use heuristic::Heuristic;
pub use neighbors::{Step, neighbors, steps};
pub use pathfinder::{Pathfinder, SearchStats};
pub use route::Route;
