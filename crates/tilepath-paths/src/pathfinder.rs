use tilepath_core::{CellData, CellGrid, GridError, Topology};

use crate::config::{GroupMatch, SearchConfig};
use crate::cost::DynamicCost;
use crate::frontier::Frontier;
use crate::generation::{Generation, Status};
use crate::heuristic::Heuristic;

// ---------------------------------------------------------------------------
// Scratch node
// ---------------------------------------------------------------------------

/// Per-cell search state. Meaningful only while `status` matches one of the
/// current generation markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) steps: u32,
    pub(crate) status: Status,
}

/// Counters from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded.
    pub expanded: usize,
    /// Frontier pushes, duplicates included.
    pub pushed: usize,
    /// Whether the goal was reached.
    pub found: bool,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// A* search engine bound to one [`CellGrid`].
///
/// The pathfinder owns a scratch node per cell and a priority frontier, both
/// reused by every search; stale scratch entries are told apart with
/// generation markers instead of being cleared. Searches take `&mut self`
/// and run to completion, so one instance serves one thread at a time. Use
/// one pathfinder per worker thread for parallel queries.
pub struct Pathfinder {
    pub(crate) grid: CellGrid,
    pub(crate) config: SearchConfig,
    pub(crate) dynamic: Option<Box<dyn DynamicCost>>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) frontier: Frontier,
    pub(crate) generation: Generation,
    pub(crate) stats: SearchStats,
}

impl Pathfinder {
    /// Create a pathfinder for `grid` with the default configuration.
    pub fn new(grid: CellGrid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    /// Create a pathfinder for `grid` with the given configuration.
    pub fn with_config(grid: CellGrid, config: SearchConfig) -> Self {
        let len = grid.len();
        Self {
            grid,
            config,
            dynamic: None,
            nodes: vec![Node::default(); len],
            frontier: Frontier::with_capacity(len.min(1024)),
            generation: Generation::new(),
            stats: SearchStats::default(),
        }
    }

    /// Build a box-topology grid from row-major cells and bind to it.
    pub fn from_cells(
        cells: Vec<CellData>,
        columns: usize,
        rows: usize,
    ) -> Result<Self, GridError> {
        let grid = CellGrid::from_cells(cells, columns, rows, Topology::Box)?;
        Ok(Self::new(grid))
    }

    /// The bound grid.
    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Mutable access to the bound grid's cells. Dimensions cannot change
    /// through this reference; use [`rebind`](Self::rebind) for that.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters from the most recent search.
    #[inline]
    pub fn last_search(&self) -> SearchStats {
        self.stats
    }

    // -----------------------------------------------------------------------
    // Grid binding
    // -----------------------------------------------------------------------

    /// Swap in new cell content with the same dimensions. The scratch buffer
    /// is zeroed in place; nothing is reallocated.
    pub fn replace_cells(&mut self, cells: Vec<CellData>) -> Result<(), GridError> {
        self.grid.replace_cells(cells)?;
        self.reset_scratch();
        Ok(())
    }

    /// Bind to a different grid, resizing the scratch buffer if needed.
    pub fn rebind(&mut self, grid: CellGrid) {
        log::debug!(
            "rebinding pathfinder from {}x{} to {}x{} {} grid",
            self.grid.columns(),
            self.grid.rows(),
            grid.columns(),
            grid.rows(),
            grid.topology()
        );
        let len = grid.len();
        self.grid = grid;
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.frontier.clear();
        self.generation = Generation::new();
    }

    fn reset_scratch(&mut self) {
        self.nodes.fill(Node::default());
        self.frontier.clear();
        self.generation = Generation::new();
    }

    // -----------------------------------------------------------------------
    // Configuration mutators
    // -----------------------------------------------------------------------

    /// Enable or disable 8-way movement on box grids.
    pub fn set_diagonals(&mut self, enabled: bool) {
        self.config.diagonals = enabled;
    }

    /// Choose the heuristic and its weight.
    pub fn set_heuristic(&mut self, heuristic: Heuristic, weight: f32) {
        self.config.heuristic = heuristic;
        self.config.heuristic_weight = weight;
    }

    /// Change the grid topology. Fails if a cell's side-cost array does not
    /// fit the new topology.
    pub fn set_topology(&mut self, topology: Topology) -> Result<(), GridError> {
        self.grid.set_topology(topology)
    }

    /// Multiplier for diagonal steps on box grids. Negative values are
    /// treated as zero.
    pub fn set_diagonal_cost(&mut self, multiplier: f32) {
        self.config.diagonal_cost = multiplier.max(0.0);
    }

    /// Stop expanding cells this many steps from the start.
    pub fn set_max_steps(&mut self, max: Option<u32>) {
        self.config.max_steps = max;
    }

    /// Skip edges that would push the accumulated cost above `max`.
    pub fn set_max_search_cost(&mut self, max: Option<f32>) {
        self.config.max_search_cost = max;
    }

    /// Treat sides costing more than `max` as impassable.
    pub fn set_max_edge_cost(&mut self, max: Option<f32>) {
        self.config.max_edge_cost = max;
    }

    /// Restrict traversal to cells whose group passes `mask`, either by
    /// sharing a bit or, with `exact`, by equality.
    pub fn set_group_mask(&mut self, mask: u32, exact: bool) {
        self.config.group_mask = mask;
        self.config.group_match = if exact {
            GroupMatch::Exact
        } else {
            GroupMatch::Any
        };
    }

    /// Treat blocked cells as crossable.
    pub fn set_ignore_blocked(&mut self, ignore: bool) {
        self.config.ignore_blocked = ignore;
    }

    /// Price every step at the default cost, ignoring side costs.
    pub fn set_ignore_cell_cost(&mut self, ignore: bool) {
        self.config.ignore_cell_cost = ignore;
    }

    /// Allow routes through cells marked invisible.
    pub fn set_include_invisible(&mut self, include: bool) {
        self.config.include_invisible = include;
    }

    /// Reject cells whose clearance is below `clearance`.
    pub fn set_min_clearance(&mut self, clearance: u32) {
        self.config.min_clearance = clearance;
    }

    /// Install a hook adding extra cost to each step.
    pub fn set_dynamic_cost(&mut self, hook: impl DynamicCost + 'static) {
        self.dynamic = Some(Box::new(hook));
    }

    /// Remove the dynamic cost hook.
    pub fn clear_dynamic_cost(&mut self) {
        self.dynamic = None;
    }
}
