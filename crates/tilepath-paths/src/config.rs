use crate::heuristic::Heuristic;

/// How a cell's group tag is tested against the search's group mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupMatch {
    /// Admit the cell if `group & mask != 0`.
    #[default]
    Any,
    /// Admit the cell only if `group == mask`.
    Exact,
}

impl GroupMatch {
    /// Whether a cell tagged `group` passes `mask`.
    #[inline]
    pub fn accepts(self, group: u32, mask: u32) -> bool {
        match self {
            Self::Any => group & mask != 0,
            Self::Exact => group == mask,
        }
    }
}

/// Traversal rules for a search. Fixed for the duration of one search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Allow 8-way movement on box grids. Ignored on hexagonal grids.
    pub diagonals: bool,
    pub heuristic: Heuristic,
    pub heuristic_weight: f32,
    /// Multiplier applied to diagonal steps on box grids.
    pub diagonal_cost: f32,
    /// Cells more than this many steps from the start are not expanded.
    pub max_steps: Option<u32>,
    /// Edges that would push the accumulated cost above this are skipped.
    pub max_search_cost: Option<f32>,
    /// Side costs above this make the side impassable.
    pub max_edge_cost: Option<f32>,
    pub group_mask: u32,
    pub group_match: GroupMatch,
    pub min_clearance: u32,
    /// Treat blocked cells as crossable.
    pub ignore_blocked: bool,
    /// Ignore per-side costs; every step costs 1.
    pub ignore_cell_cost: bool,
    /// Allow routes through invisible cells.
    pub include_invisible: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            diagonals: false,
            heuristic: Heuristic::default(),
            heuristic_weight: 1.0,
            diagonal_cost: 1.0,
            max_steps: None,
            max_search_cost: None,
            max_edge_cost: None,
            group_mask: u32::MAX,
            group_match: GroupMatch::Any,
            min_clearance: 1,
            ignore_blocked: false,
            ignore_cell_cost: false,
            include_invisible: false,
        }
    }
}
