//! Traversal attributes of a single grid cell.

/// Per-cell data read by the pathfinder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    /// Whether units may enter the cell.
    pub can_cross: bool,
    /// Hidden cells are skipped unless the search includes invisible cells.
    pub visible: bool,
    /// Group tag or bitmask, tested against the search's group mask.
    pub group: u32,
    /// Width of unit the cell can hold.
    pub clearance: u32,
    /// Cost of entering through each side, indexed by
    /// [`Topology::slot`](crate::Topology::slot). `None` means uniform cost.
    /// A stored value `<= 0` means "default cost", not "free".
    pub cross_cost: Option<Vec<f32>>,
}

impl CellData {
    /// A crossable, visible cell in group 1 with clearance 1.
    pub const OPEN: Self = Self {
        can_cross: true,
        visible: true,
        group: 1,
        clearance: 1,
        cross_cost: None,
    };

    /// A blocked cell, otherwise identical to [`CellData::OPEN`].
    pub const BLOCKED: Self = Self {
        can_cross: false,
        visible: true,
        group: 1,
        clearance: 1,
        cross_cost: None,
    };

    /// Set crossability (builder).
    #[inline]
    pub fn with_can_cross(mut self, can_cross: bool) -> Self {
        self.can_cross = can_cross;
        self
    }

    /// Set visibility (builder).
    #[inline]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the group tag (builder).
    #[inline]
    pub fn with_group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    /// Set the clearance (builder).
    #[inline]
    pub fn with_clearance(mut self, clearance: u32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Set the per-side cost array (builder). Its length is checked when the
    /// cell is bound to a grid.
    #[inline]
    pub fn with_cross_cost(mut self, costs: Vec<f32>) -> Self {
        self.cross_cost = Some(costs);
        self
    }
}

impl Default for CellData {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}
