use tilepath_core::{CellGrid, Side, Topology};

use crate::config::SearchConfig;
use crate::neighbors::Step;

/// What a [`DynamicCost`] hook is told about the step being priced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepContext {
    /// Linear index of the cell being expanded.
    pub from: usize,
    /// Side of the neighbour the step enters through.
    pub side: Side,
    /// Accumulated cost at `from`.
    pub g: f32,
}

/// Caller-supplied extra cost for entering a cell.
///
/// Closures of the form `Fn(&StepContext, usize) -> f32` implement this
/// directly; any user data they capture travels with them. Negative results
/// are treated as zero.
pub trait DynamicCost: Send {
    /// Extra cost of entering `neighbor` on the step described by `ctx`.
    fn extra_cost(&self, ctx: &StepContext, neighbor: usize) -> f32;
}

impl<F> DynamicCost for F
where
    F: Fn(&StepContext, usize) -> f32 + Send,
{
    #[inline]
    fn extra_cost(&self, ctx: &StepContext, neighbor: usize) -> f32 {
        self(ctx, neighbor)
    }
}

/// Price the step from `ctx.from` into `neighbor`, or `None` if the
/// neighbour may not be entered.
///
/// Checks run in order and stop at the first rejection: crossability,
/// visibility, clearance, group mask, then the side cost against
/// `max_edge_cost`. A stored side cost `<= 0` counts as the default cost 1.
/// The dynamic hook's result is added, and diagonal box steps are finally
/// scaled by `diagonal_cost`. A step whose final cost is not finite is
/// rejected.
pub(crate) fn edge_cost(
    grid: &CellGrid,
    config: &SearchConfig,
    dynamic: Option<&dyn DynamicCost>,
    ctx: &StepContext,
    neighbor: usize,
    step: &Step,
) -> Option<f32> {
    let cell = &grid[neighbor];
    if !cell.can_cross && !config.ignore_blocked {
        return None;
    }
    if !cell.visible && !config.include_invisible {
        return None;
    }
    if cell.clearance < config.min_clearance {
        return None;
    }
    if !config.group_match.accepts(cell.group, config.group_mask) {
        return None;
    }

    let mut cost = 1.0;
    if !config.ignore_cell_cost {
        if let Some(costs) = &cell.cross_cost {
            // Side costs were validated against the topology when bound.
            let side_cost = grid
                .topology()
                .slot(step.side)
                .map_or(0.0, |slot| costs[slot]);
            if config.max_edge_cost.is_some_and(|max| side_cost > max) {
                return None;
            }
            if side_cost > 0.0 {
                cost = side_cost;
            }
        }
    }

    if let Some(hook) = dynamic {
        cost += hook.extra_cost(ctx, neighbor).max(0.0);
    }

    if grid.topology() == Topology::Box && step.offset.is_diagonal() {
        cost *= config.diagonal_cost;
    }
    // An infinite side cost or hook result is impassable, and `inf * 0`
    // under a zero diagonal multiplier would be NaN.
    cost.is_finite().then_some(cost)
}
