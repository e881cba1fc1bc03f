use crate::cost::{StepContext, edge_cost};
use crate::generation::Generation;
use crate::neighbors::steps;
use crate::pathfinder::{Node, Pathfinder, SearchStats};
use crate::route::Route;

impl Pathfinder {
    /// Find a minimum-cost route from cell `start` to cell `goal`.
    ///
    /// `parity` selects which hexagon columns (flat-top) or rows
    /// (pointy-top) are shifted; it is ignored on box grids. Returns `None`
    /// when no route exists within the configured budgets, or when either
    /// index lies outside the grid.
    pub fn find_path(&mut self, start: usize, goal: usize, parity: bool) -> Option<Route> {
        let mut cells = Vec::new();
        let cost = self.find_path_into(start, goal, parity, &mut cells)?;
        Some(Route::new(cells, cost))
    }

    /// Like [`find_path`](Self::find_path), but writes the route (goal
    /// first) into `out` and returns only its cost. `out` is cleared first,
    /// so a buffer reused across calls stops allocating once warm.
    pub fn find_path_into(
        &mut self,
        start: usize,
        goal: usize,
        parity: bool,
        out: &mut Vec<usize>,
    ) -> Option<f32> {
        out.clear();
        let len = self.grid.len();
        if start >= len || goal >= len {
            log::debug!("path query {start} -> {goal} outside grid of {len} cells");
            self.stats = SearchStats::default();
            return None;
        }
        if start == goal {
            self.stats = SearchStats {
                found: true,
                ..SearchStats::default()
            };
            out.push(start);
            return Some(0.0);
        }
        if !self.search(start, goal, parity) {
            return None;
        }
        Some(self.reconstruct(goal, out))
    }

    /// Run A* until the goal is closed or the frontier runs dry.
    fn search(&mut self, start: usize, goal: usize, parity: bool) -> bool {
        if self.generation.advance() {
            self.nodes.fill(Node::default());
            log::debug!("generation markers wrapped, scratch buffer cleared");
        }
        let Generation { open, closed } = self.generation;

        let Self {
            grid,
            config,
            dynamic,
            nodes,
            frontier,
            stats,
            ..
        } = self;
        let dynamic = dynamic.as_deref();
        let topology = grid.topology();
        let weight = config.heuristic_weight;
        let goal_p = grid.point(goal);

        frontier.clear();
        *stats = SearchStats::default();

        nodes[start] = Node {
            g: 0.0,
            f: weight,
            parent: start,
            steps: 0,
            status: open,
        };
        frontier.push(start, weight);
        stats.pushed = 1;

        while let Some(ci) = frontier.pop() {
            let current = nodes[ci];
            // Stale duplicate of a cell already expanded.
            if current.status == closed {
                continue;
            }
            if ci == goal {
                nodes[ci].status = closed;
                stats.found = true;
                break;
            }
            if config.max_steps.is_some_and(|max| current.steps >= max) {
                nodes[ci].status = closed;
                continue;
            }
            stats.expanded += 1;

            let cp = grid.point(ci);
            for step in steps(topology, config.diagonals, parity, cp) {
                let Some(ni) = grid.index_of(cp + step.offset) else {
                    continue;
                };
                let ctx = StepContext {
                    from: ci,
                    side: step.side,
                    g: current.g,
                };
                let Some(cost) = edge_cost(grid, config, dynamic, &ctx, ni, step) else {
                    continue;
                };
                let g = current.g + cost;
                if config.max_search_cost.is_some_and(|max| g > max) {
                    continue;
                }

                let n = &mut nodes[ni];
                if (n.status == open || n.status == closed) && n.g <= g {
                    continue;
                }
                let d = goal_p - grid.point(ni);
                let h = config.heuristic.estimate(d.x as f32, d.y as f32, weight);
                *n = Node {
                    g,
                    f: g + h,
                    parent: ci,
                    steps: current.steps + 1,
                    status: open,
                };
                frontier.push(ni, g + h);
                stats.pushed += 1;
            }

            nodes[ci].status = closed;
        }

        log::trace!(
            "search {start} -> {goal}: found={} expanded={} pushed={} left={}",
            stats.found,
            stats.expanded,
            stats.pushed,
            frontier.len()
        );
        stats.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::heuristic::Heuristic;
    use crate::neighbors::neighbors;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tilepath_core::{CellData, CellGrid, Point, Side, Topology};

    fn open_grid(w: usize, h: usize, topology: Topology) -> CellGrid {
        CellGrid::new(w, h, topology).unwrap()
    }

    fn idx(grid: &CellGrid, x: i32, y: i32) -> usize {
        grid.index_of(Point::new(x, y)).unwrap()
    }

    /// Random grid: about a quarter of the cells blocked, some side costs.
    fn random_grid(rng: &mut StdRng, w: usize, h: usize, topology: Topology) -> CellGrid {
        let sides = topology.side_count();
        let cells = (0..w * h)
            .map(|_| {
                let mut cell = CellData::OPEN.with_can_cross(!rng.random_bool(0.25));
                if rng.random_bool(0.3) {
                    // Zero (default) or 1..=4 in quarter steps: never cheaper
                    // than a plain step, and sums stay exact in f32.
                    let costs = (0..sides)
                        .map(|_| match rng.random_range(0..=12) {
                            0 => 0.0,
                            k => 1.0 + k as f32 * 0.25,
                        })
                        .collect();
                    cell = cell.with_cross_cost(costs);
                }
                cell
            })
            .collect();
        CellGrid::from_cells(cells, w, h, topology).unwrap()
    }

    /// Exhaustive Bellman-Ford relaxation using the same edge rules.
    fn reference_cost(
        grid: &CellGrid,
        config: &SearchConfig,
        parity: bool,
        start: usize,
        goal: usize,
    ) -> Option<f32> {
        let mut dist = vec![f32::INFINITY; grid.len()];
        dist[start] = 0.0;
        loop {
            let mut changed = false;
            for i in 0..grid.len() {
                if !dist[i].is_finite() {
                    continue;
                }
                for (ni, step) in neighbors(grid, config.diagonals, parity, i) {
                    let ctx = StepContext {
                        from: i,
                        side: step.side,
                        g: dist[i],
                    };
                    if let Some(c) = edge_cost(grid, config, None, &ctx, ni, &step) {
                        if dist[i] + c < dist[ni] {
                            dist[ni] = dist[i] + c;
                            changed = true;
                        }
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist[goal].is_finite().then_some(dist[goal])
    }

    fn assert_connected(pf: &Pathfinder, route: &Route, parity: bool) {
        let cells = route.cells();
        for pair in cells.windows(2) {
            let (to, from) = (pair[0], pair[1]);
            assert!(
                neighbors(pf.grid(), pf.config().diagonals, parity, from).any(|(n, _)| n == to),
                "{from} -> {to} is not a step"
            );
        }
    }

    // -----------------------------------------------------------------------
    // Basic behaviour
    // -----------------------------------------------------------------------

    #[test]
    fn box_4x4_corner_to_corner() {
        let grid = open_grid(4, 4, Topology::Box);
        let (s, g) = (idx(&grid, 0, 0), idx(&grid, 3, 3));
        let mut pf = Pathfinder::new(grid);
        let route = pf.find_path(s, g, false).unwrap();
        assert_eq!(route.cost(), 6.0);
        assert_eq!(route.len(), 7);
        assert_eq!(route.goal(), g);
        assert_eq!(route.start(), s);
        assert_connected(&pf, &route, false);
        assert!(pf.last_search().found);
        assert!(pf.last_search().expanded > 0);
    }

    #[test]
    fn trivial_path() {
        let mut pf = Pathfinder::new(open_grid(5, 5, Topology::PointyHex));
        let route = pf.find_path(12, 12, false).unwrap();
        assert_eq!(route.cells(), &[12]);
        assert_eq!(route.cost(), 0.0);
    }

    #[test]
    fn out_of_range_is_not_found() {
        let mut pf = Pathfinder::new(open_grid(3, 3, Topology::Box));
        assert!(pf.find_path(0, 9, false).is_none());
        assert!(pf.find_path(42, 0, false).is_none());
        assert!(!pf.last_search().found);
    }

    #[test]
    fn boxed_in_start() {
        let mut grid = open_grid(5, 5, Topology::Box);
        let start = idx(&grid, 2, 2);
        for (x, y) in [(2, 1), (3, 2), (2, 3), (1, 2)] {
            grid.set_can_cross(idx(&grid, x, y), false).unwrap();
        }
        let goal = idx(&grid, 4, 4);
        let mut pf = Pathfinder::new(grid);
        assert!(pf.find_path(start, goal, false).is_none());
        assert!(!pf.last_search().found);

        pf.set_ignore_blocked(true);
        let route = pf.find_path(start, goal, false).unwrap();
        assert_eq!(route.cost(), 4.0);

        // Diagonals open the corners.
        pf.set_ignore_blocked(false);
        pf.set_diagonals(true);
        assert_eq!(pf.find_path(start, goal, false).unwrap().cost(), 2.0);
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let mut grid = open_grid(3, 3, Topology::Box);
        grid.set_can_cross(8, false).unwrap();
        let mut pf = Pathfinder::new(grid);
        assert!(pf.find_path(0, 8, false).is_none());
    }

    #[test]
    fn max_steps_budget() {
        let mut pf = Pathfinder::new(open_grid(3, 1, Topology::Box));
        pf.set_max_steps(Some(1));
        assert!(pf.find_path(0, 2, false).is_none());
        pf.set_max_steps(Some(2));
        let route = pf.find_path(0, 2, false).unwrap();
        assert_eq!(route.cells(), &[2, 1, 0]);

        let grid = open_grid(4, 4, Topology::Box);
        let mut pf = Pathfinder::new(grid);
        pf.set_max_steps(Some(5));
        assert!(pf.find_path(0, 15, false).is_none());
        pf.set_max_steps(Some(6));
        assert!(pf.find_path(0, 15, false).is_some());
    }

    #[test]
    fn max_search_cost_budget() {
        let mut pf = Pathfinder::new(open_grid(4, 1, Topology::Box));
        pf.set_max_search_cost(Some(2.5));
        assert!(pf.find_path(0, 3, false).is_none());
        pf.set_max_search_cost(Some(3.0));
        assert_eq!(pf.find_path(0, 3, false).unwrap().cost(), 3.0);
    }

    #[test]
    fn diagonal_costs() {
        let mut pf = Pathfinder::new(open_grid(4, 4, Topology::Box));
        pf.set_diagonals(true);
        let route = pf.find_path(0, 15, false).unwrap();
        assert_eq!(route.cost(), 3.0);
        assert_eq!(route.cells(), &[15, 10, 5, 0]);

        pf.set_diagonal_cost(1.5);
        assert_eq!(pf.find_path(0, 15, false).unwrap().cost(), 4.5);

        // Diagonals too expensive: orthogonal route wins.
        pf.set_diagonal_cost(3.0);
        assert_eq!(pf.find_path(0, 15, false).unwrap().cost(), 6.0);
    }

    #[test]
    fn side_costs_are_directional() {
        let mut grid = open_grid(2, 1, Topology::Box);
        grid.set_side_cost(1, Side::Left, 5.0).unwrap();
        let mut pf = Pathfinder::new(grid);
        assert_eq!(pf.find_path(0, 1, false).unwrap().cost(), 5.0);
        assert_eq!(pf.find_path(1, 0, false).unwrap().cost(), 1.0);

        pf.set_max_edge_cost(Some(4.0));
        assert!(pf.find_path(0, 1, false).is_none());
        pf.set_ignore_cell_cost(true);
        assert_eq!(pf.find_path(0, 1, false).unwrap().cost(), 1.0);
    }

    #[test]
    fn zero_side_cost_means_default() {
        let mut grid = open_grid(3, 1, Topology::Box);
        grid.set_all_side_costs(1, 0.0).unwrap();
        grid.set_all_side_costs(2, -4.0).unwrap();
        let mut pf = Pathfinder::new(grid);
        assert_eq!(pf.find_path(0, 2, false).unwrap().cost(), 2.0);
    }

    #[test]
    fn dynamic_cost_detours() {
        let grid = open_grid(3, 3, Topology::Box);
        let (s, g, center) = (idx(&grid, 0, 1), idx(&grid, 2, 1), idx(&grid, 1, 1));
        let mut pf = Pathfinder::new(grid);
        assert_eq!(pf.find_path(s, g, false).unwrap().cost(), 2.0);

        pf.set_dynamic_cost(move |_: &StepContext, n: usize| -> f32 {
            if n == center { 10.0 } else { 0.0 }
        });
        let route = pf.find_path(s, g, false).unwrap();
        assert_eq!(route.cost(), 4.0);
        assert!(!route.cells().contains(&center));

        pf.clear_dynamic_cost();
        assert_eq!(pf.find_path(s, g, false).unwrap().cost(), 2.0);
    }

    #[test]
    fn group_clearance_and_visibility_filters() {
        let mut grid = open_grid(3, 1, Topology::Box);
        grid.set_group(1, 0b10).unwrap();
        let mut pf = Pathfinder::new(grid);

        pf.set_group_mask(0b01, false);
        assert!(pf.find_path(0, 2, false).is_none());
        pf.set_group_mask(0b11, false);
        assert!(pf.find_path(0, 2, false).is_some());
        pf.set_group_mask(0b01, true);
        assert!(pf.find_path(0, 2, false).is_none());
        pf.set_group_mask(u32::MAX, false);

        for i in 0..3 {
            pf.grid_mut().set_clearance(i, 2).unwrap();
        }
        pf.grid_mut().set_clearance(1, 1).unwrap();
        pf.set_min_clearance(2);
        assert!(pf.find_path(0, 2, false).is_none());
        pf.set_min_clearance(1);
        assert!(pf.find_path(0, 2, false).is_some());

        pf.grid_mut().set_visible(1, false).unwrap();
        assert!(pf.find_path(0, 2, false).is_none());
        pf.set_include_invisible(true);
        assert!(pf.find_path(0, 2, false).is_some());
    }

    #[test]
    fn hex_straight_lines() {
        // Flat-top: moving along a row zigzags but still takes one step
        // per column.
        for parity in [false, true] {
            let grid = open_grid(5, 5, Topology::FlatHex);
            let (s, g) = (idx(&grid, 0, 2), idx(&grid, 4, 2));
            let mut pf = Pathfinder::new(grid);
            let route = pf.find_path(s, g, parity).unwrap();
            assert_eq!(route.cost(), 4.0);
            assert_eq!(route.len(), 5);
            assert_connected(&pf, &route, parity);
        }
        for parity in [false, true] {
            let grid = open_grid(5, 5, Topology::PointyHex);
            let (s, g) = (idx(&grid, 2, 0), idx(&grid, 2, 4));
            let mut pf = Pathfinder::new(grid);
            let route = pf.find_path(s, g, parity).unwrap();
            assert_eq!(route.cost(), 4.0);
            assert_connected(&pf, &route, parity);
        }
    }

    #[test]
    fn squared_euclidean_still_finds_a_route() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 8, 8, Topology::Box);
            let mut pf = Pathfinder::new(grid);
            pf.set_heuristic(Heuristic::EuclideanNoSqr, 1.0);
            let expected = reference_cost(pf.grid(), pf.config(), false, 0, 63);
            let got = pf.find_path(0, 63, false).map(|r| r.cost());
            assert_eq!(got.is_some(), expected.is_some());
            if let (Some(got), Some(best)) = (got, expected) {
                assert!(got >= best);
            }
        }
    }

    #[test]
    fn infinite_side_cost_with_free_diagonals_terminates() {
        let mut grid = open_grid(4, 4, Topology::Box);
        grid.set_all_side_costs(5, f32::INFINITY).unwrap();
        grid.set_can_cross(15, false).unwrap();
        let mut pf = Pathfinder::new(grid);
        pf.set_diagonals(true);
        pf.set_diagonal_cost(0.0);
        assert!(pf.find_path(0, 15, false).is_none());
        assert!(!pf.last_search().found);
        // Every cell but 5 and the blocked goal is reached and expanded.
        assert!(pf.last_search().expanded >= 14);

        pf.grid_mut().set_can_cross(15, true).unwrap();
        let route = pf.find_path(0, 15, false).unwrap();
        assert!(route.cost().is_finite());
        assert!(!route.cells().contains(&5));
        assert_connected(&pf, &route, false);
    }

    #[test]
    fn find_path_into_reuses_buffer() {
        let mut pf = Pathfinder::new(open_grid(6, 6, Topology::Box));
        let mut buf = Vec::with_capacity(64);
        let ptr = buf.as_ptr();
        assert_eq!(pf.find_path_into(0, 35, false, &mut buf), Some(10.0));
        assert_eq!(buf.len(), 11);
        assert_eq!(pf.find_path_into(35, 5, false, &mut buf), Some(5.0));
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.as_ptr(), ptr);
        assert_eq!(pf.find_path_into(0, 99, false, &mut buf), None);
        assert!(buf.is_empty());
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    #[test]
    fn optimal_under_admissible_heuristics() {
        let cases = [
            (Topology::Box, false, Heuristic::Manhattan),
            (Topology::Box, false, Heuristic::MaxDxDy),
            (Topology::Box, false, Heuristic::Euclidean),
            (Topology::Box, true, Heuristic::MaxDxDy),
            (Topology::FlatHex, false, Heuristic::MaxDxDy),
            (Topology::PointyHex, false, Heuristic::MaxDxDy),
        ];
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for (topology, diagonals, heuristic) in cases {
            for (w, h) in [(5, 5), (8, 6)] {
                for _ in 0..25 {
                    let grid = random_grid(&mut rng, w, h, topology);
                    let parity = rng.random_bool(0.5);
                    let start = rng.random_range(0..grid.len());
                    let goal = rng.random_range(0..grid.len());
                    let mut pf = Pathfinder::new(grid);
                    pf.set_diagonals(diagonals);
                    for weight in [1.0, 0.5] {
                        pf.set_heuristic(heuristic, weight);
                        let expected = if start == goal {
                            Some(0.0)
                        } else {
                            reference_cost(pf.grid(), pf.config(), parity, start, goal)
                        };
                        let got = pf.find_path(start, goal, parity);
                        assert_eq!(
                            got.as_ref().map(Route::cost),
                            expected,
                            "{topology} diag={diagonals} {heuristic:?} w={weight} {start}->{goal}"
                        );
                        if let Some(route) = got {
                            assert_connected(&pf, &route, parity);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn symmetric_on_uniform_costs() {
        let mut rng = StdRng::seed_from_u64(99);
        for topology in [Topology::Box, Topology::FlatHex, Topology::PointyHex] {
            for _ in 0..30 {
                let (a, b) = (rng.random_range(0..49), rng.random_range(0..49));
                let cells = (0..49)
                    .map(|i| {
                        let open = i == a || i == b || !rng.random_bool(0.3);
                        CellData::OPEN.with_can_cross(open)
                    })
                    .collect();
                let grid = CellGrid::from_cells(cells, 7, 7, topology).unwrap();
                let mut pf = Pathfinder::new(grid);
                let ab = pf.find_path(a, b, true).map(|r| r.cost());
                let ba = pf.find_path(b, a, true).map(|r| r.cost());
                assert_eq!(ab, ba, "{topology} {a} <-> {b}");
            }
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = random_grid(&mut rng, 10, 10, Topology::FlatHex);
        let mut reused = Pathfinder::new(grid.clone());
        for _ in 0..50 {
            let (a, b) = (rng.random_range(0..100), rng.random_range(0..100));
            let first = reused.find_path(a, b, false);
            let second = reused.find_path(a, b, false);
            let fresh = Pathfinder::new(grid.clone()).find_path(a, b, false);
            assert_eq!(first, second);
            assert_eq!(first, fresh);
        }
    }

    #[test]
    fn repeated_calls_never_leak_stale_state() {
        let mut rng = StdRng::seed_from_u64(1234);
        for (w, h) in [(12, 9), (16, 8)] {
            let grid = random_grid(&mut rng, w, h, Topology::Box);
            let mut pf = Pathfinder::new(grid.clone());
            pf.set_diagonals(true);
            let mut reference = Pathfinder::new(grid);
            reference.set_diagonals(true);
            let ptr = pf.nodes.as_ptr();

            for _ in 0..1000 {
                // Poison everything the previous search left behind,
                // tagging every node with that search's open marker.
                let stale = pf.generation.open;
                for n in pf.nodes.iter_mut() {
                    n.status = stale;
                    n.g = f32::NAN;
                    n.f = -1.0;
                    n.parent = usize::MAX;
                    n.steps = u32::MAX;
                }
                let (a, b) = (rng.random_range(0..w * h), rng.random_range(0..w * h));
                let got = pf.find_path(a, b, false);
                // A fresh generation on the reference engine every time.
                reference.generation = Generation::new();
                reference.nodes.fill(Node::default());
                let expected = reference.find_path(a, b, false);
                assert_eq!(got, expected, "{a} -> {b}");
                if let Some(route) = got {
                    assert!(route.cost().is_finite());
                    assert!(route.cells().iter().all(|&c| c < w * h));
                }
            }
            assert_eq!(pf.nodes.len(), w * h);
            assert_eq!(pf.nodes.as_ptr(), ptr);
        }
    }

    #[test]
    fn generation_wrap_clears_scratch() {
        let grid = open_grid(6, 6, Topology::Box);
        let mut pf = Pathfinder::new(grid);
        let expected = pf.find_path(0, 35, false).unwrap();

        // Leftovers whose status equals the post-wrap closed marker with a
        // zero cost would block every relaxation if they survived the wrap.
        for n in pf.nodes.iter_mut() {
            n.status = Generation::CLOSED_BASE;
            n.g = 0.0;
        }
        pf.generation = Generation {
            open: Generation::LIMIT - 1,
            closed: Generation::LIMIT,
        };
        let got = pf.find_path(0, 35, false).unwrap();
        assert_eq!(got, expected);
        assert_eq!(
            pf.generation,
            Generation {
                open: Generation::OPEN_BASE,
                closed: Generation::CLOSED_BASE,
            }
        );
    }

    #[test]
    fn replace_cells_then_search() {
        let mut pf = Pathfinder::new(open_grid(3, 3, Topology::Box));
        assert_eq!(pf.find_path(0, 8, false).unwrap().cost(), 4.0);
        let mut cells = vec![CellData::OPEN; 9];
        cells[1] = CellData::BLOCKED;
        cells[4] = CellData::BLOCKED;
        cells[7] = CellData::BLOCKED;
        pf.replace_cells(cells).unwrap();
        assert!(pf.find_path(0, 8, false).is_none());
    }
}
