//! Terminal pathfinding demo.
//!
//! Generates a random map, searches from the top-left corner to the
//! bottom-right one and prints the map with the route drawn on it.
//!
//! Run: cargo run --bin tilepath-demo -- [box|box8|flat|pointy] [WIDTH] [HEIGHT] [SEED]
//! Set `RUST_LOG=debug` (or `trace`) to see the engine's log output.

use tilepath_demos::{parse_topology, random_grid, render};
use tilepath_paths::{Heuristic, Pathfinder};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "box8".to_string());
    let (topology, diagonals) =
        parse_topology(&name).ok_or_else(|| format!("unknown topology: {name}"))?;
    let width: usize = args.next().map_or(Ok(40), |s| s.parse())?;
    let height: usize = args.next().map_or(Ok(16), |s| s.parse())?;
    let seed: u64 = args.next().map_or(Ok(1), |s| s.parse())?;

    let grid = random_grid(width, height, topology, seed)?;
    log::info!("generated {width}x{height} {topology} map from seed {seed}");

    let mut pf = Pathfinder::new(grid);
    pf.set_diagonals(diagonals);
    if diagonals {
        pf.set_heuristic(Heuristic::Euclidean, 1.0);
        pf.set_diagonal_cost(std::f32::consts::SQRT_2);
    }

    let goal = pf.grid().len() - 1;
    let route = pf.find_path(0, goal, false);
    print!("{}", render(pf.grid(), route.as_ref(), false));

    let stats = pf.last_search();
    match route {
        Some(route) => println!(
            "route: {} cells, cost {:.2} ({} expanded, {} pushed)",
            route.len(),
            route.cost(),
            stats.expanded,
            stats.pushed
        ),
        None => println!(
            "no route ({} expanded, {} pushed)",
            stats.expanded, stats.pushed
        ),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
