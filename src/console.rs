//! Console presentation for headless runs
//!
//! Reads engine state through the snapshot accessors only and turns it into
//! a text summary and a small character map of the intersection.

use crate::simulation::{Axis, LightState, SimulationEngine, TICKS_PER_SECOND};

/// Half-width of the drawn area, in simulation units
const MAP_EXTENT: f64 = 1.2;
const MAP_COLUMNS: usize = 49;
const MAP_ROWS: usize = 25;

/// Offset of a light marker from its road, in simulation units
const LIGHT_OFFSET: f64 = 0.2;

fn light_char(state: LightState) -> char {
    match state {
        LightState::Green => 'G',
        LightState::Red => 'R',
    }
}

/// Convert screen coordinates (y up) to a grid cell, if on the map
fn to_grid(x: f64, y: f64) -> Option<(usize, usize)> {
    if x.abs() > MAP_EXTENT || y.abs() > MAP_EXTENT {
        return None;
    }
    let span = 2.0 * MAP_EXTENT;
    let col = ((x + MAP_EXTENT) / span * (MAP_COLUMNS - 1) as f64).round() as usize;
    // Flip y so that up is the top row
    let row = ((MAP_EXTENT - y) / span * (MAP_ROWS - 1) as f64).round() as usize;
    Some((row.min(MAP_ROWS - 1), col.min(MAP_COLUMNS - 1)))
}

/// Screen coordinates of a point on a lane's centerline
fn lane_point(engine: &SimulationEngine, axis: Axis, progress: f64) -> (f64, f64) {
    let along = engine.lane(axis).config().direction.apply(progress);
    match axis {
        Axis::Horizontal => (along, 0.0),
        Axis::Vertical => (0.0, along),
    }
}

fn vehicle_char(engine: &SimulationEngine, axis: Axis) -> char {
    let forward = engine.lane(axis).config().direction.sign() > 0.0;
    match (axis, forward) {
        (Axis::Horizontal, true) => '>',
        (Axis::Horizontal, false) => '<',
        (Axis::Vertical, true) => '^',
        (Axis::Vertical, false) => 'v',
    }
}

/// Render the intersection as text, one line per grid row
pub fn render_map(engine: &SimulationEngine) -> String {
    let mut grid = vec![vec![' '; MAP_COLUMNS]; MAP_ROWS];

    // Roads
    for (col, cell) in grid[MAP_ROWS / 2].iter_mut().enumerate() {
        *cell = if col == MAP_COLUMNS / 2 { '+' } else { '-' };
    }
    for row in grid.iter_mut() {
        if row[MAP_COLUMNS / 2] == ' ' {
            row[MAP_COLUMNS / 2] = '|';
        }
    }

    // Lights sit beside their stop lines
    for axis in Axis::ALL {
        let (x, y) = lane_point(engine, axis, engine.lane(axis).stop_line());
        let (x, y) = match axis {
            Axis::Horizontal => (x, y + LIGHT_OFFSET),
            Axis::Vertical => (x + LIGHT_OFFSET, y),
        };
        if let Some((row, col)) = to_grid(x, y) {
            grid[row][col] = light_char(engine.light_state(axis));
        }
    }

    // Vehicles, sampled along their length at roughly cell resolution
    let cell_size = 2.0 * MAP_EXTENT / (MAP_COLUMNS - 1) as f64;
    for axis in Axis::ALL {
        let symbol = vehicle_char(engine, axis);
        for vehicle in engine.lane_state(axis) {
            let samples = (vehicle.length / cell_size).ceil() as usize;
            for i in 0..=samples {
                let progress = vehicle.position + vehicle.length * i as f64 / samples.max(1) as f64;
                let (x, y) = lane_point(engine, axis, progress);
                if let Some((row, col)) = to_grid(x, y) {
                    grid[row][col] = symbol;
                }
            }
        }
    }

    grid.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draw a visual map of the intersection in the terminal
pub fn draw_map(engine: &SimulationEngine) {
    println!("\n=== Intersection Map ===");
    println!("Legend: >,<,^,v=Vehicle (travel direction), G/R=Light, +=Intersection");
    println!();
    println!("{}", render_map(engine));
    println!();
}

/// Print a summary of the engine state
pub fn print_summary(engine: &SimulationEngine) {
    let stats = engine.stats();
    println!("=== Intersection Simulation Summary ===");
    println!(
        "Time: {:.2}s ({} ticks)",
        engine.time() / TICKS_PER_SECOND,
        stats.ticks
    );
    println!("Speed multiplier: {:.2}", engine.speed_multiplier());
    println!(
        "Vehicles: {} active, {} spawned, {} despawned, {} spawns blocked",
        engine.vehicle_count(),
        stats.vehicles_spawned,
        stats.vehicles_despawned,
        stats.spawns_blocked
    );
    println!();

    for axis in Axis::ALL {
        let lane = engine.lane(axis);
        println!(
            "--- {:?} lane: light={:?}, vehicles={}, queued={} ---",
            axis,
            engine.light_state(axis),
            lane.len(),
            lane.queued()
        );
        for vehicle in lane.vehicles() {
            println!(
                "  Vehicle {:?}: position={:.3}, speed={:.4}{}",
                vehicle.id.0,
                vehicle.position,
                vehicle.max_speed,
                if vehicle.is_stopped() { " (stopped)" } else { "" }
            );
        }
    }
}
