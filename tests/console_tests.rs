//! Console map rendering

use intersection_sim::console::render_map;
use intersection_sim::simulation::{Axis, SimConfig, SimulationEngine};

fn quiet_engine() -> SimulationEngine {
    SimulationEngine::with_seed(SimConfig::default().without_random_spawns(), 3).unwrap()
}

#[test]
fn test_empty_map_shows_roads_and_lights() {
    let map = render_map(&quiet_engine());
    let rows: Vec<&str> = map.lines().collect();

    assert_eq!(rows.len(), 25);
    assert!(rows.iter().all(|row| row.chars().count() == 49));
    assert!(map.contains('+'));
    // Horizontal starts green, vertical red
    assert_eq!(map.matches('G').count(), 1);
    assert_eq!(map.matches('R').count(), 1);
}

#[test]
fn test_map_tracks_lights_and_vehicles() {
    let mut engine = quiet_engine();
    engine.spawn_vehicle_at(Axis::Horizontal, -0.6, 0.005).unwrap();
    engine.spawn_vehicle_at(Axis::Vertical, -0.6, 0.005).unwrap();
    engine.toggle_lights();

    let map = render_map(&engine);

    assert!(map.contains('>'), "horizontal vehicle travels left to right");
    assert!(map.contains('v'), "vertical vehicle travels top to bottom");
    assert_eq!(map.matches('G').count(), 1);
    assert_eq!(map.matches('R').count(), 1);
}
