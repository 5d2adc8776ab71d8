//! Standalone intersection simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of any renderer. It can be driven from the console
//! without opening a window.

mod config;
mod engine;
mod lane;
mod traffic_light;
mod types;
mod vehicle;

pub use config::{LaneConfig, SimConfig};
pub use engine::{EngineStats, SimulationEngine};
pub use lane::{Lane, LaneUpdate};
pub use traffic_light::{LightPair, LightState, TrafficLight};
pub use types::{
    Axis, Direction, VehicleId, DESPAWN_BOUND, GAP_REQUIRED, INTERSECTION_EXIT,
    MAX_SPEED_MULTIPLIER, MAX_VEHICLE_SPEED, MIN_SPEED_MULTIPLIER, MIN_VEHICLE_SPEED,
    SPAWN_INTERVAL, SPAWN_POINT, SPAWN_PROBABILITY, SPEED_ADJUST_PER_SECOND, STOP_LINE,
    TICKS_PER_SECOND, VEHICLE_LENGTH,
};
pub use vehicle::{Vehicle, VehicleSnapshot, VehicleUpdateResult};
