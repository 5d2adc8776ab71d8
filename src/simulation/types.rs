//! Core types for the intersection simulation
//!
//! Positions are 1-D progress coordinates along a lane's travel direction,
//! independent of screen space.

/// Unique identifier for a vehicle, assigned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub usize);

/// One of the two perpendicular travel axes at the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// Which way a lane travels along its screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right, or bottom to top
    Forward,
    /// Right to left, or top to bottom
    Reverse,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    /// Map a progress coordinate onto the signed screen axis
    pub fn apply(self, progress: f64) -> f64 {
        self.sign() * progress
    }
}

/// Simulation frames per wall-clock second; `dt = 1.0` is one frame
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Minimum clearance between a vehicle's front and the rear of the one ahead
pub const GAP_REQUIRED: f64 = 0.05;

/// Front-to-back extent of a vehicle, hood and trunk included
pub const VEHICLE_LENGTH: f64 = 0.18;

/// Where the intersection footprint begins on each lane
pub const STOP_LINE: f64 = -0.1;

/// Far edge of the intersection footprint; a vehicle whose rear has passed it
/// no longer answers to its light
pub const INTERSECTION_EXIT: f64 = 0.1;

/// Where new vehicles appear (rear edge)
pub const SPAWN_POINT: f64 = -1.2;

/// Vehicles whose rear passes this are removed
pub const DESPAWN_BOUND: f64 = 1.2;

/// Frames between random spawn attempts (0.5s)
pub const SPAWN_INTERVAL: f64 = 30.0;

/// Chance that a spawn attempt produces a vehicle
pub const SPAWN_PROBABILITY: f64 = 0.7;

/// Range for a spawned vehicle's speed, in progress units per frame
pub const MIN_VEHICLE_SPEED: f64 = 0.003;
pub const MAX_VEHICLE_SPEED: f64 = 0.009;

/// Clamp range for the global speed multiplier
pub const MIN_SPEED_MULTIPLIER: f64 = 0.1;
pub const MAX_SPEED_MULTIPLIER: f64 = 5.0;

/// Rate at which held speed keys change the multiplier, per second
pub const SPEED_ADJUST_PER_SECOND: f64 = 0.5;
