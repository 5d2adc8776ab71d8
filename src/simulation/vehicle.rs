//! Vehicle state for the intersection simulation

use super::types::VehicleId;

/// What happened to a vehicle during one lane update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleUpdateResult {
    Moved,              // Took the full step
    HeldByVehicleAhead, // Step would close the gap to the car in front
    HeldAtStopLine,     // Red light and not yet through the stop line
}

/// A vehicle travelling along one lane
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Progress coordinate of the rear edge
    pub position: f64,
    pub length: f64,
    pub max_speed: f64,
    /// Speed applied on the last tick: `max_speed` when it moved, zero when
    /// held. A fresh vehicle starts at `max_speed`.
    pub current_speed: f64,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: f64, length: f64, max_speed: f64) -> Self {
        Self {
            id,
            position,
            length,
            max_speed,
            current_speed: max_speed,
        }
    }

    pub fn rear(&self) -> f64 {
        self.position
    }

    pub fn front(&self) -> f64 {
        self.position + self.length
    }

    /// Distance this vehicle would cover in one step
    pub fn step(&self, delta: f64, speed_multiplier: f64) -> f64 {
        self.max_speed * delta * speed_multiplier
    }

    pub fn is_stopped(&self) -> bool {
        self.current_speed == 0.0
    }

    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            id: self.id,
            position: self.position,
            length: self.length,
        }
    }

    pub(super) fn apply(&mut self, result: VehicleUpdateResult, step: f64) {
        match result {
            VehicleUpdateResult::Moved => {
                self.position += step;
                self.current_speed = self.max_speed;
            }
            VehicleUpdateResult::HeldByVehicleAhead | VehicleUpdateResult::HeldAtStopLine => {
                self.current_speed = 0.0;
            }
        }
    }
}

/// Read-only view of a vehicle handed to presenters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub position: f64,
    pub length: f64,
}

impl VehicleSnapshot {
    pub fn front(&self) -> f64 {
        self.position + self.length
    }

    /// Midpoint along the lane, in progress coordinates
    pub fn center(&self) -> f64 {
        self.position + self.length / 2.0
    }
}
