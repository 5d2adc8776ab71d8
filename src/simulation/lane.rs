//! Lane logic: car-following and stop-line enforcement
//!
//! A lane owns its vehicles in travel order. Index 0 is the lead vehicle,
//! closest to (or through) the intersection. Order is never re-sorted; it is
//! kept by construction because a follower can never step past the rear of
//! the vehicle ahead.

use anyhow::{bail, Result};

use super::config::LaneConfig;
use super::traffic_light::LightState;
use super::types::{Axis, VehicleId};
use super::vehicle::{Vehicle, VehicleSnapshot, VehicleUpdateResult};

/// Summary of one `Lane::advance` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaneUpdate {
    pub moved: usize,
    pub held_by_vehicle_ahead: usize,
    pub held_at_stop_line: usize,
    /// Vehicles removed after passing the despawn bound, front first
    pub despawned: Vec<VehicleId>,
}

/// The queue of vehicles travelling one axis
#[derive(Debug, Clone)]
pub struct Lane {
    pub axis: Axis,
    config: LaneConfig,
    gap_required: f64,
    vehicles: Vec<Vehicle>,
}

impl Lane {
    pub fn new(axis: Axis, config: LaneConfig, gap_required: f64) -> Self {
        Self {
            axis,
            config,
            gap_required,
            vehicles: Vec::new(),
        }
    }

    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    pub fn stop_line(&self) -> f64 {
        self.config.stop_line
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Ordered front-to-back view for presenters
    pub fn snapshot(&self) -> Vec<VehicleSnapshot> {
        self.vehicles.iter().map(Vehicle::snapshot).collect()
    }

    /// Vehicles waiting at a standstill
    pub fn queued(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_stopped()).count()
    }

    /// Whether a vehicle with the given rear position and length fits behind
    /// the current tail
    pub fn has_room_for(&self, position: f64, length: f64) -> bool {
        match self.vehicles.last() {
            Some(tail) => position + length <= tail.rear() - self.gap_required,
            None => true,
        }
    }

    /// Whether a vehicle is through the intersection and no longer answers
    /// to this lane's light
    ///
    /// A vehicle straddling the stop line or still inside the crossing is
    /// held by a red light until it turns green again.
    pub fn has_cleared_intersection(&self, vehicle: &Vehicle) -> bool {
        vehicle.rear() > self.config.intersection_exit
    }

    /// Append a vehicle at the tail of the queue
    ///
    /// Fails without touching the lane if the vehicle would overlap the
    /// current tail or sit ahead of it.
    pub fn push_back(&mut self, vehicle: Vehicle) -> Result<()> {
        if !self.has_room_for(vehicle.position, vehicle.length) {
            bail!(
                "vehicle {:?} at {:.3} does not fit behind the tail of the {:?} lane",
                vehicle.id,
                vehicle.position,
                self.axis
            );
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Advance every vehicle by one tick and drop those past the despawn bound
    pub fn advance(&mut self, delta: f64, speed_multiplier: f64, light: LightState) -> LaneUpdate {
        let mut update = LaneUpdate::default();
        let gap = self.gap_required;
        let stop_line = self.config.stop_line;
        let exit = self.config.intersection_exit;

        // Rear of the vehicle ahead, already moved this tick
        let mut ahead_rear: Option<f64> = None;

        for vehicle in &mut self.vehicles {
            let step = vehicle.step(delta, speed_multiplier);
            let next = vehicle.position + step;

            let blocked_by_ahead =
                ahead_rear.is_some_and(|rear| next + vehicle.length > rear - gap);
            let cleared = vehicle.rear() > exit;
            let blocked_by_light =
                light == LightState::Red && !cleared && next + vehicle.length >= stop_line - gap;

            let result = if blocked_by_ahead {
                update.held_by_vehicle_ahead += 1;
                VehicleUpdateResult::HeldByVehicleAhead
            } else if blocked_by_light {
                update.held_at_stop_line += 1;
                VehicleUpdateResult::HeldAtStopLine
            } else {
                update.moved += 1;
                VehicleUpdateResult::Moved
            };

            vehicle.apply(result, step);
            ahead_rear = Some(vehicle.rear());
        }

        let despawn_bound = self.config.despawn_bound;
        let (kept, gone): (Vec<Vehicle>, Vec<Vehicle>) = std::mem::take(&mut self.vehicles)
            .into_iter()
            .partition(|v| v.position <= despawn_bound);
        self.vehicles = kept;
        update.despawned = gone.into_iter().map(|v| v.id).collect();

        update
    }
}
