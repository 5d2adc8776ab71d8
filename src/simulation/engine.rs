//! Main simulation engine that ties lanes, lights and spawning together
//!
//! This is the entry point for running the intersection simulation without
//! any rendering dependencies. A presenter drives it with `tick` once per
//! frame and reads back lane and light state to draw.

use anyhow::{ensure, Context, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::lane::{Lane, LaneUpdate};
use super::traffic_light::{LightPair, LightState};
use super::types::{Axis, VehicleId};
use super::vehicle::{Vehicle, VehicleSnapshot};

/// Running counters for a simulation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineStats {
    pub ticks: u64,
    pub vehicles_spawned: u64,
    pub vehicles_despawned: u64,
    /// Spawns skipped because the spawn point was still occupied
    pub spawns_blocked: u64,
    pub light_toggles: u64,
    /// Vehicle-ticks spent held at a red light
    pub stop_line_holds: u64,
}

/// The intersection simulation
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimConfig,
    horizontal: Lane,
    vertical: Lane,
    lights: LightPair,

    speed_multiplier: f64,

    /// Time since the last random spawn attempt
    spawn_clock: f64,

    /// Total simulated time, in frames
    time: f64,

    next_id: usize,
    rng: StdRng,
    stats: EngineStats,
}

impl SimulationEngine {
    /// Create an engine seeded from OS entropy
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine with a seeded RNG for reproducible runs
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SimConfig, rng: StdRng) -> Result<Self> {
        config.validate().context("invalid simulation config")?;

        let horizontal = Lane::new(Axis::Horizontal, config.horizontal_lane, config.gap_required);
        let vertical = Lane::new(Axis::Vertical, config.vertical_lane, config.gap_required);
        let speed_multiplier = config.clamp_speed_multiplier(config.initial_speed_multiplier);

        Ok(Self {
            config,
            horizontal,
            vertical,
            lights: LightPair::new(),
            speed_multiplier,
            spawn_clock: 0.0,
            time: 0.0,
            next_id: 0,
            rng,
            stats: EngineStats::default(),
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn lane(&self, axis: Axis) -> &Lane {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn lane_mut(&mut self, axis: Axis) -> &mut Lane {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    pub fn lights(&self) -> &LightPair {
        &self.lights
    }

    /// Vehicles on a lane, lead vehicle first
    pub fn lane_state(&self, axis: Axis) -> Vec<VehicleSnapshot> {
        self.lane(axis).snapshot()
    }

    pub fn light_state(&self, axis: Axis) -> LightState {
        self.lights.state(axis)
    }

    pub fn vehicle_count(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Draw a vehicle speed from the configured range
    fn random_vehicle_speed(&mut self) -> f64 {
        let (min, max) = (self.config.min_vehicle_speed, self.config.max_vehicle_speed);
        let speed = self.rng.random_range(min..=max);
        self.config.clamp_vehicle_speed(speed)
    }

    fn random_axis(&mut self) -> Axis {
        if self.rng.random_bool(0.5) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Flip both traffic lights
    pub fn toggle_lights(&mut self) {
        self.lights.toggle();
        self.stats.light_toggles += 1;
        info!(
            "Lights toggled: horizontal={:?}, vertical={:?}",
            self.lights.state(Axis::Horizontal),
            self.lights.state(Axis::Vertical)
        );
    }

    /// Change the speed multiplier by `delta`, clamped to the configured range
    ///
    /// Returns the new multiplier.
    pub fn adjust_speed(&mut self, delta: f64) -> f64 {
        self.set_speed_multiplier(self.speed_multiplier + delta)
    }

    /// Set the speed multiplier, clamped to the configured range
    pub fn set_speed_multiplier(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            return self.speed_multiplier;
        }
        let clamped = self.config.clamp_speed_multiplier(value);
        if clamped != self.speed_multiplier {
            debug!("Speed multiplier {:.2} -> {:.2}", self.speed_multiplier, clamped);
        }
        self.speed_multiplier = clamped;
        clamped
    }

    /// Spawn a vehicle at the lane's spawn point right away
    ///
    /// Returns `None` if the previous vehicle has not yet moved far enough
    /// from the spawn point to leave room.
    pub fn spawn_manual(&mut self, axis: Axis) -> Option<VehicleId> {
        let speed = self.random_vehicle_speed();
        let spawn_point = self.lane(axis).config().spawn_point;
        let length = self.config.vehicle_length;

        if !self.lane(axis).has_room_for(spawn_point, length) {
            self.stats.spawns_blocked += 1;
            debug!("Spawn point of {:?} lane occupied, skipping spawn", axis);
            return None;
        }

        let id = VehicleId(self.next_id);
        let vehicle = Vehicle::new(id, spawn_point, length, speed);
        if let Err(err) = self.lane_mut(axis).push_back(vehicle) {
            warn!("Spawn on {:?} lane failed: {:#}", axis, err);
            return None;
        }
        self.next_id += 1;
        self.stats.vehicles_spawned += 1;
        debug!("Spawned {:?} on {:?} lane with speed {:.4}", id, axis, speed);
        Some(id)
    }

    /// Place a vehicle at an explicit position behind the lane's tail
    pub fn spawn_vehicle_at(
        &mut self,
        axis: Axis,
        position: f64,
        max_speed: f64,
    ) -> Result<VehicleId> {
        ensure!(
            max_speed.is_finite() && max_speed >= 0.0,
            "vehicle speed must be finite and non-negative, got {}",
            max_speed
        );
        ensure!(position.is_finite(), "vehicle position must be finite");

        let length = self.config.vehicle_length;
        ensure!(
            self.lane(axis).has_room_for(position, length),
            "no room for a vehicle at {:.3} on the {:?} lane",
            position,
            axis
        );

        let id = VehicleId(self.next_id);
        self.lane_mut(axis)
            .push_back(Vehicle::new(id, position, length, max_speed))
            .with_context(|| format!("failed to place vehicle on {:?} lane", axis))?;
        self.next_id += 1;
        self.stats.vehicles_spawned += 1;
        debug!("Placed {:?} on {:?} lane at {:.3}", id, axis, position);
        Ok(id)
    }

    /// Roll the spawn clock and maybe spawn one random vehicle
    fn update_spawning(&mut self, delta: f64) {
        self.spawn_clock += delta;
        if self.spawn_clock < self.config.spawn_interval {
            return;
        }
        self.spawn_clock = 0.0;

        if self.rng.random_bool(self.config.spawn_probability) {
            let axis = self.random_axis();
            self.spawn_manual(axis);
        }
    }

    fn record_lane_update(&mut self, axis: Axis, update: &LaneUpdate) {
        self.stats.stop_line_holds += update.held_at_stop_line as u64;
        self.stats.vehicles_despawned += update.despawned.len() as u64;
        for id in &update.despawned {
            debug!("Despawned {:?} from {:?} lane", id, axis);
        }
    }

    /// Advance the simulation by `delta` frames
    ///
    /// # Panics
    /// If `delta` is negative or NaN.
    pub fn tick(&mut self, delta: f64) {
        assert!(
            delta >= 0.0,
            "tick requires a non-negative delta, got {}",
            delta
        );

        self.time += delta;
        self.stats.ticks += 1;

        self.update_spawning(delta);

        let speed_multiplier = self.speed_multiplier;
        for axis in Axis::ALL {
            let light = self.lights.state(axis);
            let update = self.lane_mut(axis).advance(delta, speed_multiplier, light);
            self.record_lane_update(axis, &update);
        }
    }
}
