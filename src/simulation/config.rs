//! Process-start configuration for the simulation engine

use anyhow::{ensure, Context, Result};

use super::types::{
    Axis, Direction, DESPAWN_BOUND, GAP_REQUIRED, INTERSECTION_EXIT, MAX_SPEED_MULTIPLIER,
    MAX_VEHICLE_SPEED, MIN_SPEED_MULTIPLIER, MIN_VEHICLE_SPEED, SPAWN_INTERVAL, SPAWN_POINT,
    SPAWN_PROBABILITY, STOP_LINE, VEHICLE_LENGTH,
};

/// Fixed geometry of one lane, in progress coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneConfig {
    pub direction: Direction,
    pub spawn_point: f64,
    pub stop_line: f64,
    pub intersection_exit: f64,
    pub despawn_bound: f64,
}

impl LaneConfig {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            spawn_point: SPAWN_POINT,
            stop_line: STOP_LINE,
            intersection_exit: INTERSECTION_EXIT,
            despawn_bound: DESPAWN_BOUND,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.spawn_point.is_finite() && self.despawn_bound.is_finite(),
            "lane bounds must be finite"
        );
        ensure!(
            self.spawn_point < self.stop_line,
            "spawn point {} must lie before stop line {}",
            self.spawn_point,
            self.stop_line
        );
        ensure!(
            self.stop_line < self.intersection_exit,
            "stop line {} must lie before intersection exit {}",
            self.stop_line,
            self.intersection_exit
        );
        ensure!(
            self.intersection_exit < self.despawn_bound,
            "intersection exit {} must lie before despawn bound {}",
            self.intersection_exit,
            self.despawn_bound
        );
        Ok(())
    }
}

/// All tunables of a simulation run
///
/// Defaults reproduce the classic intersection: horizontal traffic runs left
/// to right, vertical traffic runs top to bottom, both stopping just short of
/// the crossing road.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub horizontal_lane: LaneConfig,
    pub vertical_lane: LaneConfig,
    pub gap_required: f64,
    pub vehicle_length: f64,
    /// Frames between random spawn attempts
    pub spawn_interval: f64,
    pub spawn_probability: f64,
    pub min_vehicle_speed: f64,
    pub max_vehicle_speed: f64,
    pub min_speed_multiplier: f64,
    pub max_speed_multiplier: f64,
    pub initial_speed_multiplier: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizontal_lane: LaneConfig::new(Direction::Forward),
            vertical_lane: LaneConfig::new(Direction::Reverse),
            gap_required: GAP_REQUIRED,
            vehicle_length: VEHICLE_LENGTH,
            spawn_interval: SPAWN_INTERVAL,
            spawn_probability: SPAWN_PROBABILITY,
            min_vehicle_speed: MIN_VEHICLE_SPEED,
            max_vehicle_speed: MAX_VEHICLE_SPEED,
            min_speed_multiplier: MIN_SPEED_MULTIPLIER,
            max_speed_multiplier: MAX_SPEED_MULTIPLIER,
            initial_speed_multiplier: 1.0,
        }
    }
}

impl SimConfig {
    pub fn lane(&self, axis: Axis) -> &LaneConfig {
        match axis {
            Axis::Horizontal => &self.horizontal_lane,
            Axis::Vertical => &self.vertical_lane,
        }
    }

    /// Same config with random spawning disabled
    pub fn without_random_spawns(mut self) -> Self {
        self.spawn_probability = 0.0;
        self
    }

    /// Check every range the engine relies on
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            self.lane(axis)
                .validate()
                .with_context(|| format!("invalid {:?} lane", axis))?;
        }
        ensure!(
            self.gap_required.is_finite() && self.gap_required >= 0.0,
            "gap_required must be finite and non-negative, got {}",
            self.gap_required
        );
        ensure!(
            self.vehicle_length.is_finite() && self.vehicle_length > 0.0,
            "vehicle_length must be finite and positive, got {}",
            self.vehicle_length
        );
        ensure!(
            self.spawn_interval.is_finite() && self.spawn_interval > 0.0,
            "spawn_interval must be finite and positive, got {}",
            self.spawn_interval
        );
        ensure!(
            (0.0..=1.0).contains(&self.spawn_probability),
            "spawn_probability must be within [0, 1], got {}",
            self.spawn_probability
        );
        ensure!(
            self.max_vehicle_speed.is_finite()
                && self.min_vehicle_speed >= 0.0
                && self.min_vehicle_speed <= self.max_vehicle_speed,
            "vehicle speed range [{}, {}] is invalid",
            self.min_vehicle_speed,
            self.max_vehicle_speed
        );
        ensure!(
            self.max_speed_multiplier.is_finite()
                && self.min_speed_multiplier > 0.0
                && self.min_speed_multiplier <= self.max_speed_multiplier,
            "speed multiplier range [{}, {}] is invalid",
            self.min_speed_multiplier,
            self.max_speed_multiplier
        );
        ensure!(
            self.initial_speed_multiplier.is_finite(),
            "initial speed multiplier must be finite"
        );
        Ok(())
    }

    pub fn clamp_speed_multiplier(&self, value: f64) -> f64 {
        value.clamp(self.min_speed_multiplier, self.max_speed_multiplier)
    }

    pub fn clamp_vehicle_speed(&self, value: f64) -> f64 {
        value.clamp(self.min_vehicle_speed, self.max_vehicle_speed)
    }
}
