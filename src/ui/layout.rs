//! Mapping from lane progress coordinates to screen space

use bevy::prelude::*;

use crate::simulation::{Axis, LightState, SimulationEngine, VehicleSnapshot};

/// Screen pixels per simulation unit
pub const PIXELS_PER_UNIT: f32 = 330.0;

/// Half-extent of each road, in simulation units
pub const ROAD_HALF_WIDTH: f32 = 0.1;
pub const ROAD_HALF_LENGTH: f32 = 1.2;

/// Lane centerline offset from the road center
const LANE_OFFSET: f32 = -0.05;

/// Cross-road size of a vehicle
const VEHICLE_WIDTH: f32 = 0.08;

pub const LIGHT_SIZE: f32 = 0.1;
const LIGHT_OFFSET: f32 = 0.2;

/// Screen position of a progress coordinate on a lane's centerline
pub fn lane_point(engine: &SimulationEngine, axis: Axis, progress: f64, z: f32) -> Vec3 {
    let along = engine.lane(axis).config().direction.apply(progress) as f32 * PIXELS_PER_UNIT;
    let across = LANE_OFFSET * PIXELS_PER_UNIT;
    match axis {
        Axis::Horizontal => Vec3::new(along, across, z),
        Axis::Vertical => Vec3::new(across, along, z),
    }
}

pub fn vehicle_translation(engine: &SimulationEngine, axis: Axis, vehicle: &VehicleSnapshot) -> Vec3 {
    lane_point(engine, axis, vehicle.center(), 2.0)
}

pub fn vehicle_size(axis: Axis, length: f64) -> Vec2 {
    let length = length as f32 * PIXELS_PER_UNIT;
    let width = VEHICLE_WIDTH * PIXELS_PER_UNIT;
    match axis {
        Axis::Horizontal => Vec2::new(length, width),
        Axis::Vertical => Vec2::new(width, length),
    }
}

pub fn vehicle_color(axis: Axis) -> Color {
    match axis {
        Axis::Horizontal => Color::srgb(1.0, 0.0, 0.0),
        Axis::Vertical => Color::srgb(0.0, 0.0, 1.0),
    }
}

/// Light sits beside its lane, level with the stop line
pub fn light_translation(engine: &SimulationEngine, axis: Axis) -> Vec3 {
    let stop_line = engine.lane(axis).stop_line();
    let at_stop_line = engine.lane(axis).config().direction.apply(stop_line) as f32;
    let (x, y) = match axis {
        Axis::Horizontal => (at_stop_line, LIGHT_OFFSET),
        Axis::Vertical => (LIGHT_OFFSET, at_stop_line),
    };
    Vec3::new(x * PIXELS_PER_UNIT, y * PIXELS_PER_UNIT, 3.0)
}

pub fn light_color(state: LightState) -> Color {
    match state {
        LightState::Green => Color::srgb(0.0, 1.0, 0.0),
        LightState::Red => Color::srgb(1.0, 0.0, 0.0),
    }
}
