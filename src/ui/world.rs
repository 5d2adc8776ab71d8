//! World setup systems for camera, roads and lights

use bevy::prelude::*;

use super::components::{EngineResource, LightLink};
use super::layout::{
    lane_point, light_color, light_translation, LIGHT_SIZE, PIXELS_PER_UNIT, ROAD_HALF_LENGTH,
    ROAD_HALF_WIDTH,
};
use crate::simulation::Axis;

/// System to set up the static scene (camera, roads, stop lines, lights)
pub fn setup_world(mut commands: Commands, engine: Res<EngineResource>) {
    let engine = &engine.0;

    commands.insert_resource(ClearColor(Color::srgb(0.3, 0.5, 0.3)));
    commands.spawn(Camera2d);

    let road_color = Color::srgb(0.2, 0.2, 0.2);
    let long = 2.0 * ROAD_HALF_LENGTH * PIXELS_PER_UNIT;
    let wide = 2.0 * ROAD_HALF_WIDTH * PIXELS_PER_UNIT;
    commands.spawn((
        Sprite::from_color(road_color, Vec2::new(long, wide)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
    commands.spawn((
        Sprite::from_color(road_color, Vec2::new(wide, long)),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    for axis in Axis::ALL {
        let stop_line = lane_point(engine, axis, engine.lane(axis).stop_line(), 1.0);
        let size = match axis {
            Axis::Horizontal => Vec2::new(2.0, wide),
            Axis::Vertical => Vec2::new(wide, 2.0),
        };
        // Center the marker on the road rather than the lane
        let translation = match axis {
            Axis::Horizontal => Vec3::new(stop_line.x, 0.0, 1.0),
            Axis::Vertical => Vec3::new(0.0, stop_line.y, 1.0),
        };
        commands.spawn((
            Sprite::from_color(Color::WHITE, size),
            Transform::from_translation(translation),
        ));

        commands.spawn((
            LightLink(axis),
            Sprite::from_color(
                light_color(engine.light_state(axis)),
                Vec2::splat(LIGHT_SIZE * PIXELS_PER_UNIT),
            ),
            Transform::from_translation(light_translation(engine, axis)),
        ));
    }
}
