//! Input handling systems
//!
//! Discrete actions fire on the key-press edge only, so holding a key never
//! toggles the lights more than once.

use bevy::prelude::*;

use super::components::EngineResource;
use crate::simulation::{Axis, SPEED_ADJUST_PER_SECOND};

/// Handle keyboard input and forward it to the engine
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut engine: ResMut<EngineResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    if keyboard.just_pressed(KeyCode::Space) {
        engine.0.toggle_lights();
    }

    for (key, axis) in [(KeyCode::KeyH, Axis::Horizontal), (KeyCode::KeyV, Axis::Vertical)] {
        if keyboard.just_pressed(key) && engine.0.spawn_manual(axis).is_none() {
            bevy::log::warn!("Spawn point of {:?} lane is occupied", axis);
        }
    }

    let step = SPEED_ADJUST_PER_SECOND * f64::from(time.delta_secs());
    if keyboard.pressed(KeyCode::ArrowUp) {
        engine.0.adjust_speed(step);
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        engine.0.adjust_speed(-step);
    }
}
