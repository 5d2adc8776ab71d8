//! Systems for syncing Bevy entities with engine state

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::{EngineResource, EntityMappings, LightLink, VehicleLink};
use super::layout::{light_color, vehicle_color, vehicle_size, vehicle_translation};
use crate::simulation::{Axis, VehicleId, TICKS_PER_SECOND};

/// System to advance the engine by the frame time
pub fn tick_engine(time: Res<Time>, mut engine: ResMut<EngineResource>) {
    engine.0.tick(f64::from(time.delta_secs()) * TICKS_PER_SECOND);
}

/// System to sync vehicle sprites from engine state
pub fn sync_vehicles(
    mut commands: Commands,
    engine: Res<EngineResource>,
    mut mappings: ResMut<EntityMappings>,
    mut vehicle_query: Query<&mut Transform, With<VehicleLink>>,
) {
    let engine = &engine.0;

    // Move mapped sprites and spawn sprites for new vehicles
    let mut live: HashSet<VehicleId> = HashSet::new();

    for axis in Axis::ALL {
        for vehicle in engine.lane_state(axis) {
            live.insert(vehicle.id);
            let translation = vehicle_translation(engine, axis, &vehicle);

            if let Some(&entity) = mappings.vehicles.get(&vehicle.id) {
                if let Ok(mut transform) = vehicle_query.get_mut(entity) {
                    transform.translation = translation;
                }
                continue;
            }

            let entity = commands
                .spawn((
                    VehicleLink {
                        axis,
                        id: vehicle.id,
                    },
                    Sprite::from_color(vehicle_color(axis), vehicle_size(axis, vehicle.length)),
                    Transform::from_translation(translation),
                ))
                .id();
            mappings.vehicles.insert(vehicle.id, entity);
        }
    }

    // Vehicle despawned in the engine
    mappings.vehicles.retain(|id, entity| {
        if live.contains(id) {
            return true;
        }
        commands.entity(*entity).despawn();
        false
    });
}

/// System to recolor the lights
pub fn sync_lights(engine: Res<EngineResource>, mut light_query: Query<(&LightLink, &mut Sprite)>) {
    for (link, mut sprite) in light_query.iter_mut() {
        sprite.color = light_color(engine.0.light_state(link.0));
    }
}
