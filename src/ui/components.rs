//! UI components and resources for linking Bevy entities to engine state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::simulation::{Axis, SimulationEngine, VehicleId};

/// Resource wrapper for the simulation engine
#[derive(Resource)]
pub struct EngineResource(pub SimulationEngine);

/// Links a Bevy entity to a vehicle on one lane
#[derive(Component)]
pub struct VehicleLink {
    pub axis: Axis,
    pub id: VehicleId,
}

/// Links a Bevy entity to the light of one axis
#[derive(Component)]
pub struct LightLink(pub Axis);

/// Resource to track Bevy entities mapped to vehicles
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub vehicles: HashMap<VehicleId, Entity>,
}
