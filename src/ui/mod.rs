//! UI module that visualizes the engine state using Bevy
//!
//! This module is purely for visualization and input - all simulation logic
//! is in the `simulation` module. The UI drives `tick` once per frame and
//! reads lane and light state back to draw 2D sprites.

mod components;
mod input;
mod layout;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EngineResource, EntityMappings};

use crate::simulation::SimulationEngine;
use input::handle_input;
use sync::{sync_lights, sync_vehicles, tick_engine};
use world::setup_world;

/// Plugin to register all UI systems around an engine
pub struct IntersectionUiPlugin {
    engine: SimulationEngine,
}

impl IntersectionUiPlugin {
    pub fn new(engine: SimulationEngine) -> Self {
        Self { engine }
    }
}

impl Plugin for IntersectionUiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(EngineResource(self.engine.clone()))
            .init_resource::<EntityMappings>()
            .add_systems(Startup, setup_world)
            .add_systems(
                Update,
                (handle_input, tick_engine, sync_vehicles, sync_lights).chain(),
            );
    }
}
