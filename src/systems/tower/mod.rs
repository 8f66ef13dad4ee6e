// this is the entry point for the tower generation plugin
use bevy::prelude::*;

pub mod assembler;
pub mod curve;
pub mod mesh_gen;
pub mod params;
pub mod shape;
pub mod spawn;
pub mod transform;

pub use assembler::{FloorDescriptor, Tower, TowerState};
pub use params::{CurveKind, ParameterSet, ShapeKind, TwistAxis};

use crate::systems::export::{handle_export, ExportEvent};
use crate::systems::preset::{handle_save_preset, startup_params, SavePresetEvent};

// Event for rebuilding from the current parameters
#[derive(Event)]
pub struct RebuildEvent;

// Event for restoring the default snapshot
#[derive(Event)]
pub struct ResetEvent;

// main plugin for generation
pub struct TowerGenerationPlugin;

impl Plugin for TowerGenerationPlugin {
    fn build(&self, app: &mut App) {
        app
            // the startup parameters double as the reset snapshot
            .insert_resource(TowerState::new(startup_params()))

            .add_event::<RebuildEvent>()
            .add_event::<ResetEvent>()
            .add_event::<SavePresetEvent>()
            .add_event::<ExportEvent>()

            .add_systems(Startup, spawn::spawn_initial_tower)
            .add_systems(Update, (spawn::handle_rebuild, handle_save_preset, handle_export));
    }
}
