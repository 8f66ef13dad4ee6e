// turns the current tower into entities, one generation at a time

use bevy::prelude::*;

use super::assembler::TowerState;
use super::mesh_gen::contour_to_slab;
use super::{RebuildEvent, ResetEvent};

// entity hierarchy components
#[derive(Component)]
pub struct TowerRoot {
    pub generation: u64,
}

#[derive(Component)]
pub struct Floor {
    pub index: u32,
    pub progress: f32,
}

pub fn spawn_tower(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    state: &TowerState,
) -> Entity {
    let params = &state.params;

    let root = commands.spawn((
        TowerRoot { generation: state.generation() },
        Transform::default(),
        Visibility::Visible,
    )).id();

    let mut floor_entities = Vec::with_capacity(state.tower().len());

    for floor in state.tower().floors() {
        let mesh = meshes.add(contour_to_slab(&floor.contour, params.slab_thickness));

        // one material per floor, colors differ along the gradient
        let [r, g, b] = floor.color;
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            perceptual_roughness: params.roughness,
            metallic: params.metalness,
            ..default()
        });

        let floor_entity = commands.spawn((
            Floor { index: floor.index, progress: floor.progress },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform {
                translation: floor.position,
                rotation: floor.orientation,
                // footprint only, never the slab thickness
                scale: Vec3::new(floor.scale, 1.0, floor.scale),
            },
            Visibility::Visible,
        )).id();

        floor_entities.push(floor_entity);
    }

    commands.entity(root).add_children(&floor_entities);
    root
}

pub fn spawn_initial_tower(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<TowerState>,
) {
    spawn_tower(&mut commands, &mut meshes, &mut materials, &state);
    info!("spawned initial tower with {} floors", state.tower().len());
}

// all edits of a frame collapse into one rebuild, a reset wins over plain edits
pub fn handle_rebuild(
    mut commands: Commands,
    mut rebuild_events: EventReader<RebuildEvent>,
    mut reset_events: EventReader<ResetEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut state: ResMut<TowerState>,
    roots: Query<(Entity, &TowerRoot)>,
) {
    let reset = reset_events.read().count() > 0;
    let rebuild = rebuild_events.read().count() > 0;
    if !reset && !rebuild {
        return;
    }

    if reset {
        state.reset();
    } else {
        state.rebuild();
    }

    // release the previous generation, children and their asset handles go with it
    for (entity, root) in roots.iter() {
        if root.generation != state.generation() {
            commands.entity(entity).try_despawn();
        }
    }

    spawn_tower(&mut commands, &mut meshes, &mut materials, &state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::tower::ParameterSet;

    // headless app with just enough to run the tower systems
    fn tower_app(params: ParameterSet) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::asset::AssetPlugin::default());
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.insert_resource(TowerState::new(params));
        app.add_event::<RebuildEvent>();
        app.add_event::<ResetEvent>();
        app.add_systems(Startup, spawn_initial_tower);
        app.add_systems(Update, handle_rebuild);
        app.update();
        app
    }

    fn root_generations(app: &mut App) -> Vec<u64> {
        app.world_mut()
            .query::<&TowerRoot>()
            .iter(app.world())
            .map(|root| root.generation)
            .collect()
    }

    fn floor_count(app: &mut App) -> usize {
        app.world_mut().query::<&Floor>().iter(app.world()).count()
    }

    #[test]
    fn initial_tower_is_spawned_once() {
        let mut app = tower_app(ParameterSet { floor_count: 6, ..ParameterSet::default() });

        assert_eq!(root_generations(&mut app), vec![0]);
        assert_eq!(floor_count(&mut app), 6);
    }

    #[test]
    fn rebuild_replaces_the_previous_generation() {
        let mut app = tower_app(ParameterSet { floor_count: 6, ..ParameterSet::default() });

        app.world_mut().resource_mut::<TowerState>().params.floor_count = 9;
        app.world_mut().send_event(RebuildEvent);
        app.world_mut().send_event(RebuildEvent);
        app.update();

        let generation = app.world().resource::<TowerState>().generation();
        assert_eq!(generation, 1);
        assert_eq!(root_generations(&mut app), vec![generation]);
        assert_eq!(floor_count(&mut app), 9);

        // no events, nothing changes
        app.update();
        assert_eq!(root_generations(&mut app), vec![generation]);
        assert_eq!(floor_count(&mut app), 9);
    }

    #[test]
    fn reset_wins_over_edits_in_the_same_frame() {
        let mut app = tower_app(ParameterSet { floor_count: 6, ..ParameterSet::default() });

        app.world_mut().resource_mut::<TowerState>().params.floor_count = 15;
        app.world_mut().send_event(RebuildEvent);
        app.world_mut().send_event(ResetEvent);
        app.update();

        let state = app.world().resource::<TowerState>();
        let generation = state.generation();
        let floors = state.tower().len();
        assert_eq!(state.params.floor_count, 6);
        assert_eq!(floors, 6);

        assert_eq!(root_generations(&mut app), vec![generation]);
        assert_eq!(floor_count(&mut app), floors);
    }
}
