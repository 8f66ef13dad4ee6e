use bevy::prelude::*;
use bevy::math::bounding::Aabb2d;
use bevy::pbr::wireframe::{WireframePlugin, WireframeConfig};
use bevy::window::WindowPlugin;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy_egui::EguiPlugin;
use bevy_rts_camera::*;

pub mod config;
pub mod systems;

#[cfg(test)]
pub mod test;

use config::GRID_SIZE;
use systems::grid::GridPlugin;
use systems::tower::TowerGenerationPlugin;
use systems::ui::UIPlugin;

fn main() -> bevy::app::AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tower Generator".to_string(),
                mode: bevy::window::WindowMode::Windowed,
                resolution: bevy::window::WindowResolution::new(1600.0, 900.0),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WireframePlugin::default())
        .add_plugins(RtsCameraPlugin)

        // my custom plugins
        .add_plugins(GridPlugin)
        .add_plugins(TowerGenerationPlugin)
        .add_plugins(UIPlugin)

        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::BLACK,
        })
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 350.0,
            ..default()
        })
        .insert_resource(ClearColor(Color::srgb_u8(0x0b, 0x14, 0x1a))) // world color
        .add_systems(Startup, start)
        .add_systems(Update, handle_exit)
        .run()
}

// application entry point here
fn start(
    mut commands: Commands
) {
    // spawn camera
    commands.spawn((
        RtsCamera {
            bounds: Aabb2d::new(
                Vec2::ZERO,
                Vec2::splat(GRID_SIZE * 0.5),
            ),
            min_angle: 0.2,
            height_max: 80.0,
            ..default()
        },
        RtsCameraControls {
            key_up: KeyCode::KeyW,
            key_down: KeyCode::KeyS,
            key_left: KeyCode::KeyA,
            key_right: KeyCode::KeyD,
            key_rotate_left: KeyCode::KeyQ,
            key_rotate_right: KeyCode::KeyE,
            pan_speed: 20.0,
            zoom_sensitivity: 0.15,
            edge_pan_width: 0.0,
            ..default()
        },
    ));

    // key light with shadows
    commands.spawn((
        DirectionalLight {
            illuminance: 6_000.,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(18.0, 28.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // cool fill light from the opposite side
    commands.spawn((
        DirectionalLight {
            color: Color::srgb_u8(0x8a, 0xd9, 0xff),
            illuminance: 1_800.,
            ..default()
        },
        Transform::from_xyz(-18.0, 10.0, -16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// application exit
fn handle_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
