use bevy::prelude::*;
use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};

use crate::config::GRID_SIZE;

// fixed ground grid centered on the tower
// so user can determine their bearings in 3d space, and for sense of scale
pub struct GridPlugin;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct GridGizmoGroup;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GridConfig::default())
            .init_gizmo_group::<GridGizmoGroup>()
            .add_systems(Startup, setup_gizmos)
            .add_systems(Update, draw_grid);
    }
}

// setting these parameters as a resource allows for runtime modifications
#[derive(Resource)]
pub struct GridConfig {
    pub size: f32,
    pub divisions: u32,
    pub center_color: Color,
    pub line_color: Color,
    pub height: f32,
    pub enabled: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            divisions: GRID_SIZE as u32,
            center_color: Color::srgb_u8(0x28, 0x40, 0x4a),
            line_color: Color::srgb_u8(0x1a, 0x2b, 0x32),
            height: -0.01,
            enabled: true,
        }
    }
}

fn setup_gizmos(
    mut config_store: ResMut<GizmoConfigStore>
) {
    let (config, _) = config_store.config_mut::<GridGizmoGroup>();
    config.depth_bias = 0.1; // render depth
}

/// Offsets of the grid lines from the center, both ends included.
pub fn grid_line_offsets(size: f32, divisions: u32) -> Vec<f32> {
    let divisions = divisions.max(1);
    let step = size / divisions as f32;
    let half = size * 0.5;
    (0..=divisions).map(|i| -half + i as f32 * step).collect()
}

fn draw_grid(
    mut gizmos: Gizmos<GridGizmoGroup>,
    params: Res<GridConfig>,
) {
    if !params.enabled {
        return;
    }

    let half = params.size * 0.5;
    let y = params.height;
    let center = params.divisions / 2;
    let has_center = params.divisions % 2 == 0;

    for (i, offset) in grid_line_offsets(params.size, params.divisions).into_iter().enumerate() {
        let color = if has_center && i as u32 == center {
            params.center_color
        } else {
            params.line_color
        };

        // line parallel to Z, then line parallel to X
        gizmos.line(Vec3::new(offset, y, -half), Vec3::new(offset, y, half), color);
        gizmos.line(Vec3::new(-half, y, offset), Vec3::new(half, y, offset), color);
    }
}
