// Configuration file, all measurements in scene units (1 unit = 1 meter)
// This controls the initial tower parameter settings

use crate::systems::tower::{CurveKind, ShapeKind};

// converts an 8-bit sRGB triple into [0, 1] components
const fn rgb8(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

// Layout
pub const FLOOR_COUNT: u32 = 40;
pub const FLOOR_HEIGHT: f32 = 0.7;
pub const SLAB_WIDTH: f32 = 8.0;
pub const SLAB_DEPTH: f32 = 8.0;
pub const SLAB_THICKNESS: f32 = 0.4;

// Cross-section
pub const SHAPE_BOTTOM: ShapeKind = ShapeKind::Square;
pub const SHAPE_TOP: ShapeKind = ShapeKind::Circle;
pub const SHAPE_CURVE: CurveKind = CurveKind::Smoothstep;
pub const CONTOUR_SEGMENTS: usize = 64; // fixed for visual smoothness, not user-exposed

// Scale gradient
pub const SCALE_MIN: f32 = 0.65;
pub const SCALE_MAX: f32 = 1.25;
pub const SCALE_CURVE: CurveKind = CurveKind::Smoothstep;

// Twist gradient (degrees), Y is the vertical axis
pub const TWIST_Y_MIN: f32 = -15.0;
pub const TWIST_Y_MAX: f32 = 55.0;
pub const TWIST_Y_CURVE: CurveKind = CurveKind::Smoothstep;

// Bend (degrees)
pub const BEND_ANGLE: f32 = 0.0;
pub const BEND_DIRECTION: f32 = 0.0;
pub const BEND_CURVE: CurveKind = CurveKind::Linear;

// Color and material
pub const COLOR_BOTTOM: [f32; 3] = rgb8(0x2a, 0xa4, 0xff);
pub const COLOR_TOP: [f32; 3] = rgb8(0xff, 0x7b, 0x57);
pub const ROUGHNESS: f32 = 0.45;
pub const METALNESS: f32 = 0.1;

// UI slider ranges
pub const FLOOR_COUNT_RANGE: (u32, u32) = (1, 200);
pub const FLOOR_HEIGHT_RANGE: (f32, f32) = (0.2, 2.0);
pub const SLAB_SIZE_RANGE: (f32, f32) = (2.0, 20.0);
pub const SLAB_THICKNESS_RANGE: (f32, f32) = (0.1, 1.2);
pub const SCALE_RANGE: (f32, f32) = (0.2, 2.0);
pub const TWIST_RANGE: (f32, f32) = (-180.0, 180.0);
pub const BEND_ANGLE_RANGE: (f32, f32) = (-180.0, 180.0);
pub const BEND_DIRECTION_RANGE: (f32, f32) = (0.0, 360.0);

// Scene
pub const GRID_SIZE: f32 = 60.0;

// Presets are read from and written to the working directory
pub const PRESET_PATH: &str = "tower_preset.ron";
