// tower parameter set, mutated by the host between rebuilds only

use serde::{Deserialize, Serialize};

use crate::config::*;

/// Easing applied to a gradient's progress.
/// Serialized by name; unknown names fall back to `Linear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum CurveKind {
    #[default]
    Linear,
    Smoothstep,
    EaseInOutCubic,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Linear, CurveKind::Smoothstep, CurveKind::EaseInOutCubic];

    pub fn name(self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Smoothstep => "smoothstep",
            CurveKind::EaseInOutCubic => "easeInOutCubic",
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(CurveKind::Linear)
    }
}

impl From<String> for CurveKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CurveKind> for &'static str {
    fn from(kind: CurveKind) -> Self {
        kind.name()
    }
}

/// Cross-section of a slab, approximated as a regular polygon in polar form.
/// Serialized by name; unknown names fall back to `Circle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ShapeKind {
    Square,
    #[default]
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(ShapeKind::Circle)
    }

    /// Side count of the regular polygon, `None` for the circle.
    pub fn sides(self) -> Option<u32> {
        match self {
            ShapeKind::Square => Some(4),
            ShapeKind::Triangle => Some(3),
            ShapeKind::Circle => None,
        }
    }
}

impl From<String> for ShapeKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ShapeKind> for &'static str {
    fn from(kind: ShapeKind) -> Self {
        kind.name()
    }
}

/// One independently curved twist gradient, angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TwistAxis {
    pub min: f32,
    pub max: f32,
    pub curve: CurveKind,
}

impl TwistAxis {
    pub const NEUTRAL: TwistAxis = TwistAxis { min: 0.0, max: 0.0, curve: CurveKind::Linear };
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    // layout
    pub floor_count: u32,
    pub floor_height: f32,
    pub slab_width: f32,
    pub slab_depth: f32,
    pub slab_thickness: f32,
    // cross-section
    pub shape_bottom: ShapeKind,
    pub shape_top: ShapeKind,
    pub shape_curve: CurveKind,
    // scale gradient
    pub scale_min: f32,
    pub scale_max: f32,
    pub scale_curve: CurveKind,
    // twist gradients
    pub twist_x: TwistAxis,
    pub twist_y: TwistAxis,
    pub twist_z: TwistAxis,
    // bend
    pub bend_angle_degrees: f32,
    pub bend_direction_degrees: f32,
    pub bend_curve: CurveKind,
    // rendering only, passed through untouched
    pub color_bottom: [f32; 3],
    pub color_top: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl ParameterSet {
    /// Floor count with the lower bound of one floor applied.
    pub fn effective_floor_count(&self) -> u32 {
        self.floor_count.max(1)
    }

    /// Progress of floor `index` along the tower, 0 for a single-floor tower.
    pub fn floor_progress(&self, index: u32) -> f32 {
        let floors = self.effective_floor_count();
        if floors == 1 {
            0.0
        } else {
            index as f32 / (floors - 1) as f32
        }
    }

    /// Neutral parameters: one straight, untwisted, unscaled square column.
    /// Used as the baseline for scenarios that only vary a few fields.
    pub fn neutral() -> Self {
        Self {
            floor_count: 1,
            floor_height: 1.0,
            slab_width: 1.0,
            slab_depth: 1.0,
            slab_thickness: 0.1,
            shape_bottom: ShapeKind::Square,
            shape_top: ShapeKind::Square,
            shape_curve: CurveKind::Linear,
            scale_min: 1.0,
            scale_max: 1.0,
            scale_curve: CurveKind::Linear,
            twist_x: TwistAxis::NEUTRAL,
            twist_y: TwistAxis::NEUTRAL,
            twist_z: TwistAxis::NEUTRAL,
            bend_angle_degrees: 0.0,
            bend_direction_degrees: 0.0,
            bend_curve: CurveKind::Linear,
            color_bottom: [1.0, 1.0, 1.0],
            color_top: [1.0, 1.0, 1.0],
            roughness: ROUGHNESS,
            metalness: METALNESS,
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            floor_count: FLOOR_COUNT,
            floor_height: FLOOR_HEIGHT,
            slab_width: SLAB_WIDTH,
            slab_depth: SLAB_DEPTH,
            slab_thickness: SLAB_THICKNESS,
            shape_bottom: SHAPE_BOTTOM,
            shape_top: SHAPE_TOP,
            shape_curve: SHAPE_CURVE,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            scale_curve: SCALE_CURVE,
            twist_x: TwistAxis::NEUTRAL,
            twist_y: TwistAxis { min: TWIST_Y_MIN, max: TWIST_Y_MAX, curve: TWIST_Y_CURVE },
            twist_z: TwistAxis::NEUTRAL,
            bend_angle_degrees: BEND_ANGLE,
            bend_direction_degrees: BEND_DIRECTION,
            bend_curve: BEND_CURVE,
            color_bottom: COLOR_BOTTOM,
            color_top: COLOR_TOP,
            roughness: ROUGHNESS,
            metalness: METALNESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_progress_spans_unit_interval() {
        let mut params = ParameterSet::neutral();
        params.floor_count = 5;
        assert_eq!(params.floor_progress(0), 0.0);
        assert_eq!(params.floor_progress(2), 0.5);
        assert_eq!(params.floor_progress(4), 1.0);
    }

    #[test]
    fn zero_floors_behave_as_one() {
        let mut params = ParameterSet::neutral();
        params.floor_count = 0;
        assert_eq!(params.effective_floor_count(), 1);
        assert_eq!(params.floor_progress(0), 0.0);
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(CurveKind::from_name("bounce"), CurveKind::Linear);
        assert_eq!(CurveKind::from_name("easeInOutCubic"), CurveKind::EaseInOutCubic);
        assert_eq!(ShapeKind::from_name("hexagon"), ShapeKind::Circle);
        assert_eq!(ShapeKind::from_name("triangle"), ShapeKind::Triangle);
    }

    #[test]
    fn ron_uses_names_and_tolerates_unknown_kinds() {
        let text = ron::ser::to_string(&ParameterSet::default()).unwrap();
        assert!(text.contains("\"smoothstep\""));
        assert!(text.contains("\"square\""));

        let parsed: ParameterSet =
            ron::de::from_str("(floor_count: 3, shape_top: \"star\", scale_curve: \"wobble\")").unwrap();
        assert_eq!(parsed.floor_count, 3);
        assert_eq!(parsed.shape_top, ShapeKind::Circle);
        assert_eq!(parsed.scale_curve, CurveKind::Linear);
        // omitted fields keep their defaults
        assert_eq!(parsed.floor_height, FLOOR_HEIGHT);
    }
}
