// per-floor scale, orientation and position
//
// The spine of the tower is an arc of a circle in a vertical plane, its length
// equals the straight tower height. The bend plane starts as XY and is yawed
// about +Y by the bend direction.

use bevy::prelude::*;

use super::curve::{apply_curve, lerp};
use super::params::{ParameterSet, TwistAxis};

/// Below this bend angle (radians) the spine is a straight segment.
pub const BEND_EPSILON: f32 = 1e-4;
/// Lower bound for the spine length, keeps a single-floor tower well defined.
pub const HEIGHT_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorTransform {
    pub scale: f32,
    /// Per-axis twist in degrees, before composition.
    pub twist_degrees: Vec3,
    pub orientation: Quat,
    pub position: Vec3,
}

/// Point on the spine with its signed arc angle, unyawed.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SpineSample {
    position: Vec3,
    angle: f32,
}

/// Floor placement on the spine, centered and yawed into the bend plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinePoint {
    pub position: Vec3,
    /// Rotation taking the slab's up axis onto the spine tangent inside the bend plane.
    pub tilt: Quat,
}

/// Spine geometry shared by all floors of one tower.
#[derive(Clone, Copy, Debug)]
pub struct Spine {
    total_height: f32,
    total_angle: f32,
    yaw: Quat,
    /// Half of the end-to-end displacement, subtracted to center the spine on the origin.
    center_offset: Vec3,
}

impl Spine {
    pub fn new(params: &ParameterSet) -> Self {
        let floors = params.effective_floor_count();
        let total_height = ((floors - 1) as f32 * params.floor_height).max(HEIGHT_EPSILON);
        let total_angle = params.bend_angle_degrees.to_radians();

        let mut spine = Self {
            total_height,
            total_angle,
            yaw: Quat::from_rotation_y(params.bend_direction_degrees.to_radians()),
            center_offset: Vec3::ZERO,
        };
        spine.center_offset = spine.sample_at(1.0, 1.0).position * 0.5;
        spine
    }

    #[cfg(test)]
    fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn is_straight(&self) -> bool {
        self.total_angle.abs() <= BEND_EPSILON
    }

    // uncentered, unyawed sample; `t` drives the straight branch, `bend_t` the arc
    fn sample_at(&self, t: f32, bend_t: f32) -> SpineSample {
        if self.is_straight() {
            return SpineSample {
                position: Vec3::new(0.0, t * self.total_height, 0.0),
                angle: 0.0,
            };
        }

        let radius = self.total_height / self.total_angle;
        let angle = self.total_angle * bend_t;
        let (sin, cos) = angle.sin_cos();
        SpineSample {
            position: Vec3::new(radius * (1.0 - cos), radius * sin, 0.0),
            angle,
        }
    }

    /// Placement of the floor at progress `t` with eased bend progress `bend_t`.
    pub fn locate(&self, t: f32, bend_t: f32) -> SpinePoint {
        let sample = self.sample_at(t, bend_t);
        let centered = sample.position - self.center_offset;
        let yawed = self.yaw * centered;
        // yaw about +Y leaves the height untouched, take it from the centered sample directly
        let position = Vec3::new(yawed.x, centered.y, yawed.z);

        // the arc turns +Y toward +X about -Z, built in the XY plane and then yawed,
        // so the axis follows the bend direction even when the tangent reaches -Y
        let tilt = self.yaw * Quat::from_rotation_z(-sample.angle) * self.yaw.inverse();

        SpinePoint { position, tilt }
    }
}

fn twist_angle(axis: &TwistAxis, t: f32) -> f32 {
    lerp(axis.min, axis.max, apply_curve(t, axis.curve))
}

/// Fixed intrinsic X, then Y, then Z composition. Angles in degrees.
pub fn twist_rotation(degrees: Vec3) -> Quat {
    Quat::from_rotation_x(degrees.x.to_radians())
        * Quat::from_rotation_y(degrees.y.to_radians())
        * Quat::from_rotation_z(degrees.z.to_radians())
}

pub fn compose_floor(params: &ParameterSet, spine: &Spine, t: f32) -> FloorTransform {
    let scale = lerp(params.scale_min, params.scale_max, apply_curve(t, params.scale_curve));

    let twist_degrees = Vec3::new(
        twist_angle(&params.twist_x, t),
        twist_angle(&params.twist_y, t),
        twist_angle(&params.twist_z, t),
    );

    let bend_t = apply_curve(t, params.bend_curve);
    let point = spine.locate(t, bend_t);

    // twist lives in the slab frame, tilt is applied after it
    let orientation = point.tilt * twist_rotation(twist_degrees);

    FloorTransform {
        scale,
        twist_degrees,
        orientation,
        position: point.position,
    }
}
