// cross-section blending between two regular polygons

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use super::curve::{apply_curve, lerp};
use super::params::{CurveKind, ShapeKind};

/// Closed contour, last point implicitly connects back to the first.
pub type Contour = Vec<Vec2>;

/// Polar radius of a unit regular polygon at angle `theta`.
/// The circumradius is 1, with the first vertex on the +X axis.
pub fn polygon_radius(theta: f32, shape: ShapeKind) -> f32 {
    let Some(sides) = shape.sides() else {
        return 1.0;
    };

    let sector = TAU / sides as f32;
    let half = PI / sides as f32;
    half.cos() / (theta.rem_euclid(sector) - half).cos()
}

/// Samples `segments` points of the blended cross-section, counter-clockwise from +X.
/// `raw_t` is eased with `curve` before blending the two radii.
pub fn sample_contour(
    bottom: ShapeKind,
    top: ShapeKind,
    curve: CurveKind,
    raw_t: f32,
    width: f32,
    depth: f32,
    segments: usize,
) -> Contour {
    let shape_t = apply_curve(raw_t, curve);
    let half_width = width * 0.5;
    let half_depth = depth * 0.5;

    (0..segments)
        .map(|i| {
            let theta = TAU * i as f32 / segments as f32;
            let radius = lerp(polygon_radius(theta, bottom), polygon_radius(theta, top), shape_t);
            Vec2::new(theta.cos() * radius * half_width, theta.sin() * radius * half_depth)
        })
        .collect()
}
