// tower-level scenarios, run against the pure assembler

use bevy::prelude::*;

use crate::systems::tower::{CurveKind, ParameterSet, ShapeKind, Tower, TowerState, TwistAxis};

const EPS: f32 = 1e-4;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn rebuild_is_deterministic() {
    let params = ParameterSet {
        bend_angle_degrees: 70.0,
        bend_direction_degrees: 135.0,
        bend_curve: CurveKind::EaseInOutCubic,
        twist_x: TwistAxis { min: -10.0, max: 25.0, curve: CurveKind::Smoothstep },
        shape_bottom: ShapeKind::Triangle,
        ..ParameterSet::default()
    };

    let first = Tower::rebuild(&params);
    let second = Tower::rebuild(&params);
    assert_eq!(first, second);

    // equality above is float equality, check the bits as well
    for (a, b) in first.floors().iter().zip(second.floors()) {
        assert_eq!(a.position.to_array().map(f32::to_bits), b.position.to_array().map(f32::to_bits));
        assert_eq!(a.orientation.to_array().map(f32::to_bits), b.orientation.to_array().map(f32::to_bits));
    }
}

#[test]
fn single_floor_sits_at_the_bottom_of_every_gradient() {
    let params = ParameterSet {
        floor_count: 1,
        scale_min: 0.7,
        scale_max: 1.9,
        twist_x: TwistAxis { min: 12.0, max: 80.0, curve: CurveKind::Linear },
        twist_y: TwistAxis { min: -30.0, max: 30.0, curve: CurveKind::Smoothstep },
        twist_z: TwistAxis { min: 4.0, max: -40.0, curve: CurveKind::EaseInOutCubic },
        bend_angle_degrees: 45.0,
        color_bottom: [0.1, 0.2, 0.3],
        color_top: [0.9, 0.8, 0.7],
        ..ParameterSet::default()
    };

    let tower = Tower::rebuild(&params);
    assert_eq!(tower.len(), 1);

    let floor = &tower.floors()[0];
    assert_eq!(floor.progress, 0.0);
    assert_eq!(floor.scale, 0.7);
    assert_eq!(floor.twist_degrees, Vec3::new(12.0, -30.0, 4.0));
    assert_eq!(floor.color, [0.1, 0.2, 0.3]);
    assert!(close(floor.position.y, 0.0));
}

#[test]
fn straight_tower_stacks_floors_evenly() {
    let params = ParameterSet {
        floor_count: 9,
        floor_height: 0.5,
        bend_angle_degrees: 0.0,
        bend_direction_degrees: 77.0,
        ..ParameterSet::default()
    };
    let total_height = 8.0 * 0.5;

    let tower = Tower::rebuild(&params);
    for floor in tower.floors() {
        assert_eq!(floor.position.x, 0.0);
        assert_eq!(floor.position.z, 0.0);
        let expected = -total_height / 2.0 + floor.progress * total_height;
        assert!(close(floor.position.y, expected), "floor {}: {}", floor.index, floor.position.y);
    }
    assert!(close(tower.floors()[0].position.y, -2.0));
    assert!(close(tower.floors()[8].position.y, 2.0));
}

#[test]
fn linear_scale_scenario() {
    let params = ParameterSet {
        floor_count: 3,
        floor_height: 1.0,
        scale_min: 0.5,
        scale_max: 1.5,
        scale_curve: CurveKind::Linear,
        ..ParameterSet::neutral()
    };

    let scales: Vec<f32> = Tower::rebuild(&params).floors().iter().map(|f| f.scale).collect();
    assert_eq!(scales, vec![0.5, 1.0, 1.5]);
}

#[test]
fn circle_to_circle_contours_keep_unit_radius() {
    for curve in CurveKind::ALL {
        let params = ParameterSet {
            floor_count: 6,
            slab_width: 2.0,
            slab_depth: 2.0,
            shape_bottom: ShapeKind::Circle,
            shape_top: ShapeKind::Circle,
            shape_curve: curve,
            ..ParameterSet::default()
        };

        for floor in Tower::rebuild(&params).floors() {
            for point in &floor.contour {
                assert!(close(point.length(), 1.0));
            }
        }
    }
}

#[test]
fn bent_tower_is_centered_and_follows_the_arc() {
    let params = ParameterSet {
        floor_count: 21,
        floor_height: 0.5,
        bend_angle_degrees: 90.0,
        bend_direction_degrees: 0.0,
        ..ParameterSet::neutral()
    };

    let tower = Tower::rebuild(&params);
    let first = tower.floors().first().unwrap();
    let last = tower.floors().last().unwrap();

    // ends mirror each other through the origin
    assert!((first.position + last.position).length() < EPS);
    // bottom slab stands upright, top slab lies on its side facing +X
    assert!((first.orientation * Vec3::Y - Vec3::Y).length() < EPS);
    assert!((last.orientation * Vec3::Y - Vec3::X).length() < EPS);

    // every floor keeps the same distance from the arc's center
    let radius = 10.0 / std::f32::consts::FRAC_PI_2;
    let center = first.position + Vec3::new(radius, 0.0, 0.0);
    for floor in tower.floors() {
        assert!(((floor.position - center).length() - radius).abs() < 1e-3);
        assert!(close(floor.position.z, 0.0));
    }
}

#[test]
fn reset_reproduces_the_default_tower() {
    let defaults = ParameterSet::default();
    let expected = Tower::rebuild(&defaults);

    let mut state = TowerState::new(defaults);
    state.edit(|p| p.floor_count = 120);
    state.edit(|p| p.shape_top = ShapeKind::Triangle);
    state.edit(|p| p.twist_z = TwistAxis { min: -90.0, max: 90.0, curve: CurveKind::EaseInOutCubic });
    state.edit(|p| p.color_top = [0.0, 1.0, 0.0]);
    state.reset();

    assert_eq!(state.tower(), &expected);
}

#[test]
fn fresh_tower_replaces_the_previous_one_entirely() {
    let mut state = TowerState::default();
    let before = state.generation();
    let tower = state.edit(|p| p.floor_count = 4).clone();

    assert_eq!(tower.len(), 4);
    assert_eq!(state.generation(), before + 1);
    assert!(tower.floors().iter().enumerate().all(|(i, f)| f.index as usize == i));
}
