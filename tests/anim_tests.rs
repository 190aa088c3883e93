// Host-side tests for keyframe sampling and node hierarchy resolution.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod anim {
    include!("../src/core/anim.rs");
}

use anim::*;
use glam::{Mat4, Quat, Vec3};

fn translation_clip(node: usize, interpolation: Interpolation) -> Clip {
    Clip {
        channels: vec![Channel {
            node,
            times: vec![0.0, 1.0, 3.0],
            values: ChannelValues::Translation(vec![
                Vec3::ZERO,
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(2.0, 4.0, 0.0),
            ]),
            interpolation,
        }],
        duration: 3.0,
    }
}

#[test]
fn linear_sampling_interpolates_within_a_segment() {
    let clip = translation_clip(0, Interpolation::Linear);
    let mut nodes = vec![NodeTransform::default()];

    clip.sample(0.5, &mut nodes);
    assert!((nodes[0].translation - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);

    clip.sample(2.0, &mut nodes);
    assert!((nodes[0].translation - Vec3::new(2.0, 2.0, 0.0)).length() < 1e-5);
}

#[test]
fn sampling_clamps_to_the_first_and_last_keys() {
    let clip = translation_clip(0, Interpolation::Linear);
    let mut nodes = vec![NodeTransform::default()];

    clip.sample(-1.0, &mut nodes);
    assert_eq!(nodes[0].translation, Vec3::ZERO);

    clip.sample(99.0, &mut nodes);
    assert_eq!(nodes[0].translation, Vec3::new(2.0, 4.0, 0.0));
}

#[test]
fn step_interpolation_holds_the_previous_key() {
    let clip = translation_clip(0, Interpolation::Step);
    let mut nodes = vec![NodeTransform::default()];

    clip.sample(0.99, &mut nodes);
    assert_eq!(nodes[0].translation, Vec3::ZERO);

    clip.sample(1.0, &mut nodes);
    assert_eq!(nodes[0].translation, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn channels_targeting_missing_nodes_are_ignored() {
    let clip = translation_clip(5, Interpolation::Linear);
    let mut nodes = vec![NodeTransform::default()];
    clip.sample(1.0, &mut nodes);
    assert_eq!(nodes[0].translation, Vec3::ZERO);
}

#[test]
fn rotation_sampling_stays_normalized() {
    let half_turn = Quat::from_rotation_y(std::f32::consts::PI - 0.01);
    let clip = Clip {
        channels: vec![Channel {
            node: 0,
            times: vec![0.0, 1.0],
            values: ChannelValues::Rotation(vec![Quat::IDENTITY, half_turn]),
            interpolation: Interpolation::Linear,
        }],
        duration: 1.0,
    };
    let mut nodes = vec![NodeTransform::default()];
    for i in 0..=10 {
        clip.sample(i as f32 / 10.0, &mut nodes);
        assert!((nodes[0].rotation.length() - 1.0).abs() < 1e-5);
    }
    assert!(nodes[0].rotation.angle_between(half_turn) < 1e-3);
}

#[test]
fn global_transforms_compose_through_the_parent_chain() {
    let mut root = NodeTransform::default();
    root.translation = Vec3::new(1.0, 0.0, 0.0);
    let mut child = NodeTransform::default();
    child.parent = Some(0);
    child.translation = Vec3::new(0.0, 2.0, 0.0);
    child.scale = Vec3::splat(2.0);
    let mut grandchild = NodeTransform::default();
    grandchild.parent = Some(1);
    grandchild.translation = Vec3::new(0.0, 0.0, 3.0);

    let worlds = global_transforms(&[root, child, grandchild]);
    let origin = Vec3::ZERO;
    assert!((worlds[0].transform_point3(origin) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    assert!((worlds[1].transform_point3(origin) - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);
    // Child scale applies to the grandchild's offset.
    assert!((worlds[2].transform_point3(origin) - Vec3::new(1.0, 2.0, 6.0)).length() < 1e-5);
}

#[test]
fn parent_order_does_not_matter() {
    // Child listed before its parent still resolves against the parent world.
    let mut child = NodeTransform::default();
    child.parent = Some(1);
    child.translation = Vec3::new(0.0, 1.0, 0.0);
    let mut parent = NodeTransform::default();
    parent.translation = Vec3::new(5.0, 0.0, 0.0);

    let worlds = global_transforms(&[child, parent]);
    assert!((worlds[0].transform_point3(Vec3::ZERO) - Vec3::new(5.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn malformed_parent_cycles_degrade_to_local_transforms() {
    let mut a = NodeTransform::default();
    a.parent = Some(1);
    a.translation = Vec3::new(1.0, 0.0, 0.0);
    let mut b = NodeTransform::default();
    b.parent = Some(0);
    b.translation = Vec3::new(0.0, 1.0, 0.0);

    // Must terminate; exact placement of cycle members is unspecified.
    let worlds = global_transforms(&[a, b]);
    assert_eq!(worlds.len(), 2);
    for w in &worlds {
        assert!(w.to_cols_array().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn default_node_is_the_identity() {
    let n = NodeTransform::default();
    assert_eq!(n.local_matrix(), Mat4::IDENTITY);
    assert!(n.parent.is_none());
}
