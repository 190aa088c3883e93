// Host-side tests for the orbit camera and pointer/wheel math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod orbit {
    include!("../src/core/orbit.rs");
}
mod input {
    include!("../src/input.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use glam::Vec3;
use input::*;
use orbit::*;

#[test]
fn initial_eye_round_trips_through_spherical_state() {
    let eye = Vec3::new(0.0, 1.5, 5.0);
    let cam = OrbitCamera::new(eye, Vec3::ZERO);
    assert!((cam.eye() - eye).length() < 1e-5, "got {:?}", cam.eye());
    assert!((cam.radius() - eye.length()).abs() < 1e-5);
}

#[test]
fn set_eye_then_rotate_composes_smoothly() {
    let mut cam = OrbitCamera::new(Vec3::new(0.0, 1.5, 5.0), Vec3::ZERO);
    // Jump to the "left" preset the way a finished tween would.
    let left = Vec3::new(-5.0, 1.5, 0.0);
    cam.set_eye(left);
    assert!((cam.eye() - left).length() < 1e-4);

    // A drag after the jump starts from the preset, not from the old state.
    let before = cam.eye();
    cam.rotate(0.01, 0.0);
    assert!((cam.eye() - before).length() > 1e-4);
    assert!((cam.eye().length() - before.length()).abs() < 1e-4);
}

#[test]
fn pitch_is_clamped_away_from_the_poles() {
    let mut cam = OrbitCamera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    cam.rotate(0.0, 100.0);
    let up = cam.eye().normalize();
    assert!(up.y < 1.0 - 1e-4, "camera reached the pole: {up:?}");

    cam.rotate(0.0, -200.0);
    let down = cam.eye().normalize();
    assert!(down.y > -1.0 + 1e-4);
}

#[test]
fn zoom_is_clamped_to_the_radius_range() {
    let mut cam = OrbitCamera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
    cam.zoom(1e6);
    assert_eq!(cam.radius(), RADIUS_MAX);
    cam.zoom(1e-9);
    assert_eq!(cam.radius(), RADIUS_MIN);
}

#[test]
fn set_eye_on_the_target_falls_back_to_the_minimum_radius() {
    let target = Vec3::new(1.0, 2.0, 3.0);
    let mut cam = OrbitCamera::new(Vec3::new(1.0, 2.0, 8.0), target);
    cam.set_eye(target);
    assert_eq!(cam.radius(), RADIUS_MIN);
    assert!((cam.eye() - target).length() >= RADIUS_MIN - 1e-5);
}

#[test]
fn view_matrix_maps_the_target_in_front_of_the_eye() {
    let cam = OrbitCamera::new(Vec3::new(0.0, 1.5, 5.0), Vec3::ZERO);
    let view = cam.view();
    let target_view = view.transform_point3(cam.target());
    let eye_view = view.transform_point3(cam.eye());
    assert!(eye_view.length() < 1e-4);
    assert!(target_view.z < 0.0, "look_at_rh looks down -Z");
}

#[test]
fn wheel_factors_are_reciprocal_and_centered_on_one() {
    let zoom_out = wheel_zoom_factor(120.0, constants::ZOOM_WHEEL_COEFF);
    let zoom_in = wheel_zoom_factor(-120.0, constants::ZOOM_WHEEL_COEFF);
    assert!(zoom_out > 1.0);
    assert!(zoom_in < 1.0);
    assert!((zoom_out * zoom_in - 1.0).abs() < 1e-5);
    assert_eq!(wheel_zoom_factor(0.0, constants::ZOOM_WHEEL_COEFF), 1.0);
}
