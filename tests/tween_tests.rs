// Host-side tests for the camera tween state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use glam::Vec3;
use tween::*;

#[test]
fn idle_tween_yields_no_samples() {
    let mut tw = CameraTween::new();
    assert!(!tw.is_running());
    assert_eq!(tw.sample(0.0), None);
    assert_eq!(tw.sample(123_456.0), None);
}

#[test]
fn midpoint_sample_is_halfway() {
    let mut tw = CameraTween::new();
    let from = Vec3::new(0.0, 0.0, 0.0);
    let to = Vec3::new(10.0, -2.0, 4.0);
    tw.start(from, to, 1000.0, 5000.0);
    assert!(tw.is_running());

    let s = tw.sample(5500.0).unwrap();
    assert!(!s.done);
    assert!((s.position - Vec3::new(5.0, -1.0, 2.0)).length() < 1e-5);
}

#[test]
fn final_sample_is_exactly_the_target_and_done_once() {
    let mut tw = CameraTween::new();
    let to = Vec3::new(3.0, 1.5, -7.0);
    tw.start(Vec3::ZERO, to, 1000.0, 0.0);

    // Sample well past the end: no overshoot, exact arrival.
    let s = tw.sample(1800.0).unwrap();
    assert!(s.done);
    assert_eq!(s.position, to);

    // The machine is idle again; done does not repeat.
    assert!(!tw.is_running());
    assert_eq!(tw.sample(1900.0), None);
}

#[test]
fn progress_never_overshoots_before_completion() {
    let mut tw = CameraTween::new();
    let to = Vec3::new(1.0, 0.0, 0.0);
    tw.start(Vec3::ZERO, to, 1000.0, 0.0);
    for step in 1..10 {
        let now = step as f64 * 99.9;
        let s = tw.sample(now).unwrap();
        assert!(
            s.position.x <= 1.0 + f32::EPSILON,
            "overshoot at now={now}: {}",
            s.position.x
        );
        assert!(!s.done);
    }
}

#[test]
fn samples_before_start_clamp_to_the_origin() {
    let mut tw = CameraTween::new();
    let from = Vec3::new(2.0, 2.0, 2.0);
    tw.start(from, Vec3::ZERO, 1000.0, 1000.0);
    let s = tw.sample(400.0).unwrap();
    assert_eq!(s.position, from);
    assert!(!s.done);
}

#[test]
fn zero_duration_completes_on_first_sample() {
    let mut tw = CameraTween::new();
    let to = Vec3::new(0.0, 9.0, 0.0);
    tw.start(Vec3::ZERO, to, 0.0, 50.0);
    let s = tw.sample(50.0).unwrap();
    assert!(s.done);
    assert_eq!(s.position, to);
    assert!(!tw.is_running());
}

#[test]
fn default_duration_matches_the_advertised_constant() {
    assert_eq!(TWEEN_DURATION_MS, 1000.0);
}
