// Host-side tests for playlist-driven camera movement: stops chain strictly
// in order across the shared tween, and moves the driver did not start never
// advance the cursor. The main crate is wasm-only, so we include the pure
// modules directly; drive.rs reaches its siblings via super::.

#![allow(dead_code)]
mod viewer {
    pub mod drive {
        include!("../src/core/drive.rs");
    }
    pub mod playlist {
        include!("../src/core/playlist.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use glam::Vec3;
use viewer::drive::PlaybackDriver;
use viewer::playlist::{Playback, Stop};
use viewer::tween::{CameraTween, TWEEN_DURATION_MS};

fn stop(name: &str, x: f32) -> Stop {
    Stop {
        name: name.to_string(),
        position: Vec3::new(x, 0.0, 0.0),
    }
}

/// Run the driver at a 16 ms frame cadence, tracking the camera eye and
/// recording each stop whose move started.
fn run(
    driver: &mut PlaybackDriver,
    tween: &mut CameraTween,
    playback: &mut Playback,
    eye: &mut Vec3,
    from_ms: f64,
    to_ms: f64,
) -> Vec<String> {
    let mut started = Vec::new();
    let mut now = from_ms;
    while now <= to_ms {
        let out = driver.frame(tween, playback, *eye, now);
        if let Some(s) = out.started {
            started.push(s.name);
        }
        if let Some(p) = out.position {
            *eye = p;
        }
        now += 16.0;
    }
    started
}

#[test]
fn stops_chain_in_order_one_move_at_a_time() {
    let mut driver = PlaybackDriver::new();
    let mut tween = CameraTween::new();
    let mut playback = Playback::new();
    let mut eye = Vec3::ZERO;

    assert!(playback.begin(vec![stop("front", 1.0), stop("back", 2.0)]));
    let started = run(
        &mut driver,
        &mut tween,
        &mut playback,
        &mut eye,
        0.0,
        3.0 * TWEEN_DURATION_MS,
    );

    assert_eq!(started, ["front", "back"]);
    assert!(!playback.is_playing());
    assert_eq!(playback.progress(), 1.0);
    // The camera arrived exactly at the last stop.
    assert_eq!(eye, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn second_stop_waits_for_the_first_to_finish() {
    let mut driver = PlaybackDriver::new();
    let mut tween = CameraTween::new();
    let mut playback = Playback::new();
    let mut eye = Vec3::ZERO;

    playback.begin(vec![stop("front", 1.0), stop("back", 2.0)]);
    // Drive only half of the first move.
    let started = run(
        &mut driver,
        &mut tween,
        &mut playback,
        &mut eye,
        0.0,
        TWEEN_DURATION_MS / 2.0,
    );

    assert_eq!(started, ["front"]);
    assert_eq!(playback.cursor(), 0, "cursor moved before the tween finished");
    assert!(tween.is_running());
}

#[test]
fn playback_queued_behind_a_preset_jump_visits_every_stop() {
    let mut driver = PlaybackDriver::new();
    let mut tween = CameraTween::new();
    let mut playback = Playback::new();
    let mut eye = Vec3::ZERO;

    // A direct preset jump is already in flight when playback begins.
    tween.start(eye, Vec3::new(9.0, 0.0, 0.0), TWEEN_DURATION_MS, 0.0);
    let before = run(&mut driver, &mut tween, &mut playback, &mut eye, 0.0, 96.0);
    assert!(before.is_empty());
    assert!(playback.begin(vec![stop("back", 1.0), stop("top", 2.0)]));

    let started = run(
        &mut driver,
        &mut tween,
        &mut playback,
        &mut eye,
        112.0,
        5.0 * TWEEN_DURATION_MS,
    );

    // The jump completes first and must not be credited to the playlist.
    assert_eq!(
        started,
        ["back", "top"],
        "first queued stop was skipped by the preset jump"
    );
    assert_eq!(playback.cursor(), playback.total());
    assert!(!playback.is_playing());
    assert_eq!(eye, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn idle_playback_leaves_the_tween_untouched() {
    let mut driver = PlaybackDriver::new();
    let mut tween = CameraTween::new();
    let mut playback = Playback::new();
    let mut eye = Vec3::new(0.0, 1.5, 5.0);

    let started = run(&mut driver, &mut tween, &mut playback, &mut eye, 0.0, 500.0);
    assert!(started.is_empty());
    assert!(!tween.is_running());
    assert_eq!(eye, Vec3::new(0.0, 1.5, 5.0));
}
