// Chains playlist stops across the shared camera tween.

use glam::Vec3;

use super::playlist::{Playback, Stop};
use super::tween::{CameraTween, TWEEN_DURATION_MS};

/// What one driven frame produced: a stop whose move just started (announce
/// it) and the sampled camera position while a tween is in flight.
#[derive(Default)]
pub struct DriveFrame {
    pub started: Option<Stop>,
    pub position: Option<Vec3>,
}

/// Moves the playback cursor across the camera tween, one stop at a time.
///
/// The tween is shared with direct preset jumps, so a completion only counts
/// toward the playlist when the driver started that move itself. A preset
/// move already in flight when playback begins finishes first; the queue
/// then runs from its first stop.
pub struct PlaybackDriver {
    dispatched: bool,
}

impl PlaybackDriver {
    pub fn new() -> Self {
        Self { dispatched: false }
    }

    pub fn frame(
        &mut self,
        tween: &mut CameraTween,
        playback: &mut Playback,
        eye: Vec3,
        now_ms: f64,
    ) -> DriveFrame {
        let mut out = DriveFrame::default();

        if !tween.is_running() {
            self.dispatched = false;
            if let Some(stop) = playback.current().cloned() {
                tween.start(eye, stop.position, TWEEN_DURATION_MS, now_ms);
                self.dispatched = true;
                out.started = Some(stop);
            }
        }

        if let Some(sample) = tween.sample(now_ms) {
            out.position = Some(sample.position);
            if sample.done && self.dispatched {
                playback.advance();
                self.dispatched = false;
            }
        }
        out
    }
}

impl Default for PlaybackDriver {
    fn default() -> Self {
        Self::new()
    }
}
