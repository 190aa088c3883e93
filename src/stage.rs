use std::cell::RefCell;

use instant::Instant;

use crate::audio::ToneCycle;
use crate::core::{
    preset_position, CameraTween, OrbitCamera, Playback, Playlist, Stop, ToastStore,
    TWEEN_DURATION_MS,
};
use crate::constants::{CAMERA_EYE, CAMERA_TARGET};

/// Owning controller for the viewer's mutable state. UI event closures and
/// the frame loop share one `Rc<Stage>` and talk to it through intent
/// methods; the rendering surface only ever reads from it.
pub struct Stage {
    epoch: Instant,
    pub orbit: RefCell<OrbitCamera>,
    pub tween: RefCell<CameraTween>,
    pub playlist: RefCell<Playlist>,
    pub playback: RefCell<Playback>,
    pub toasts: RefCell<ToastStore>,
    pub tone: RefCell<Option<ToneCycle>>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            orbit: RefCell::new(OrbitCamera::new(CAMERA_EYE, CAMERA_TARGET)),
            tween: RefCell::new(CameraTween::new()),
            playlist: RefCell::new(Playlist::new()),
            playback: RefCell::new(Playback::new()),
            toasts: RefCell::new(ToastStore::new()),
            tone: RefCell::new(None),
        }
    }

    /// Shared millisecond clock for tweens and toasts.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Jump the camera to a named preset with a single tween. Ignored while a
    /// playback or another tween is in flight (moves are strictly sequential).
    pub fn apply_preset(&self, name: &str) {
        if self.playback.borrow().is_playing() || self.tween.borrow().is_running() {
            return;
        }
        let Some(position) = preset_position(name) else {
            return;
        };
        let now_ms = self.now_ms();
        self.toasts
            .borrow_mut()
            .push(format!("Moving to {}", name), now_ms);
        let eye = self.orbit.borrow().eye();
        self.tween
            .borrow_mut()
            .start(eye, position, TWEEN_DURATION_MS, now_ms);
    }

    /// Write a dropped preset into a playlist slot. Unrecognized payloads are
    /// silently ignored; returns whether anything changed.
    pub fn assign_slot(&self, index: usize, payload: &str) -> bool {
        let Some(position) = preset_position(payload) else {
            return false;
        };
        self.playlist.borrow_mut().assign(
            index,
            Stop {
                name: payload.to_owned(),
                position,
            },
        )
    }

    /// Begin playing the assembled playlist. `Playback::begin` drops
    /// re-entrant calls and empty playlists; the frame loop drives the actual
    /// camera moves.
    pub fn start_playback(&self) -> bool {
        let queue = self.playlist.borrow().queue();
        self.playback.borrow_mut().begin(queue)
    }

    /// Flip the generated tone on or off; returns the new state.
    pub fn toggle_audio(&self) -> bool {
        let mut tone = self.tone.borrow_mut();
        match tone.take() {
            Some(cycle) => {
                cycle.stop();
                false
            }
            None => match ToneCycle::start() {
                Ok(cycle) => {
                    *tone = Some(cycle);
                    true
                }
                Err(()) => false,
            },
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
