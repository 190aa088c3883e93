use glam::Vec3;

/// Wall-clock duration of one camera move, in milliseconds.
pub const TWEEN_DURATION_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Running { start_ms: f64 },
}

/// One sampled step of a running tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample {
    pub position: Vec3,
    /// True exactly once, on the sample that lands on the target.
    pub done: bool,
}

/// Linear camera tween as an explicit state machine driven by an injected
/// clock (milliseconds). No easing, no mid-flight cancellation: callers chain
/// moves by waiting for `done` before starting the next one.
pub struct CameraTween {
    phase: Phase,
    from: Vec3,
    to: Vec3,
    duration_ms: f64,
}

impl CameraTween {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            from: Vec3::ZERO,
            to: Vec3::ZERO,
            duration_ms: TWEEN_DURATION_MS,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn start(&mut self, from: Vec3, to: Vec3, duration_ms: f64, now_ms: f64) {
        self.from = from;
        self.to = to;
        self.duration_ms = duration_ms;
        self.phase = Phase::Running { start_ms: now_ms };
    }

    /// Advance to `now_ms`. Returns `None` while idle. Progress is clamped to
    /// [0, 1], so the returned position never overshoots the target; the final
    /// sample is exactly `to` and flips the machine back to idle.
    pub fn sample(&mut self, now_ms: f64) -> Option<TweenSample> {
        let start_ms = match self.phase {
            Phase::Idle => return None,
            Phase::Running { start_ms } => start_ms,
        };
        let t = if self.duration_ms > 0.0 {
            (now_ms - start_ms) / self.duration_ms
        } else {
            1.0
        };
        if t >= 1.0 {
            self.phase = Phase::Idle;
            return Some(TweenSample {
                position: self.to,
                done: true,
            });
        }
        let t = t.max(0.0) as f32;
        Some(TweenSample {
            position: self.from.lerp(self.to, t),
            done: false,
        })
    }
}

impl Default for CameraTween {
    fn default() -> Self {
        Self::new()
    }
}
