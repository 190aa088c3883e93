use glam::{Mat4, Vec3};

// Clamp limits for user input; keep the camera off the poles and out of the
// model.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
pub const RADIUS_MIN: f32 = 0.5;
pub const RADIUS_MAX: f32 = 50.0;

/// Spherical-coordinate orbit camera around a fixed target.
///
/// Pointer drags mutate yaw/pitch, the wheel scales the radius, and the camera
/// tween writes absolute eye positions through `set_eye`, which re-derives the
/// spherical state so a later drag continues smoothly from wherever the tween
/// left the camera.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
}

impl OrbitCamera {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let mut cam = Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            radius: 1.0,
        };
        cam.set_eye(eye);
        cam
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the orbit radius; `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f32) {
        self.radius = (self.radius * factor).clamp(RADIUS_MIN, RADIUS_MAX);
    }

    /// Place the eye at an absolute position, keeping the current target.
    pub fn set_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            self.radius = RADIUS_MIN;
            return;
        }
        self.radius = radius.clamp(RADIUS_MIN, RADIUS_MAX);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }
}
