/// Viewer tuning constants shared across the web frontend.
use glam::Vec3;

// Asset and DOM contract
pub const MODEL_URL: &str = "/Chicken.glb";
pub const CANVAS_ID: &str = "stage-canvas";

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.5, 5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;
pub const FOV_Y_RAD: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

// Pointer interaction
pub const ROTATE_SPEED: f32 = 0.005; // radians per CSS pixel dragged
pub const ZOOM_WHEEL_COEFF: f32 = 0.001; // wheel delta to zoom-factor exponent

// Generated tone: repeating 4-note cycle, 300 ms per note
pub const NOTE_CYCLE_HZ: [f32; 4] = [261.63, 329.63, 392.00, 523.25];
pub const NOTE_INTERVAL_MS: i32 = 300;
pub const TONE_GAIN: f32 = 0.15;
