/// Pointer drag state for the orbit interaction, in CSS pixel coordinates.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub down: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Map a wheel delta to a multiplicative zoom factor. Positive deltas
/// (scrolling down) zoom out.
#[inline]
pub fn wheel_zoom_factor(delta_y: f32, coeff: f32) -> f32 {
    (delta_y * coeff).exp()
}
