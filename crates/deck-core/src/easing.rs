use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

/// Normalized progress of a timed transition, clamped to `[0, 1]`.
///
/// A zero-length transition is complete immediately.
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// Quarter-cosine ease: `1 - cos(p * pi/2)`.
///
/// Monotonic on `[0, 1]` with `e(0) = 0` and `e(1) = 1`.
#[inline]
pub fn ease_quarter_cosine(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p >= 1.0 {
        // cos(pi/2) is not exactly zero in f32
        return 1.0;
    }
    1.0 - (p * FRAC_PI_2).cos()
}
