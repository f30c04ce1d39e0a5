//! Blending and interpolation functions.

/// Linear interpolation between two values.
///
/// Returns `a` when `t=0`, `b` when `t=1`, and linear blend in between.
/// `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a value to [0.0, 1.0].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Euclidean distance between two points.
#[inline]
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Linear radial falloff.
///
/// Returns 1.0 at the center, falling to 0.0 at `radius` and beyond.
#[inline]
pub fn falloff(d: f32, radius: f32) -> f32 {
    if d < radius { 1.0 - d / radius } else { 0.0 }
}

/// Map a sine-like value in [-1, 1] to [0, 1].
#[inline]
pub fn unit(v: f32) -> f32 {
    v * 0.5 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_falloff() {
        assert!((falloff(0.0, 0.2) - 1.0).abs() < 1e-6);
        assert!((falloff(0.1, 0.2) - 0.5).abs() < 1e-6);
        assert_eq!(falloff(0.2, 0.2), 0.0);
        assert_eq!(falloff(3.0, 0.2), 0.0);
    }

    #[test]
    fn test_dist() {
        assert!((dist(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_unit() {
        assert_eq!(unit(-1.0), 0.0);
        assert_eq!(unit(1.0), 1.0);
    }
}
