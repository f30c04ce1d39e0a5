//! # Algorithm
//!
//! Double spiral. One polar sinusoid picks between two gradients, a second
//! with different frequencies positions the color within the gradient.

use super::{Palette, normalized};
use crate::shader::{Rgb, dist, unit};

/// Spiral terms at a normalized position, both in [0, 1].
///
/// Returns `(selector, position)`.
pub fn spiral(fx: f32, fy: f32) -> (f32, f32) {
    let r = dist(fx, fy, 0.5, 0.5);
    let angle = (fy - 0.5).atan2(fx - 0.5);
    let selector = unit((r * 40.0 - angle * 5.0).sin());
    let position = unit((r * 25.0 + angle * 8.0).sin());
    (selector, position)
}

/// Compute the algorithm color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);
    let (selector, position) = spiral(fx, fy);

    if selector > 0.5 {
        c1.lerp(c2, position)
    } else {
        c3.lerp(c1, position)
    }
}
