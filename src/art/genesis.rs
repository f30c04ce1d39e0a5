//! # Genesis
//!
//! Diagonal gradient with three soft overlapping circles and a periodic
//! grid of light lines.

use super::{Palette, normalized};
use crate::shader::{Rgb, dist, falloff};

/// Circles as (center x, center y, radius) in normalized units.
const SHAPES: [(f32, f32, f32); 3] = [(0.3, 0.3, 0.2), (0.7, 0.5, 0.15), (0.5, 0.7, 0.18)];

/// Grid line pitch in pixels.
const GRID_PITCH: usize = 64;
/// Grid line thickness in pixels.
const GRID_LINE: usize = 2;
/// Brightness added on grid lines.
const GRID_BOOST: i32 = 40;

/// Compute the genesis color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);

    let mut color = c3.lerp(c1, fy * 0.5 + fx * 0.5);

    for (cx, cy, radius) in SHAPES {
        let t = falloff(dist(fx, fy, cx, cy), radius);
        if t > 0.0 {
            let shape = c2.lerp(c1, t);
            color = color.lerp(shape, t * 0.8);
        }
    }

    if x % GRID_PITCH < GRID_LINE || y % GRID_PITCH < GRID_LINE {
        color = color.brighten(GRID_BOOST).clamped();
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = [
        Rgb::new(0, 200, 255),
        Rgb::new(100, 0, 200),
        Rgb::new(0, 50, 100),
    ];

    #[test]
    fn test_grid_lines_are_brighter() {
        // (64, 30) is on a vertical line, (66, 30) is just past it.
        let on = shade(64, 30, 512, 512, &PALETTE);
        let off = shade(66, 30, 512, 512, &PALETTE);
        assert!(on.r + on.g + on.b > off.r + off.g + off.b);
    }

    #[test]
    fn test_circle_center_pulls_toward_first_color() {
        // Center of the first circle: shape color is c1 at full weight 0.8.
        let c = shade(154, 154, 512, 512, &PALETTE);
        let base = PALETTE[2].lerp(PALETTE[0], 154.0 / 512.0);
        assert!(c.distance_sq(PALETTE[0]) < base.distance_sq(PALETTE[0]));
    }
}
