//! # Chaos
//!
//! Polar swirl around the image center with hashed per-pixel grain.
//!
//! ## Formula
//!
//! ```text
//! swirl = 0.5 + 0.5 * sin(3 * angle + 15 * r)
//! base  = swirl > 0.5 ? lerp(c1, c2, 2 * (swirl - 0.5)) : lerp(c3, c1, 2 * swirl)
//! grain = hash(7x, 13y) mod 30 - 15
//! ```

use super::{Palette, normalized};
use crate::shader::{Rgb, dist, hash2, unit};

/// Width of the grain band; offsets fall in `[-GRAIN/2, GRAIN/2)`.
const GRAIN: u32 = 30;

/// Compute the chaos color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);

    let angle = (fy - 0.5).atan2(fx - 0.5);
    let r = dist(fx, fy, 0.5, 0.5);
    let swirl = unit((angle * 3.0 + r * 15.0).sin());

    let base = if swirl > 0.5 {
        c1.lerp(c2, (swirl - 0.5) * 2.0)
    } else {
        c3.lerp(c1, swirl * 2.0)
    };

    let grain = (hash2((x * 7) as u32, (y * 13) as u32) % GRAIN) as i32 - (GRAIN / 2) as i32;
    base.brighten(grain).clamped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_is_bounded_and_gray() {
        let gray = Rgb::new(128, 128, 128);
        let palette = [gray; 3];
        for y in (0..512).step_by(7) {
            for x in (0..512).step_by(5) {
                let c = shade(x, y, 512, 512, &palette);
                assert!((113..=142).contains(&c.r), "grain out of band: {:?}", c);
                assert_eq!(c.r, c.g);
                assert_eq!(c.g, c.b);
            }
        }
    }

    #[test]
    fn test_grain_varies() {
        let palette = [Rgb::new(128, 128, 128); 3];
        let first = shade(0, 0, 64, 64, &palette);
        let varied = (0..64).any(|x| shade(x, 0, 64, 64, &palette) != first);
        assert!(varied);
    }
}
