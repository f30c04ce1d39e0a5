//! # Cosmic
//!
//! Nebula clouds over a deep base color. Each cloud is a soft disc whose
//! edge is perturbed by a sinusoidal noise field; bright hashed stars are
//! scattered over everything.

use super::{Palette, normalized};
use crate::shader::{Rgb, clamp01, dist, falloff, hash2};

const FLARE: Rgb = Rgb::new(255, 100, 50);
const STAR_RARITY: u32 = 300;

/// Edge perturbation shared by every cloud.
fn cloud_noise(fx: f32, fy: f32) -> f32 {
    (fx * 30.0 + fy * 20.0).sin() * (fx * 15.0 - fy * 25.0).cos() * 0.3
}

/// Compute the cosmic color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);

    let clouds = [
        (0.3, 0.4, 0.3, c2),
        (0.7, 0.6, 0.25, c3),
        (0.5, 0.3, 0.2, FLARE),
    ];

    let mut color = c1;
    for (cx, cy, radius, tint) in clouds {
        let d = dist(fx, fy, cx, cy);
        if d < radius {
            let t = clamp01(falloff(d, radius) + cloud_noise(fx, fy));
            color = color.lerp(tint, t * 0.7);
        }
    }

    let star = hash2((x * 3) as u32, (y * 7) as u32);
    if star % STAR_RARITY == 0 {
        let brightness = 150 + (star % 105) as i32;
        color = color.brighten(brightness).clamped();
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = [
        Rgb::new(80, 0, 120),
        Rgb::new(200, 100, 255),
        Rgb::new(0, 50, 100),
    ];

    #[test]
    fn test_cloud_center_is_tinted() {
        let c = shade(154, 205, 512, 512, &PALETTE);
        assert_ne!(c, PALETTE[0]);
    }

    #[test]
    fn test_open_space_is_base_or_star() {
        // Top-left corner lies outside every cloud.
        for y in 0..40 {
            for x in 0..40 {
                let c = shade(x, y, 512, 512, &PALETTE);
                let is_star = hash2((x * 3) as u32, (y * 7) as u32) % STAR_RARITY == 0;
                if !is_star {
                    assert_eq!(c, PALETTE[0]);
                }
            }
        }
    }

    #[test]
    fn test_stars_are_bright() {
        let mut found = 0;
        for y in 0..512 {
            for x in 0..512 {
                if hash2((x * 3) as u32, (y * 7) as u32) % STAR_RARITY == 0 {
                    let c = shade(x, y, 512, 512, &PALETTE);
                    assert!(c.g >= 150, "dim star at ({}, {}): {:?}", x, y, c);
                    found += 1;
                }
            }
        }
        assert!(found > 0);
    }
}
