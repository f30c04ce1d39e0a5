//! # Baikal
//!
//! Frozen lake: icy vertical gradient crossed by thin crack lines, with
//! patches of snow in the upper part of the image.

use super::{Palette, normalized};
use crate::shader::{Rgb, hash2};

/// Cracks are drawn where |crack field| falls below this.
const CRACK_WIDTH: f32 = 0.05;
const SNOW: Rgb = Rgb::new(240, 245, 255);
/// Snow patches are square cells of this many pixels.
const SNOW_CELL: usize = 20;
/// Percentage of cells that carry snow.
const SNOW_CHANCE: u32 = 10;
/// Snow is limited to rows above this height fraction.
const SNOW_LINE: f32 = 0.4;

/// Crack field: a warped sin·cos product whose zero set forms the cracks.
pub fn crack(fx: f32, fy: f32) -> f32 {
    (fx * 50.0 + (fy * 30.0).sin() * 3.0).sin() * (fy * 40.0 + (fx * 20.0).sin() * 2.0).cos()
}

/// Compute the baikal color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, _] = *palette;
    let (fx, fy) = normalized(x, y, width, height);

    let mut color = c2.lerp(c1, fy);

    if crack(fx, fy).abs() < CRACK_WIDTH {
        color = color.lerp(Rgb::WHITE, 0.7);
    }

    let spot = hash2((x / SNOW_CELL) as u32, (y / SNOW_CELL) as u32) % 100;
    if spot < SNOW_CHANCE && fy < SNOW_LINE {
        color = color.lerp(SNOW, 0.3);
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = [
        Rgb::new(200, 230, 255),
        Rgb::new(100, 150, 200),
        Rgb::new(180, 220, 240),
    ];

    #[test]
    fn test_no_snow_below_snow_line() {
        for y in (256..512).step_by(3) {
            for x in (0..512).step_by(3) {
                let (fx, fy) = (x as f32 / 512.0, y as f32 / 512.0);
                if crack(fx, fy).abs() >= CRACK_WIDTH {
                    let gradient = PALETTE[1].lerp(PALETTE[0], fy);
                    assert_eq!(shade(x, y, 512, 512, &PALETTE), gradient);
                }
            }
        }
    }

    #[test]
    fn test_snow_above_snow_line() {
        let spotted = (0..200)
            .flat_map(|y| (0..512).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                let (fx, fy) = (x as f32 / 512.0, y as f32 / 512.0);
                crack(fx, fy).abs() >= CRACK_WIDTH
                    && shade(x, y, 512, 512, &PALETTE) != PALETTE[1].lerp(PALETTE[0], fy)
            })
            .count();
        assert!(spotted > 0);
    }

    #[test]
    fn test_cracks_exist() {
        let cracked = (0..512)
            .filter(|&x| crack(x as f32 / 512.0, 0.5).abs() < CRACK_WIDTH)
            .count();
        assert!(cracked > 0);
    }
}
