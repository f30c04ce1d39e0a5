//! # Retro
//!
//! Blocky pixel-art character on a checkerboard. The image is divided into
//! 16px cells; the sprite is drawn by cell offset from the center cell.

use super::Palette;
use crate::shader::Rgb;

/// Cell size in pixels.
pub const CELL: usize = 16;

pub const BACKGROUND_DARK: Rgb = Rgb::new(40, 40, 40);
pub const BACKGROUND_LIGHT: Rgb = Rgb::new(50, 50, 50);
const LEGS: Rgb = Rgb::new(100, 100, 200);

/// Compute the retro color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, _] = *palette;

    let (px, py) = (x / CELL, y / CELL);
    let (cx, cy) = (width / CELL / 2, height / CELL / 2);

    let mut color = if (px + py) % 2 == 0 {
        BACKGROUND_DARK
    } else {
        BACKGROUND_LIGHT
    };

    let dx = px.abs_diff(cx);
    let dy = py.abs_diff(cy);
    if dx < 4 && dy < 6 {
        if dy < 2 && dx < 3 {
            // head
            color = c1;
        } else if (2..5).contains(&dy) && dx < 3 {
            // body
            color = c2;
        } else if dy >= 5 && dx < 2 {
            color = LEGS;
        }

        if dy == 1 && dx == 1 {
            color = Rgb::WHITE;
        }
    }

    color
}
