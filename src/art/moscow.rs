//! # Moscow
//!
//! Night skyline: one building per 40px column with a hashed height, a grid
//! of lit or dark windows, and a sparse star field above the rooftops.

use super::Palette;
use crate::shader::{Rgb, hash, hash2};

const COLUMN: usize = 40;
const WINDOW_PITCH_X: usize = 8;
const WINDOW_PITCH_Y: usize = 12;
const MIN_BUILDING: u32 = 100;
const BUILDING_SPREAD: u32 = 250;
/// Stars never appear in the bottom band of this many rows.
const STAR_FLOOR: i64 = 100;
const STAR_CELL: usize = 3;
const STAR_RARITY: u32 = 200;

const WALL: Rgb = Rgb::new(30, 30, 50);
const STAR: Rgb = Rgb::new(220, 220, 255);

/// Height in pixels of the building whose column starts at `bx`.
pub fn building_height(bx: usize) -> u32 {
    MIN_BUILDING + hash(bx as u32) % BUILDING_SPREAD
}

/// Compute the moscow color at a pixel.
pub fn shade(x: usize, y: usize, _width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, _] = *palette;
    let mut color = c1;

    let col = x % COLUMN;
    let bx = x - col;
    let (yi, hi) = (y as i64, height as i64);

    let roof = hi - building_height(bx) as i64;
    if yi > roof && col > 2 && col < COLUMN - 2 {
        color = WALL;

        let wx = col % WINDOW_PITCH_X;
        let wy = y % WINDOW_PITCH_Y;
        if wx > 2 && wx < 6 && wy > 2 && wy < 8 {
            let brightness = hash2(bx as u32, (y / WINDOW_PITCH_Y) as u32) % 3;
            if brightness > 0 {
                color = WALL.lerp(c2, 0.5 + brightness as f32 * 0.25);
            }
        }
    }

    if yi < hi - STAR_FLOOR {
        let star = hash2((x / STAR_CELL) as u32, (y / STAR_CELL) as u32);
        if star % STAR_RARITY == 0 {
            color = STAR;
        }
    }

    color
}
