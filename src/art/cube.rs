//! # Cube
//!
//! Isometric cube illusion: three faces over a darkening backdrop, each face
//! shaded with its own linear gradient. Later faces paint over earlier ones.

use super::{Palette, normalized};
use crate::shader::Rgb;

const BACKDROP: Rgb = Rgb::new(20, 20, 40);
const TOP_HIGHLIGHT: Rgb = Rgb::new(200, 200, 255);
const LEFT_SHADOW: Rgb = Rgb::new(50, 0, 30);

/// Which face of the cube, if any, covers an offset from the image center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Left,
    Right,
}

/// Resolve the visible face at offset (dx, dy) from center.
pub fn face_at(dx: f32, dy: f32) -> Option<Face> {
    let side_band = -0.05 < dy && dy < 0.25;
    if 0.0 < dx && dx < 0.2 && side_band {
        Some(Face::Right)
    } else if -0.2 < dx && dx < 0.0 && side_band {
        Some(Face::Left)
    } else if (dx + dy * 0.5).abs() < 0.2 && -0.3 < dy && dy < -0.05 {
        Some(Face::Top)
    } else {
        None
    }
}

/// Compute the cube color at a pixel.
pub fn shade(x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);
    let (dx, dy) = (fx - 0.5, fy - 0.5);

    match face_at(dx, dy) {
        Some(Face::Top) => c1.lerp(TOP_HIGHLIGHT, (dy + 0.3) / 0.25),
        Some(Face::Left) => c2.lerp(LEFT_SHADOW, dy / 0.3),
        Some(Face::Right) => c1.lerp(c2, dy / 0.3),
        None => c3.lerp(BACKDROP, fy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces() {
        assert_eq!(face_at(0.0, -0.2), Some(Face::Top));
        assert_eq!(face_at(-0.1, 0.1), Some(Face::Left));
        assert_eq!(face_at(0.1, 0.1), Some(Face::Right));
        assert_eq!(face_at(0.0, 0.0), None);
        assert_eq!(face_at(0.4, 0.4), None);
    }

    #[test]
    fn test_top_and_sides_do_not_overlap() {
        // The top face ends exactly where the side band starts.
        assert_eq!(face_at(0.1, -0.05), None);
        assert_eq!(face_at(0.1, -0.049), Some(Face::Right));
    }

    #[test]
    fn test_backdrop_corner() {
        let palette = [
            Rgb::new(0, 100, 255),
            Rgb::new(255, 0, 100),
            Rgb::new(0, 255, 200),
        ];
        assert_eq!(shade(0, 0, 512, 512, &palette), palette[2]);
    }
}
