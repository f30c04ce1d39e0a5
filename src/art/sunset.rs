//! # Sunset
//!
//! Sky gradient with a soft sun disc and a wavy water reflection below the
//! horizon line.
//!
//! ## Formula
//!
//! ```text
//! sky = lerp(c3, c1, fy)
//! sun = lerp(sky, sun_color, sqrt(1 - d / r))      where d < r
//! wave = 0.03 * sin(30 fx + 10 fy)
//! reflection = lerp(c3, c2, 1 - (fy - horizon + wave) / (1 - horizon))
//! water = lerp(sun, reflection, reflection_mix)    where fy > horizon
//! ```

use super::{Palette, normalized};
use crate::shader::{Rgb, dist, falloff};

/// Parameters for the sunset style.
#[derive(Debug, Clone)]
pub struct Params {
    /// Sun center X as fraction of width. Default: 0.5
    pub sun_x: f32,
    /// Sun center Y as fraction of height. Default: 0.4
    pub sun_y: f32,
    /// Sun radius in normalized units. Default: 0.15
    pub sun_radius: f32,
    /// Color at the sun's center. Default: (255, 220, 100)
    pub sun_color: Rgb,
    /// Height fraction where the water starts. Default: 0.65
    pub horizon: f32,
    /// Weight of the reflection over the sky. Default: 0.6
    pub reflection_mix: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sun_x: 0.5,
            sun_y: 0.4,
            sun_radius: 0.15,
            sun_color: Rgb::new(255, 220, 100),
            horizon: 0.65,
            reflection_mix: 0.6,
        }
    }
}

/// Compute the sunset color at a pixel.
pub fn shade(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    palette: &Palette,
    params: &Params,
) -> Rgb {
    let [c1, c2, c3] = *palette;
    let (fx, fy) = normalized(x, y, width, height);

    let mut color = c3.lerp(c1, fy);

    let sun = falloff(dist(fx, fy, params.sun_x, params.sun_y), params.sun_radius);
    if sun > 0.0 {
        color = color.lerp(params.sun_color, sun.sqrt());
    }

    if fy > params.horizon {
        let wave = (fx * 30.0 + fy * 10.0).sin() * 0.03;
        let depth = 1.0 - (fy - params.horizon + wave) / (1.0 - params.horizon);
        let reflection = c3.lerp(c2, depth);
        color = color.lerp(reflection, params.reflection_mix);
    }

    color
}
