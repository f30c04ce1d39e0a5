//! # Neural
//!
//! Layered network diagram: columns of glowing nodes on a near-black
//! background. Node colors sweep from the first palette color to the second
//! across the layers.

use super::{Palette, normalized};
use crate::shader::{Rgb, dist, falloff};

/// Parameters for the neural style.
#[derive(Debug, Clone)]
pub struct Params {
    /// Number of vertical layers. Default: 5
    pub layers: usize,
    /// Node disc radius in normalized units. Default: 0.04
    pub node_radius: f32,
    /// Glow radius in normalized units. Default: 0.08
    pub glow_radius: f32,
    /// Background color. Default: (10, 10, 20)
    pub background: Rgb,
    /// Per-channel glow added at a node's center. Default: (30, 20, 40)
    pub glow: Rgb,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            layers: 5,
            node_radius: 0.04,
            glow_radius: 0.08,
            background: Rgb::new(10, 10, 20),
            glow: Rgb::new(30, 20, 40),
        }
    }
}

/// Node centers, layer by layer, as (layer, x, y) in normalized units.
///
/// Layer `i` holds `3 + i % 3` nodes spaced evenly over the height.
pub fn nodes(params: &Params) -> impl Iterator<Item = (usize, f32, f32)> + '_ {
    let spacing = 1.0 / params.layers as f32;
    (0..params.layers).flat_map(move |layer| {
        let lx = spacing * 0.5 + layer as f32 * spacing;
        let count = 3 + layer % 3;
        (0..count).map(move |n| (layer, lx, (n + 1) as f32 / (count + 1) as f32))
    })
}

/// Compute the neural color at a pixel.
pub fn shade(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    palette: &Palette,
    params: &Params,
) -> Rgb {
    let [c1, c2, _] = *palette;
    let (fx, fy) = normalized(x, y, width, height);
    let last_layer = params.layers.saturating_sub(1).max(1) as f32;

    let mut color = params.background;
    for (layer, lx, ly) in nodes(params) {
        let d = dist(fx, fy, lx, ly);

        let t = falloff(d, params.node_radius);
        if t > 0.0 {
            let node = c1.lerp(c2, layer as f32 / last_layer);
            color = color.lerp(node, t.sqrt());
        }

        let t = falloff(d, params.glow_radius);
        if t > 0.0 {
            let g = params.glow;
            color = color
                .add(
                    (t * g.r as f32) as i32,
                    (t * g.g as f32) as i32,
                    (t * g.b as f32) as i32,
                )
                .clamped();
        }
    }

    color
}
