//! Style rendering.
//!
//! Renders the styles from [`crate::art`] into [`PixelBuffer`]s.

use crate::art;
use crate::error::SeedError;

use super::pixels::{PixelBuffer, generate_pixels};

pub use art::{Palette, Style};

/// Render a style into a pixel buffer.
///
/// Pure function of its inputs: identical arguments yield identical bytes.
pub fn render(style: Style, palette: &Palette, width: usize, height: usize) -> PixelBuffer {
    generate_pixels(width, height, |x, y, w, h| style.shade(x, y, w, h, palette))
}

/// Render a style by name.
///
/// Fails with [`SeedError::Style`] for unknown names.
pub fn generate(
    style: &str,
    palette: &Palette,
    width: usize,
    height: usize,
) -> Result<PixelBuffer, SeedError> {
    let style: Style = style.parse()?;
    Ok(render(style, palette, width, height))
}
