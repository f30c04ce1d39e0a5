//! Flat RGB pixel buffers.

use crate::shader::Rgb;

/// Bytes per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Row-major RGB pixels, three bytes per pixel.
///
/// The byte length is always `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Byte length of a `width`x`height` RGB buffer.
///
/// `None` when it does not fit in memory addressable by a `Vec`.
pub fn byte_len(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(CHANNELS)
        .filter(|&len| len <= isize::MAX as usize)
}

impl PixelBuffer {
    /// Create a black buffer.
    ///
    /// # Panics
    ///
    /// If [`byte_len`] rejects the dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let len = byte_len(width, height)
            .unwrap_or_else(|| panic!("pixel buffer {}x{} is too large", width, height));
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Color at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let idx = (y * self.width + x) * CHANNELS;
        Rgb::from([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Write a color at (x, y), clamping each channel to [0, 255].
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        let idx = (y * self.width + x) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&color.to_bytes());
    }
}

/// Generate a pixel buffer by evaluating `color_fn(x, y, width, height)` for
/// every pixel, row by row.
pub fn generate_pixels<F>(width: usize, height: usize, color_fn: F) -> PixelBuffer
where
    F: Fn(usize, usize, usize, usize) -> Rgb,
{
    let mut pixels = PixelBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            pixels.set(x, y, color_fn(x, y, width, height));
        }
    }

    pixels
}
