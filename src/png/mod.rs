//! # PNG Encoder
//!
//! Minimal encoder for 8-bit truecolor PNG images.
//!
//! ## Stream Layout
//!
//! ```text
//! ┌───────────┬──────┬──────┬──────┐
//! │ signature │ IHDR │ IDAT │ IEND │
//! └───────────┴──────┴──────┴──────┘
//! ```
//!
//! - Color type 2 (RGB, no alpha), bit depth 8, no interlacing
//! - Every scanline uses filter type 0 ("none")
//! - All scanlines are zlib-compressed into one IDAT chunk
//!
//! ## Example
//!
//! ```
//! use seedart::png;
//!
//! let pixels = vec![255u8; 4 * 4 * 3];
//! let bytes = png::encode(&pixels, 4, 4)?;
//!
//! assert_eq!(&bytes[..8], &png::SIGNATURE);
//! # Ok::<(), seedart::SeedError>(())
//! ```

pub mod chunk;

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::error::SeedError;
use crate::render::PixelBuffer;
use crate::render::pixels::{CHANNELS, byte_len};

/// The fixed 8-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// IHDR bit depth.
pub const BIT_DEPTH: u8 = 8;
/// IHDR color type for truecolor without alpha.
pub const COLOR_TYPE_RGB: u8 = 2;

/// Scanline filter type "none".
const FILTER_NONE: u8 = 0;

/// PNG encoder with a configurable deflate level.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    level: Compression,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl Encoder {
    /// Create an encoder with deflate level 0 (store) to 9 (best).
    pub fn with_level(level: u32) -> Result<Self, SeedError> {
        if level > 9 {
            return Err(SeedError::Png(format!(
                "Compression level must be 0-9, got {}",
                level
            )));
        }
        Ok(Self {
            level: Compression::new(level),
        })
    }

    /// Deflate level in use.
    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// Encode raw RGB bytes as a PNG stream.
    ///
    /// Rejects zero dimensions and a byte length other than
    /// `width * height * 3`.
    pub fn encode(&self, pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, SeedError> {
        if width == 0 || height == 0 {
            return Err(SeedError::Png(format!(
                "Image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) if w <= i32::MAX as u32 && h <= i32::MAX as u32 => (w, h),
            _ => {
                return Err(SeedError::Png(format!(
                    "Image dimensions too large: {}x{}",
                    width, height
                )));
            }
        };
        let expected = byte_len(width, height).ok_or_else(|| {
            SeedError::Png(format!("Image dimensions too large: {}x{}", width, height))
        })?;
        if pixels.len() != expected {
            return Err(SeedError::Png(format!(
                "Pixel buffer is {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            )));
        }

        let idat = self.compress(&scanlines(pixels, width))?;

        let mut out = Vec::with_capacity(SIGNATURE.len() + 25 + idat.len() + 12 + 12);
        out.extend_from_slice(&SIGNATURE);
        chunk::write(&mut out, &chunk::IHDR, &ihdr(w, h));
        chunk::write(&mut out, &chunk::IDAT, &idat);
        chunk::write(&mut out, &chunk::IEND, &[]);
        Ok(out)
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>, SeedError> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(raw.len() / 4), self.level);
        encoder.write_all(raw)?;
        Ok(encoder.finish()?)
    }
}

/// Encode raw RGB bytes with the best compression level.
pub fn encode(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, SeedError> {
    Encoder::default().encode(pixels, width, height)
}

/// Encode a [`PixelBuffer`] with the best compression level.
pub fn encode_buffer(pixels: &PixelBuffer) -> Result<Vec<u8>, SeedError> {
    encode(pixels.as_bytes(), pixels.width(), pixels.height())
}

/// IHDR payload: width, height, bit depth, color type, compression,
/// filter and interlace methods.
fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGB;
    // compression, filter, interlace all 0
    data
}

/// Prefix every row with filter byte 0.
fn scanlines(pixels: &[u8], width: usize) -> Vec<u8> {
    let stride = width * CHANNELS;
    let rows = pixels.len() / stride;
    let mut raw = Vec::with_capacity(rows * (stride + 1));
    for row in pixels.chunks_exact(stride) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}
