//! # Rendering Module
//!
//! Turns a style and palette into raw RGB pixels.
//!
//! ## Modules
//!
//! - [`pixels`]: The [`PixelBuffer`] type and the per-pixel generation loop
//! - [`patterns`]: Style rendering on top of [`crate::art`]
//!
//! ## Usage Example
//!
//! ```
//! use seedart::art::Style;
//! use seedart::render::patterns;
//! use seedart::shader::Rgb;
//!
//! let palette = [Rgb::new(255, 120, 50), Rgb::new(255, 80, 120), Rgb::new(40, 20, 80)];
//! let pixels = patterns::render(Style::Sunset, &palette, 64, 64);
//!
//! assert_eq!(pixels.as_bytes().len(), 64 * 64 * 3);
//! ```

pub mod patterns;
pub mod pixels;

pub use patterns::{generate, render};
pub use pixels::{PixelBuffer, generate_pixels};
