//! # Shader Primitives Library
//!
//! Reusable building blocks for the artwork styles. These functions mirror
//! common operations found in fragment shaders and are composed per style
//! in [`crate::art`].
//!
//! ## Categories
//!
//! - [`noise`]: Integer hashes of coordinates and coordinate tuples
//! - [`blend`]: Linear interpolation, clamping, radial falloff
//! - [`color`]: The [`Rgb`] working color and its interpolation
//!
//! ## Example
//!
//! ```rust
//! use seedart::shader::*;
//!
//! fn glow(fx: f32, fy: f32) -> Rgb {
//!     let t = falloff(dist(fx, fy, 0.5, 0.5), 0.25);
//!     Rgb::new(10, 10, 20).lerp(Rgb::new(255, 220, 100), t)
//! }
//!
//! assert_eq!(glow(0.0, 0.0), Rgb::new(10, 10, 20));
//! ```

pub mod blend;
pub mod color;
pub mod noise;

// Re-export all primitives at the top level for convenience
pub use blend::*;
pub use color::*;
pub use noise::*;
