//! # Seedart - Placeholder Artwork Seeder
//!
//! Seedart procedurally paints a fixed set of ten artworks, encodes them as
//! PNG files and uploads them to an object-storage bucket. It exists to
//! populate development and test environments with visually distinct
//! images under stable identifiers.
//!
//! - **Styles**: ten closed-form per-pixel styles (gradients, swirls, hashed noise)
//! - **PNG**: a minimal truecolor encoder (chunk framing, CRC, deflate)
//! - **Upload**: plain HTTP `PUT` per artwork, status reported, never retried
//!
//! ## Quick Start
//!
//! ```no_run
//! use seedart::{seed::{seed, SeedConfig}, upload::HttpStore};
//!
//! # async fn example() -> Result<(), seedart::SeedError> {
//! let store = HttpStore::new("http://localhost:9000")?;
//! let config = SeedConfig::new("./seed_images");
//!
//! for outcome in seed(&config, Some(&store)).await? {
//!     println!("{} -> {:?}", outcome.style, outcome.upload);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`art`] | The ten styles and the [`Style`] dispatch |
//! | [`shader`] | Hashes, interpolation, the working color type |
//! | [`render`] | Pixel buffers and style rendering |
//! | [`png`] | PNG encoding |
//! | [`catalog`] | The fixed artwork table |
//! | [`upload`] | Object storage over HTTP |
//! | [`seed`] | The generate, save, upload loop |
//! | [`error`] | Error types |

pub mod art;
pub mod catalog;
pub mod error;
pub mod png;
pub mod render;
pub mod seed;
pub mod shader;
pub mod upload;

// Re-exports for convenience
pub use art::{Palette, Style};
pub use catalog::{ARTWORKS, ArtworkSpec};
pub use error::SeedError;
pub use render::PixelBuffer;
