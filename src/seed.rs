//! # Seeding
//!
//! Drives the whole run: for each catalog entry, render the style, encode
//! the PNG, save it locally, then upload it. Everything happens strictly in
//! catalog order, one artwork at a time.
//!
//! A failed local write aborts the run. A failed upload does not; its status
//! is printed and the next artwork starts.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::art::Style;
use crate::catalog::{self, ArtworkSpec};
use crate::error::SeedError;
use crate::png::Encoder;
use crate::render::patterns;
use crate::render::pixels::byte_len;
use crate::upload::{DEFAULT_BUCKET, ObjectStore, PNG_CONTENT_TYPE, UploadStatus, object_key};

/// Settings for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Directory receiving `{identifier}.png` files (created if missing).
    pub out_dir: PathBuf,
    /// Side length of every artwork in pixels.
    pub size: usize,
    /// Bucket name prefixed to every object key.
    pub bucket: String,
    /// Restrict the run to these styles. Empty means all.
    pub styles: Vec<Style>,
    /// Deflate level, 0-9.
    pub level: u32,
    /// Suppress progress lines.
    pub quiet: bool,
}

impl SeedConfig {
    /// Defaults for everything except the output directory.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            size: catalog::SIZE,
            bucket: DEFAULT_BUCKET.to_string(),
            styles: Vec::new(),
            level: 9,
            quiet: false,
        }
    }
}

/// The directory containing the running executable, or `.` if unknown.
pub fn default_out_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// What happened to one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub id: Uuid,
    pub style: Style,
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Encoded PNG size in bytes.
    pub bytes: usize,
    /// `None` when uploads are disabled.
    pub upload: Option<UploadStatus>,
}

/// Largest accepted artwork side, matching the PNG dimension limit.
pub const MAX_SIZE: usize = i32::MAX as usize;

/// Check an artwork side length before anything is allocated.
pub fn validate_size(size: usize) -> Result<(), SeedError> {
    if size == 0 {
        return Err(SeedError::Config("Artwork size must be positive".to_string()));
    }
    if size > MAX_SIZE || byte_len(size, size).is_none() {
        return Err(SeedError::Config(format!(
            "Artwork size {} is too large",
            size
        )));
    }
    Ok(())
}

/// Render and encode one artwork at `size`x`size`.
pub fn render_artwork(
    spec: &ArtworkSpec,
    size: usize,
    encoder: &Encoder,
) -> Result<Vec<u8>, SeedError> {
    let pixels = patterns::render(spec.style, &spec.palette, size, size);
    encoder.encode(pixels.as_bytes(), size, size)
}

/// Run the seeding loop.
///
/// With `store` set to `None` artworks are only written to disk.
pub async fn seed(
    config: &SeedConfig,
    store: Option<&dyn ObjectStore>,
) -> Result<Vec<SeedOutcome>, SeedError> {
    validate_size(config.size)?;
    let encoder = Encoder::with_level(config.level)?;
    fs::create_dir_all(&config.out_dir)?;

    let say = |line: String| {
        if !config.quiet {
            println!("{}", line);
        }
    };

    let mut outcomes = Vec::new();
    for spec in catalog::select(&config.styles) {
        say(format!("Generating {} ({})...", spec.style, spec.id));
        let png = render_artwork(spec, config.size, &encoder)?;

        let path = config.out_dir.join(spec.file_name());
        fs::write(&path, &png)?;
        let bytes = png.len();
        say(format!("  Saved {} ({} bytes)", path.display(), bytes));

        let upload = match store {
            Some(store) => {
                let key = object_key(&config.bucket, &spec.id.to_string());
                let status = store.put(&key, png, PNG_CONTENT_TYPE).await;
                say(format!("  {}: {}", spec.style, status));
                Some(status)
            }
            None => None,
        };

        outcomes.push(SeedOutcome {
            id: spec.id,
            style: spec.style,
            path,
            bytes,
            upload,
        });
    }

    Ok(outcomes)
}
