//! # Seedart CLI
//!
//! Command-line interface for generating and uploading seed artworks.
//!
//! ## Usage
//!
//! ```bash
//! # Generate all ten artworks next to the binary and upload them
//! seedart generate
//!
//! # Generate into a directory without uploading
//! seedart generate --out-dir ./seed_images --no-upload
//!
//! # Upload only two styles to a local MinIO
//! seedart generate --base-url http://localhost:9000 --only sunset --only retro
//!
//! # List the artwork table
//! seedart list
//!
//! # Preview one style as a PNG
//! seedart render cosmic --png cosmic.png
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use seedart::{
    SeedError, Style, catalog, png,
    render::patterns,
    seed::{self, SeedConfig},
    upload::{self, HttpStore},
};

/// Seedart - placeholder artwork generator and uploader
#[derive(Parser, Debug)]
#[command(name = "seedart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the artworks, save them, and upload them
    Generate {
        /// Output directory (defaults to the directory containing this binary)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Object storage base URL
        #[arg(long, default_value = upload::DEFAULT_BASE_URL)]
        base_url: String,

        /// Bucket name
        #[arg(long, default_value = upload::DEFAULT_BUCKET)]
        bucket: String,

        /// Artwork side length in pixels
        #[arg(long, default_value_t = catalog::SIZE)]
        size: usize,

        /// Only save files locally
        #[arg(long)]
        no_upload: bool,

        /// Restrict to a style (repeatable)
        #[arg(long, value_name = "STYLE")]
        only: Vec<String>,

        /// Deflate level (0-9)
        #[arg(long, default_value_t = 9)]
        level: u32,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// List the artwork table
    List,

    /// Render a single style to a PNG file
    Render {
        /// Style name
        style: String,

        /// Output file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Side length in pixels
        #[arg(long, default_value_t = catalog::SIZE)]
        size: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SeedError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            out_dir,
            base_url,
            bucket,
            size,
            no_upload,
            only,
            level,
            quiet,
        } => {
            let styles = only
                .iter()
                .map(|name| name.parse::<Style>())
                .collect::<Result<Vec<_>, _>>()?;

            let config = SeedConfig {
                out_dir: out_dir.unwrap_or_else(seed::default_out_dir),
                size,
                bucket,
                styles,
                level,
                quiet,
            };

            let store = if no_upload {
                None
            } else {
                Some(HttpStore::new(base_url)?)
            };

            let outcomes = seed::seed(
                &config,
                store.as_ref().map(|s| s as &dyn upload::ObjectStore),
            )
            .await?;

            if !quiet {
                if store.is_some() {
                    let uploaded = outcomes
                        .iter()
                        .filter(|o| o.upload.as_ref().is_some_and(|s| s.is_success()))
                        .count();
                    println!("\nUploaded {}/{} artworks", uploaded, outcomes.len());
                }
                println!("\nDone!");
            }
        }

        Commands::List => {
            println!("Artworks ({}x{}):", catalog::SIZE, catalog::SIZE);
            for art in &catalog::ARTWORKS {
                let palette: Vec<String> = art
                    .palette
                    .iter()
                    .map(|c| format!("({},{},{})", c.r, c.g, c.b))
                    .collect();
                println!("  {}  {:<10} {}", art.id, art.style, palette.join(" "));
            }
        }

        Commands::Render {
            style,
            png: out,
            size,
        } => {
            seed::validate_size(size)?;
            let style: Style = style.parse()?;
            let palette = catalog::by_style(style)
                .map(|a| a.palette)
                .ok_or_else(|| SeedError::Style(format!("No palette for '{}'", style)))?;

            println!("Generating {} ({}x{})...", style, size, size);
            let pixels = patterns::render(style, &palette, size, size);
            let bytes = png::encode_buffer(&pixels)?;
            fs::write(&out, &bytes)?;
            println!("Saved to {} ({} bytes)", out.display(), bytes.len());
        }
    }

    Ok(())
}
