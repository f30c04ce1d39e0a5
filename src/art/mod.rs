//! # Art Generation
//!
//! Procedural artwork styles. Each style is self-contained in its own module
//! and exposes a `shade` function returning the color of one pixel from its
//! position and a three-color [`Palette`]. [`Style`] dispatches to them.
//!
//! ## Adding a New Style
//!
//! 1. Create `src/art/mystyle.rs` with a `shade` function
//! 2. Add `pub mod mystyle;` below
//! 3. Add a variant to [`Style`] and to [`Style::ALL`]
//! 4. Add the name to [`STYLES`]

pub mod algorithm;
pub mod baikal;
pub mod chaos;
pub mod cosmic;
pub mod cube;
pub mod genesis;
pub mod moscow;
pub mod neural;
pub mod retro;
pub mod sunset;

use std::fmt;
use std::str::FromStr;

use crate::error::SeedError;
use crate::shader::Rgb;

/// The three base colors driving an artwork, in order.
pub type Palette = [Rgb; 3];

/// All available style names, in display order.
pub const STYLES: &[&str] = &[
    "sunset",
    "genesis",
    "moscow",
    "chaos",
    "retro",
    "cube",
    "neural",
    "algorithm",
    "baikal",
    "cosmic",
];

/// A procedural artwork style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Sunset,
    Genesis,
    Moscow,
    Chaos,
    Retro,
    Cube,
    Neural,
    Algorithm,
    Baikal,
    Cosmic,
}

impl Style {
    /// Every style, in the same order as [`STYLES`].
    pub const ALL: [Style; 10] = [
        Style::Sunset,
        Style::Genesis,
        Style::Moscow,
        Style::Chaos,
        Style::Retro,
        Style::Cube,
        Style::Neural,
        Style::Algorithm,
        Style::Baikal,
        Style::Cosmic,
    ];

    /// Style name (lowercase, e.g., "sunset").
    pub fn name(self) -> &'static str {
        match self {
            Style::Sunset => "sunset",
            Style::Genesis => "genesis",
            Style::Moscow => "moscow",
            Style::Chaos => "chaos",
            Style::Retro => "retro",
            Style::Cube => "cube",
            Style::Neural => "neural",
            Style::Algorithm => "algorithm",
            Style::Baikal => "baikal",
            Style::Cosmic => "cosmic",
        }
    }

    /// Compute the unclamped color of the pixel at (x, y).
    pub fn shade(self, x: usize, y: usize, width: usize, height: usize, palette: &Palette) -> Rgb {
        match self {
            Style::Sunset => {
                sunset::shade(x, y, width, height, palette, &sunset::Params::default())
            }
            Style::Genesis => genesis::shade(x, y, width, height, palette),
            Style::Moscow => moscow::shade(x, y, width, height, palette),
            Style::Chaos => chaos::shade(x, y, width, height, palette),
            Style::Retro => retro::shade(x, y, width, height, palette),
            Style::Cube => cube::shade(x, y, width, height, palette),
            Style::Neural => {
                neural::shade(x, y, width, height, palette, &neural::Params::default())
            }
            Style::Algorithm => algorithm::shade(x, y, width, height, palette),
            Style::Baikal => baikal::shade(x, y, width, height, palette),
            Style::Cosmic => cosmic::shade(x, y, width, height, palette),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        by_name(s).ok_or_else(|| {
            SeedError::Style(format!(
                "Unknown style '{}'. Available: {}",
                s,
                STYLES.join(", ")
            ))
        })
    }
}

/// Get a style by name (case insensitive).
pub fn by_name(name: &str) -> Option<Style> {
    let name = name.to_lowercase();
    Style::ALL.into_iter().find(|style| style.name() == name)
}

/// Normalized coordinates of a pixel: `(x / width, y / height)`.
#[inline]
pub fn normalized(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
    (x as f32 / width as f32, y as f32 / height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = [
        Rgb::new(255, 120, 50),
        Rgb::new(255, 80, 120),
        Rgb::new(40, 20, 80),
    ];

    #[test]
    fn test_names_match_list() {
        let names: Vec<&str> = Style::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, STYLES);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("sunset"), Some(Style::Sunset));
        assert_eq!(by_name("COSMIC"), Some(Style::Cosmic)); // Case insensitive
        assert_eq!(by_name("unknown"), None);
    }

    #[test]
    fn test_from_str_error_lists_styles() {
        let err = "plaid".parse::<Style>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("plaid"));
        assert!(msg.contains("baikal"));
    }

    #[test]
    fn test_display_round_trips() {
        for style in Style::ALL {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_styles_are_distinct() {
        // Sample a sparse grid; no two styles should paint it identically.
        let sample = |style: Style| -> Vec<Rgb> {
            (0..128)
                .step_by(9)
                .flat_map(|y| (0..128).step_by(11).map(move |x| (x, y)))
                .map(|(x, y)| style.shade(x, y, 128, 128, &PALETTE).clamped())
                .collect()
        };
        for (i, a) in Style::ALL.iter().enumerate() {
            for b in &Style::ALL[i + 1..] {
                assert_ne!(sample(*a), sample(*b), "{} and {} look the same", a, b);
            }
        }
    }
}
