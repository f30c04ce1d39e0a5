//! # Artwork Catalog
//!
//! The fixed table of seed artworks. Each record pairs a stable identifier
//! (used as file name and object key) with a style and a palette.
//!
//! | Identifier suffix | Style |
//! |-------------------|-------|
//! | ...0001 | sunset |
//! | ...0002 | genesis |
//! | ...0003 | moscow |
//! | ...0004 | chaos |
//! | ...0005 | retro |
//! | ...0006 | cube |
//! | ...0007 | neural |
//! | ...0008 | algorithm |
//! | ...0009 | baikal |
//! | ...0010 | cosmic |

use uuid::{Uuid, uuid};

use crate::art::{Palette, Style};
use crate::shader::Rgb;

/// Side length in pixels of every seed artwork.
pub const SIZE: usize = 512;

/// One seed artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkSpec {
    /// Stable identifier, used as file name and object key.
    pub id: Uuid,
    pub style: Style,
    pub palette: Palette,
}

impl ArtworkSpec {
    /// File name of the encoded artwork, e.g. `b0000001-...-000000000001.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.id)
    }
}

const fn artwork(id: Uuid, style: Style, palette: [(i32, i32, i32); 3]) -> ArtworkSpec {
    let [a, b, c] = palette;
    ArtworkSpec {
        id,
        style,
        palette: [
            Rgb::new(a.0, a.1, a.2),
            Rgb::new(b.0, b.1, b.2),
            Rgb::new(c.0, c.1, c.2),
        ],
    }
}

/// All seed artworks, in generation order.
pub const ARTWORKS: [ArtworkSpec; 10] = [
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000001"),
        Style::Sunset,
        [(255, 120, 50), (255, 80, 120), (40, 20, 80)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000002"),
        Style::Genesis,
        [(0, 200, 255), (100, 0, 200), (0, 50, 100)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000003"),
        Style::Moscow,
        [(20, 20, 60), (255, 200, 50), (100, 100, 200)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000004"),
        Style::Chaos,
        [(200, 0, 50), (50, 0, 200), (255, 255, 0)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000005"),
        Style::Retro,
        [(0, 200, 0), (200, 0, 200), (50, 50, 50)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000006"),
        Style::Cube,
        [(0, 100, 255), (255, 0, 100), (0, 255, 200)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000007"),
        Style::Neural,
        [(150, 0, 255), (0, 255, 150), (255, 150, 0)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000008"),
        Style::Algorithm,
        [(255, 200, 0), (0, 100, 200), (200, 50, 100)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000009"),
        Style::Baikal,
        [(200, 230, 255), (100, 150, 200), (180, 220, 240)],
    ),
    artwork(
        uuid!("b0000001-0000-0000-0000-000000000010"),
        Style::Cosmic,
        [(80, 0, 120), (200, 100, 255), (0, 50, 100)],
    ),
];

/// Look up the catalog entry for a style.
pub fn by_style(style: Style) -> Option<&'static ArtworkSpec> {
    ARTWORKS.iter().find(|a| a.style == style)
}

/// Catalog entries whose style is in `styles`, in catalog order.
///
/// An empty filter selects everything.
pub fn select(styles: &[Style]) -> Vec<&'static ArtworkSpec> {
    ARTWORKS
        .iter()
        .filter(|a| styles.is_empty() || styles.contains(&a.style))
        .collect()
}
