//! Working color type for the styles.
//!
//! Styles compose colors with unclamped integer channels: an interpolation
//! parameter outside [0, 1] or an additive glow may push a channel past the
//! byte range, and only the final write into the pixel buffer clamps.

use super::blend::lerp;

/// An RGB color with signed, unclamped channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Interpolate towards `other`.
    ///
    /// Each channel truncates toward zero. `t` is not clamped.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: i32, b: i32| lerp(a as f32, b as f32, t) as i32;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Add a per-channel offset without clamping.
    pub fn add(self, dr: i32, dg: i32, db: i32) -> Rgb {
        Rgb::new(self.r + dr, self.g + dg, self.b + db)
    }

    /// Add the same offset to every channel without clamping.
    pub fn brighten(self, amount: i32) -> Rgb {
        self.add(amount, amount, amount)
    }

    /// Clamp every channel into [0, 255].
    pub fn clamped(self) -> Rgb {
        Rgb::new(
            clamp_channel(self.r) as i32,
            clamp_channel(self.g) as i32,
            clamp_channel(self.b) as i32,
        )
    }

    /// Clamp and pack as `[r, g, b]` bytes.
    pub fn to_bytes(self) -> [u8; 3] {
        [
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
        ]
    }

    /// Squared Euclidean distance between two colors.
    pub fn distance_sq(self, other: Rgb) -> i64 {
        let d = |a: i32, b: i32| {
            let v = (a - b) as i64;
            v * v
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r as i32, g as i32, b as i32)
    }
}

/// Clamp a channel value into the byte range.
#[inline]
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
