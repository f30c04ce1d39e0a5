//! Hash functions for procedural texture (stars, windows, grain).
//!
//! The styles only need a stable, well-distributed hash of small integer
//! tuples. All functions here are pure and reproducible across runs.

/// Integer hash function using bit manipulation.
///
/// Produces a pseudo-random u32 from an input u32. Good for seeding
/// and deriving other random values.
#[inline]
pub fn hash(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x = x.wrapping_mul(0x45d9f3b);
    x ^= x >> 16;
    x
}

/// Hash two integers to produce a pseudo-random u32.
///
/// Order matters: `hash2(a, b)` and `hash2(b, a)` differ.
#[inline]
pub fn hash2(x: u32, y: u32) -> u32 {
    hash(x.wrapping_mul(374761393) ^ hash(y.wrapping_add(0x9e3779b9)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        assert_eq!(hash(42), hash(42));
        assert_ne!(hash(42), hash(43));
    }

    #[test]
    fn test_hash2_is_ordered() {
        assert_eq!(hash2(3, 7), hash2(3, 7));
        assert_ne!(hash2(3, 7), hash2(7, 3));
    }

    #[test]
    fn test_hash2_distribution() {
        // A 1-in-10 threshold over a 100x100 grid should land near 10%.
        let hits = (0..100)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| hash2(x, y) % 10 == 0)
            .count();
        assert!((700..1300).contains(&hits), "poorly distributed: {}", hits);
    }
}
