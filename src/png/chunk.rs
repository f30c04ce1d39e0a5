//! # PNG Chunk Framing
//!
//! Every PNG chunk is laid out as:
//!
//! | Field | Size | Notes |
//! |-------|------|-------|
//! | Length | 4 bytes | Big-endian, payload length only |
//! | Type | 4 bytes | ASCII tag, e.g. `IHDR` |
//! | Payload | Length bytes | |
//! | CRC | 4 bytes | Big-endian CRC-32 of Type + Payload |
//!
//! The CRC uses the IEEE 802.3 polynomial, as zlib does.

use crc32fast::Hasher;

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

/// CRC-32 over a chunk's type tag followed by its payload.
pub fn crc(tag: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    hasher.finalize()
}

/// Append one framed chunk to `out`.
///
/// ## Example
///
/// ```
/// use seedart::png::chunk;
///
/// let mut out = Vec::new();
/// chunk::write(&mut out, &chunk::IEND, &[]);
///
/// // The IEND chunk is the same in every PNG file.
/// assert_eq!(
///     out,
///     [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
/// );
/// ```
pub fn write(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.reserve(12 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc(tag, payload).to_be_bytes());
}

/// A chunk borrowed from an encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Value of the length field.
    pub length: u32,
    pub tag: [u8; 4],
    pub payload: &'a [u8],
    /// Value of the stored CRC field.
    pub crc: u32,
}

impl Chunk<'_> {
    /// Whether the stored CRC matches the recomputed one.
    pub fn crc_ok(&self) -> bool {
        self.crc == crc(&self.tag, self.payload)
    }
}

/// Iterate over the chunks following the 8-byte signature.
///
/// Stops at the first truncated chunk.
pub fn chunks(png: &[u8]) -> Chunks<'_> {
    Chunks {
        rest: png.get(super::SIGNATURE.len()..).unwrap_or(&[]),
    }
}

/// Iterator returned by [`chunks`].
pub struct Chunks<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.rest.get(..8)?;
        let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
        let tag = [header[4], header[5], header[6], header[7]];

        let end = 8 + length as usize;
        let payload = self.rest.get(8..end)?;
        let crc_bytes = self.rest.get(end..end + 4)?;
        let crc = u32::from_be_bytes([crc_bytes[0], crc_bytes[1], crc_bytes[2], crc_bytes[3]]);

        self.rest = &self.rest[end + 4..];
        Some(Chunk {
            length,
            tag,
            payload,
            crc,
        })
    }
}
