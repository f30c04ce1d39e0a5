//! # PNG Encoder Tests
//!
//! Checks the encoder against an independent decoder (the `image` crate)
//! and re-validates every chunk's framing by hand.

use image::{ColorType, ImageFormat};
use pretty_assertions::assert_eq;

use seedart::png::{self, Encoder};
use seedart::render::patterns;
use seedart::{ARTWORKS, Style};

/// Parse chunks without going through the library's own reader.
fn split_chunks(bytes: &[u8]) -> Vec<(u32, [u8; 4], Vec<u8>, u32)> {
    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < bytes.len() {
        let len = u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap());
        let tag: [u8; 4] = bytes[pos + 4..pos + 8].try_into().unwrap();
        let payload = bytes[pos + 8..pos + 8 + len as usize].to_vec();
        let crc_at = pos + 8 + len as usize;
        let crc = u32::from_be_bytes(bytes[crc_at..crc_at + 4].try_into().unwrap());
        chunks.push((len, tag, payload, crc));
        pos = crc_at + 4;
    }
    assert_eq!(pos, bytes.len(), "trailing bytes after last chunk");
    chunks
}

#[test]
fn decodes_to_identical_pixels() {
    for art in &ARTWORKS {
        // Non-square to catch swapped width/height.
        let pixels = patterns::render(art.style, &art.palette, 64, 40);
        let bytes = png::encode_buffer(&pixels).unwrap();

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap_or_else(|e| panic!("{} did not decode: {}", art.style, e));
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!((decoded.width(), decoded.height()), (64, 40));
        assert_eq!(decoded.into_rgb8().into_raw(), pixels.as_bytes().to_vec());
    }
}

#[test]
fn every_level_decodes() {
    let pixels = patterns::render(Style::Chaos, &ARTWORKS[3].palette, 33, 17);
    for level in 0..=9 {
        let bytes = Encoder::with_level(level)
            .unwrap()
            .encode(pixels.as_bytes(), 33, 17)
            .unwrap();
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!(decoded.into_rgb8().into_raw(), pixels.as_bytes().to_vec());
    }
}

#[test]
fn chunk_lengths_and_crcs_are_valid() {
    let pixels = patterns::render(Style::Sunset, &ARTWORKS[0].palette, 48, 48);
    let bytes = png::encode_buffer(&pixels).unwrap();

    assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    let chunks = split_chunks(&bytes);
    let tags: Vec<&[u8; 4]> = chunks.iter().map(|c| &c.1).collect();
    assert_eq!(tags, vec![b"IHDR", b"IDAT", b"IEND"]);

    for (len, tag, payload, stored) in &chunks {
        assert_eq!(*len as usize, payload.len());
        let mut crc = flate2::Crc::new();
        crc.update(tag);
        crc.update(payload);
        assert_eq!(crc.sum(), *stored, "bad CRC on {:?}", std::str::from_utf8(tag));
    }

    let ihdr = &chunks[0].2;
    assert_eq!(ihdr.len(), 13);
    assert_eq!(&ihdr[..8], &[0, 0, 0, 48, 0, 0, 0, 48]);
    assert_eq!(&ihdr[8..], &[8, 2, 0, 0, 0]);
    assert!(chunks[2].2.is_empty());
}

#[test]
fn library_chunk_reader_agrees() {
    let pixels = patterns::render(Style::Retro, &ARTWORKS[4].palette, 32, 32);
    let bytes = png::encode_buffer(&pixels).unwrap();

    let ours: Vec<_> = png::chunk::chunks(&bytes).collect();
    let theirs = split_chunks(&bytes);
    assert_eq!(ours.len(), theirs.len());
    for (a, b) in ours.iter().zip(&theirs) {
        assert_eq!(a.tag, b.1);
        assert_eq!(a.payload, b.2.as_slice());
        assert!(a.crc_ok());
    }
}

#[test]
fn full_size_artwork_round_trips() {
    let art = &ARTWORKS[9];
    let pixels = patterns::render(art.style, &art.palette, 512, 512);
    let bytes = png::encode_buffer(&pixels).unwrap();
    let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
    assert_eq!(decoded.into_rgb8().into_raw(), pixels.into_bytes());
}
