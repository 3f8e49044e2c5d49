//! Shared test utilities for the roomprep test suite.
//!
//! Synthetic images are generated in memory so tests never depend on fixture
//! files. Every generator draws the same gradient, which compresses well but
//! still has enough detail for quality settings to matter.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let blob = jpeg_blob(800, 600);
//! let compressed = compress_image(&RustBackend::new(), &blob, &CompressOptions::default()).unwrap();
//! assert_eq!((compressed.width, compressed.height), (800, 600));
//! ```

use crate::blob::Blob;
use image::{DynamicImage, ImageEncoder, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;

// =========================================================================
// Raw encoded bytes
// =========================================================================

fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// A valid baseline JPEG of the given size.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = gradient_rgb(width, height);
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// A valid RGBA PNG of the given size with a half-transparent alpha channel.
pub fn png_rgba_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

/// A valid lossless WebP of the given size.
pub fn webp_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(gradient_rgb(width, height))
        .write_to(&mut buf, ImageFormat::WebP)
        .unwrap();
    buf.into_inner()
}

/// Insert an EXIF APP1 segment carrying only an Orientation tag right after
/// the JPEG SOI marker.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");

    let mut exif = Vec::new();
    exif.extend_from_slice(b"Exif\0\0");
    // Big-endian TIFF header, first IFD at offset 8
    exif.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
    // One entry: 0x0112 Orientation, SHORT, count 1
    exif.extend_from_slice(&[0x00, 0x01, 0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
    exif.extend_from_slice(&orientation.to_be_bytes());
    exif.extend_from_slice(&[0x00, 0x00]);
    // No next IFD
    exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    let segment_len = (exif.len() + 2) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + exif.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&exif);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// A JPEG stored at `width`x`height` whose EXIF tag asks for `orientation`.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    with_exif_orientation(&jpeg_bytes(width, height), orientation)
}

// =========================================================================
// Blobs
// =========================================================================

/// A JPEG blob declared as `image/jpeg`.
pub fn jpeg_blob(width: u32, height: u32) -> Blob {
    Blob::new(jpeg_bytes(width, height), "image/jpeg")
}

/// A blob with the given declared type and size but no meaningful content.
pub fn declared_blob(media_type: &str, size: u64) -> Blob {
    Blob::new(Vec::new(), media_type).with_declared_size(size)
}
