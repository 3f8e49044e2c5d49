//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Sniff format | `image::ImageReader::with_guessed_format` (magic bytes, not the declared type) |
//! | Identify | `ImageDecoder::dimensions` + `orientation` (header only) |
//! | Decode (JPEG, PNG, WebP, GIF, BMP, TIFF) | `image` crate (pure Rust decoders) |
//! | Auto-orient | `DynamicImage::apply_orientation` from the EXIF tag |
//! | Resample | `DynamicImage::resize_exact` with the bilinear `Triangle` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder::new_with_quality` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::EncodeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use log::debug;
use std::io::Cursor;
use std::sync::LazyLock;

/// Formats whose decoders are compiled in via Cargo features.
const DECODER_CANDIDATES: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
];

static SUPPORTED_FORMATS: LazyLock<Vec<ImageFormat>> = LazyLock::new(|| {
    DECODER_CANDIDATES
        .iter()
        .copied()
        .filter(|fmt| fmt.reading_enabled())
        .collect()
});

/// Returns the image formats that have working decoders compiled in.
pub fn supported_input_formats() -> &'static [ImageFormat] {
    &SUPPORTED_FORMATS
}

/// Resampling filter used for every resize.
///
/// Bilinear is what browser canvases use by default, so output matches what
/// a client-side upload widget would have produced.
const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an in-memory reader with the format sniffed from magic bytes.
fn open_reader(source: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, BackendError> {
    let reader = ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|e| BackendError::Decode(format!("Failed to read image header: {e}")))?;
    match reader.format() {
        Some(fmt) if supported_input_formats().contains(&fmt) => Ok(reader),
        Some(fmt) => Err(BackendError::Decode(format!(
            "No decoder available for {fmt:?}"
        ))),
        None => Err(BackendError::Decode("Unrecognized image format".into())),
    }
}

/// EXIF orientation of the source. A missing or unreadable tag means upright,
/// as it does for a browser.
fn read_orientation(decoder: &mut impl ImageDecoder) -> Orientation {
    decoder.orientation().unwrap_or(Orientation::NoTransforms)
}

/// True when displaying the image swaps its width and height.
fn swaps_axes(orientation: Orientation) -> bool {
    matches!(
        orientation,
        Orientation::Rotate90
            | Orientation::Rotate270
            | Orientation::Rotate90FlipH
            | Orientation::Rotate270FlipH
    )
}

/// Decode image bytes into an upright raster.
fn load_image(source: &[u8]) -> Result<DynamicImage, BackendError> {
    let mut decoder = open_reader(source)?
        .into_decoder()
        .map_err(|e| BackendError::Decode(e.to_string()))?;
    let orientation = read_orientation(&mut decoder);
    let mut img =
        DynamicImage::from_decoder(decoder).map_err(|e| BackendError::Decode(e.to_string()))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Encode as baseline JPEG. Alpha is discarded since JPEG cannot carry it.
fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, BackendError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(format!("JPEG encode failed: {e}")))?;
    Ok(buf)
}

impl ImageBackend for RustBackend {
    /// Displayed dimensions: stored size with the EXIF rotation applied.
    fn identify(&self, source: &[u8]) -> Result<Dimensions, BackendError> {
        let mut decoder = open_reader(source)?
            .into_decoder()
            .map_err(|e| BackendError::Decode(format!("Failed to read dimensions: {e}")))?;
        let (width, height) = decoder.dimensions();
        if swaps_axes(read_orientation(&mut decoder)) {
            Ok(Dimensions {
                width: height,
                height: width,
            })
        } else {
            Ok(Dimensions { width, height })
        }
    }

    fn encode(&self, params: &EncodeParams<'_>) -> Result<Vec<u8>, BackendError> {
        params.check_target()?;

        let img = load_image(params.source)?;
        let resized = if img.width() == params.width && img.height() == params.height {
            img
        } else {
            debug!(
                "resampling {}x{} -> {}x{}",
                img.width(),
                img.height(),
                params.width,
                params.height
            );
            img.resize_exact(params.width, params.height, RESAMPLE_FILTER)
        };

        encode_jpeg(&resized, params.quality.value())
    }
}
