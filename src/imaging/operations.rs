//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a blob and options, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{calculate_fit_dimensions, calculate_scale_factor};
use super::params::{CompressOptions, EncodeParams, Quality};
use crate::blob::Blob;
use crate::data_url::encode_data_url;
use log::debug;
use rayon::prelude::*;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Media type of every compressed output.
pub const OUTPUT_MEDIA_TYPE: &str = "image/jpeg";

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, source: &[u8]) -> Result<(u32, u32)> {
    let dims = backend.identify(source)?;
    Ok((dims.width, dims.height))
}

/// A compressed image, ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    /// `data:image/jpeg;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    /// Dimensions of the decoded source.
    pub original_width: u32,
    pub original_height: u32,
    /// Length of the encoded JPEG before base64.
    pub encoded_len: usize,
}

impl CompressedImage {
    pub fn into_data_url(self) -> String {
        self.data_url
    }
}

/// Plan the encode pass for a source of known size without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_compression<'a>(
    source: &'a [u8],
    original_dims: (u32, u32),
    options: &CompressOptions,
) -> EncodeParams<'a> {
    let (width, height) = calculate_fit_dimensions(
        original_dims,
        options.max_dimension(),
        options.upscale_allowed(),
    );
    EncodeParams {
        source,
        width,
        height,
        quality: Quality::from_fraction(options.quality()),
    }
}

/// Decode, fit within `max_dimension`, re-encode as JPEG, and wrap as a data URL.
///
/// Undecodable bytes fail with [`BackendError::Decode`]; a planned size past
/// the output limits fails with [`BackendError::InvalidParams`] before any
/// pixels are decoded. The declared media type is not consulted; run
/// [`validate`](crate::validation::validate) first if it matters.
pub fn compress_image(
    backend: &impl ImageBackend,
    blob: &Blob,
    options: &CompressOptions,
) -> Result<CompressedImage> {
    let original = get_dimensions(backend, blob.bytes())?;
    let params = plan_compression(blob.bytes(), original, options);
    params.check_target()?;

    debug!(
        "compressing {}x{} ({}, {} bytes) -> {}x{} at scale {:.3}, quality {}",
        original.0,
        original.1,
        blob.media_type(),
        blob.size(),
        params.width,
        params.height,
        calculate_scale_factor(original, options.max_dimension(), options.upscale_allowed()),
        params.quality.value()
    );

    let encoded = backend.encode(&params)?;
    Ok(CompressedImage {
        data_url: encode_data_url(OUTPUT_MEDIA_TYPE, &encoded),
        width: params.width,
        height: params.height,
        original_width: original.0,
        original_height: original.1,
        encoded_len: encoded.len(),
    })
}

/// Compress independent blobs in parallel.
///
/// Results are returned in input order; one failure does not affect the rest.
pub fn compress_many(
    backend: &impl ImageBackend,
    blobs: &[Blob],
    options: &CompressOptions,
) -> Vec<Result<CompressedImage>> {
    blobs
        .par_iter()
        .map(|blob| compress_image(backend, blob, options))
        .collect()
}
