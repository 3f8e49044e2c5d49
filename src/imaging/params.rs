//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides the output size) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 80). Clamped on construction.
//! - [`CompressOptions`] — Caller-facing knobs: max dimension, quality fraction, upscale policy.
//! - [`EncodeParams`] — Full specification for one resample + encode: source bytes, target dimensions, quality.

use super::backend::BackendError;

/// Default longest-edge bound for compressed output.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Default quality as a fraction in `(0, 1]`.
pub const DEFAULT_QUALITY: f32 = 0.8;

/// Longest edge a JPEG frame header can record.
pub const MAX_OUTPUT_EDGE: u32 = u16::MAX as u32;

/// Pixel budget for a single resampled output (64 megapixels).
pub const MAX_OUTPUT_PIXELS: u64 = 64 * 1024 * 1024;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100) as u8)
    }

    /// Convert a `(0, 1]` fraction to a percent, rounding to the nearest step.
    pub fn from_fraction(fraction: f32) -> Self {
        Self::new((fraction * 100.0).round() as u32)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::from_fraction(DEFAULT_QUALITY)
    }
}

/// How a caller wants an image compressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressOptions {
    max_dimension: u32,
    quality: f32,
    allow_upscale: bool,
}

impl CompressOptions {
    /// Build options, rejecting a zero bound or a quality outside `(0, 1]`.
    pub fn new(max_dimension: u32, quality: f32) -> Result<Self, BackendError> {
        if max_dimension == 0 {
            return Err(BackendError::InvalidParams(
                "max dimension must be greater than zero".into(),
            ));
        }
        if !(quality > 0.0 && quality <= 1.0) {
            return Err(BackendError::InvalidParams(format!(
                "quality must be in (0, 1], got {quality}"
            )));
        }
        Ok(Self {
            max_dimension,
            quality,
            allow_upscale: false,
        })
    }

    /// Let images smaller than the bound be scaled up to it.
    pub fn allow_upscale(mut self, allow: bool) -> Self {
        self.allow_upscale = allow;
        self
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn upscale_allowed(&self) -> bool {
        self.allow_upscale
    }
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
            allow_upscale: false,
        }
    }
}

/// Parameters for a single resample + encode pass.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams<'a> {
    pub source: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}

impl EncodeParams<'_> {
    /// Reject target sizes that cannot be allocated or written as JPEG.
    ///
    /// Runs before any pixel work, so an oversized request fails with
    /// [`BackendError::InvalidParams`] instead of aborting on allocation.
    pub fn check_target(&self) -> Result<(), BackendError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(BackendError::InvalidParams(format!(
                "target size {width}x{height} has an empty edge"
            )));
        }
        if width > MAX_OUTPUT_EDGE || height > MAX_OUTPUT_EDGE {
            return Err(BackendError::InvalidParams(format!(
                "target size {width}x{height} exceeds the JPEG limit of {MAX_OUTPUT_EDGE} pixels per edge"
            )));
        }
        if u64::from(width) * u64::from(height) > MAX_OUTPUT_PIXELS {
            return Err(BackendError::InvalidParams(format!(
                "target size {width}x{height} exceeds the budget of {MAX_OUTPUT_PIXELS} pixels"
            )));
        }
        Ok(())
    }
}
