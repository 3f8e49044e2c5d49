//! Image normalization — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | decoder header + EXIF orientation (no pixel decode) |
//! | **Fit** | integer `max / longer_edge` scaling, no upscale by default |
//! | **Resample → JPEG** | auto-orient, bilinear `resize_exact`, `JpegEncoder` |
//! | **Wrap** | base64 `data:image/jpeg` URL |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{calculate_fit_dimensions, calculate_scale_factor};
pub use operations::{
    CompressedImage, OUTPUT_MEDIA_TYPE, compress_image, compress_many, get_dimensions,
};
pub use params::{
    CompressOptions, DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY, EncodeParams, MAX_OUTPUT_EDGE,
    MAX_OUTPUT_PIXELS, Quality,
};
pub use rust_backend::RustBackend;
