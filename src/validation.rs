//! Upload validation: media-type allow-list and size ceiling.
//!
//! Validation is advisory. It never fails with an error; it returns a
//! [`ValidationOutcome`] the caller branches on. Checks run in a fixed order
//! and the first failure wins, so an oversized file of the wrong type reports
//! [`ValidationFailure::UnsupportedType`].
//!
//! Only the *declared* media type and size are inspected. Whether the bytes
//! really are an image is the decoder's business.

use crate::blob::Blob;
use serde::Serialize;

/// Declared media types accepted for upload. `image/jpg` is not registered
/// but some clients send it for JPEG files.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Largest accepted upload, inclusive: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Why a blob was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    UnsupportedType,
    TooLarge,
}

impl ValidationFailure {
    /// Message suitable for showing to the person uploading.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnsupportedType => "Please upload a valid image file (JPEG, PNG, or WebP)",
            Self::TooLarge => "Image file size must be less than 10MB",
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationFailure>,
}

impl ValidationOutcome {
    pub fn pass() -> Self {
        Self {
            valid: true,
            failure: None,
        }
    }

    pub fn fail(failure: ValidationFailure) -> Self {
        Self {
            valid: false,
            failure: Some(failure),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.failure.map(ValidationFailure::message)
    }
}

/// Check a blob's declared type, then its declared size.
pub fn validate(blob: &Blob) -> ValidationOutcome {
    if !ALLOWED_MEDIA_TYPES.iter().any(|t| *t == blob.media_type()) {
        return ValidationOutcome::fail(ValidationFailure::UnsupportedType);
    }
    if blob.size() > MAX_UPLOAD_BYTES {
        return ValidationOutcome::fail(ValidationFailure::TooLarge);
    }
    ValidationOutcome::pass()
}
