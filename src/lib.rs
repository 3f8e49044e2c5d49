//! # roomprep
//!
//! Upload-side helpers for an interior-design image generator: validate a
//! room photo, shrink it into a self-contained data URL, and turn a short
//! user request into a full generation prompt.
//!
//! ```text
//! upload ──▶ validate ──▶ compress ──▶ data:image/jpeg;base64,...
//!                                       │
//! "Make it cozy" + living-room ──▶ compose_prompt ──▶ generator request
//! ```
//!
//! Every operation is a stateless function over a single input. Nothing is
//! cached, nothing is shared between calls, and nothing touches the network.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`blob`] | Source bytes + declared media type and size; reading from files and readers |
//! | [`validation`] | Media-type allow-list and 10 MiB ceiling, returned as a value |
//! | [`imaging`] | Decode → fit within a bound → bilinear resample → JPEG → data URL |
//! | [`data_url`] | Encoding blobs as `data:` URLs and parsing them back |
//! | [`prompt`] | Room-type labels and prompt composition |
//! | [`config`] | `roomprep.toml` loading for CLI defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Decode Failures
//!
//! Compression sniffs the format from magic bytes and reads the header before
//! doing anything else. Bytes that are not a decodable image produce
//! [`imaging::BackendError::Decode`] immediately; a compression call always
//! finishes with exactly one `Ok` or `Err`.
//!
//! ## No Upscaling by Default
//!
//! The fit factor is `min(max / width, max / height)`. Left unclamped it would
//! enlarge small photos, so re-compressing an output could change its size.
//! The factor is clamped to 1 unless the caller opts in with
//! [`imaging::CompressOptions::allow_upscale`].
//!
//! ## Declared Metadata for Validation
//!
//! [`validation::validate`] checks what the uploader *claims* (type and size)
//! and never inspects the bytes. It is a fast, advisory gate for a form; the
//! decoder remains the authority on whether the content is an image.

pub mod blob;
pub mod config;
pub mod data_url;
pub mod imaging;
pub mod output;
pub mod prompt;
pub mod validation;

pub use blob::{Blob, ReadError};
pub use data_url::{DataUrl, read_as_data_url};
pub use imaging::{BackendError, CompressOptions, CompressedImage, RustBackend, compress_image};
pub use prompt::{compose_prompt, is_known_room_type, lookup_label};
pub use validation::{ValidationFailure, ValidationOutcome, validate};

#[cfg(test)]
pub(crate) mod test_helpers;
