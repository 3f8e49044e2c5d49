//! `data:` URL encoding and parsing (RFC 2397, base64 form only).
//!
//! A data URL carries its own media type, so the string can be stored or sent
//! anywhere and interpreted without a side channel:
//!
//! ```text
//! data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD...
//! ```

use crate::blob::{Blob, OCTET_STREAM, ReadError};
use base64::prelude::*;
use std::io::Read;
use thiserror::Error;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Error, Debug)]
pub enum DataUrlError {
    #[error("not a data URL (missing `data:` prefix)")]
    MissingScheme,
    #[error("data URL has no `,` separating header and payload")]
    MissingComma,
    #[error("only base64 data URLs are supported")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Build a data URL from raw bytes.
///
/// An empty media type becomes `application/octet-stream`.
pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    let media_type = if media_type.is_empty() {
        OCTET_STREAM
    } else {
        media_type
    };
    format!("{SCHEME}{media_type}{BASE64_MARKER},{}", BASE64_STANDARD.encode(bytes))
}

/// Encode a blob's content as a data URL, unmodified.
pub fn read_as_data_url(blob: &Blob) -> String {
    encode_data_url(blob.media_type(), blob.bytes())
}

/// Read a source to the end and encode it as a data URL.
///
/// I/O failures are returned with the underlying error as their source.
pub fn read_to_data_url(reader: impl Read, media_type: &str) -> Result<String, ReadError> {
    let blob = Blob::from_reader(reader, media_type)?;
    Ok(read_as_data_url(&blob))
}

/// A decoded base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// Parse `data:<mime>[;params];base64,<payload>`.
    ///
    /// Surrounding whitespace is ignored. A missing media type is read as
    /// `application/octet-stream`.
    pub fn parse(input: &str) -> Result<Self, DataUrlError> {
        let rest = input
            .trim()
            .strip_prefix(SCHEME)
            .ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingComma)?;
        let media_type = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(DataUrlError::NotBase64)?;
        // Drop any `;charset=...` style parameters
        let media_type = media_type.split(';').next().unwrap_or_default();
        let media_type = if media_type.is_empty() {
            OCTET_STREAM.to_string()
        } else {
            media_type.to_string()
        };

        let bytes = BASE64_STANDARD.decode(payload)?;
        Ok(Self { media_type, bytes })
    }

    pub fn into_blob(self) -> Blob {
        Blob::new(self.bytes, self.media_type)
    }
}
