//! Source blobs: raw bytes plus the media type and size a caller declared.
//!
//! A [`Blob`] is what an upload widget hands over: the file's content, the
//! MIME type it claims to be, and its size. Validation trusts the declared
//! values; decoding looks only at the bytes.
//!
//! When reading from disk the media type is inferred from the file extension,
//! the same way a browser fills in `File.type`.

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Media type used when nothing better is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Extension to media type, for the formats an upload is likely to be.
const EXTENSION_MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque bytes with a declared media type and byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    media_type: String,
    size: u64,
}

impl Blob {
    /// Wrap bytes, declaring their size as the byte length.
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        let size = bytes.len() as u64;
        Self {
            bytes,
            media_type: media_type.into(),
            size,
        }
    }

    /// Override the declared size, e.g. with the value an upload form reported.
    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Read a whole file, inferring its media type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, ReadError> {
        let bytes = std::fs::read(path).map_err(|source| ReadError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(bytes, media_type_for_path(path)))
    }

    /// Describe a file from its metadata alone: media type from the extension,
    /// declared size from the filesystem, no content read.
    pub fn from_path_metadata(path: &Path) -> Result<Self, ReadError> {
        let metadata = std::fs::metadata(path).map_err(|source| ReadError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(Vec::new(), media_type_for_path(path)).with_declared_size(metadata.len()))
    }

    /// Read a reader to the end.
    pub fn from_reader(mut reader: impl Read, media_type: impl Into<String>) -> Result<Self, ReadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new(bytes, media_type))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Infer a media type from a path's extension (case-insensitive).
///
/// Unknown or missing extensions yield an empty string, which is what a
/// browser reports for files it cannot classify.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    EXTENSION_MEDIA_TYPES
        .iter()
        .find(|(candidate, _)| ext.eq_ignore_ascii_case(candidate))
        .map(|(_, media_type)| *media_type)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, ErrorKind};

    #[test]
    fn new_declares_byte_length() {
        let blob = Blob::new(vec![1, 2, 3], "image/png");
        assert_eq!(blob.size(), 3);
        assert_eq!(blob.media_type(), "image/png");
        assert_eq!(blob.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn declared_size_overrides_length() {
        let blob = Blob::new(vec![0; 4], "image/png").with_declared_size(99);
        assert_eq!(blob.size(), 99);
        assert_eq!(blob.bytes().len(), 4);
    }

    #[test]
    fn media_type_from_extension() {
        assert_eq!(media_type_for_path(Path::new("room.jpg")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("room.JPEG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("a/b/room.webp")), "image/webp");
        assert_eq!(media_type_for_path(Path::new("plan.png")), "image/png");
    }

    #[test]
    fn media_type_unknown_is_empty() {
        assert_eq!(media_type_for_path(Path::new("notes.txt")), "");
        assert_eq!(media_type_for_path(Path::new("Makefile")), "");
    }

    #[test]
    fn from_path_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("kitchen.png");
        std::fs::write(&path, [9, 8, 7]).unwrap();

        let blob = Blob::from_path(&path).unwrap();
        assert_eq!(blob.bytes(), &[9, 8, 7]);
        assert_eq!(blob.media_type(), "image/png");
        assert_eq!(blob.size(), 3);
    }

    #[test]
    fn from_path_missing_file_reports_path() {
        let err = Blob::from_path(Path::new("/nonexistent/room.jpg")).unwrap_err();
        match &err {
            ReadError::File { path, source } => {
                assert_eq!(path, Path::new("/nonexistent/room.jpg"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected File error, got {other:?}"),
        }
        assert!(err.to_string().contains("/nonexistent/room.jpg"));
    }

    #[test]
    fn from_path_metadata_declares_size_without_reading() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bedroom.webp");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let blob = Blob::from_path_metadata(&path).unwrap();
        assert_eq!(blob.size(), 2048);
        assert_eq!(blob.media_type(), "image/webp");
        assert!(blob.bytes().is_empty());
    }

    #[test]
    fn from_path_metadata_missing_file_is_per_file_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let present = tmp.path().join("a.png");
        std::fs::write(&present, [1, 2, 3]).unwrap();
        let missing = tmp.path().join("gone.jpg");

        let results: Vec<_> = [&missing, &present]
            .iter()
            .map(|p| Blob::from_path_metadata(p))
            .collect();

        match &results[0] {
            Err(ReadError::File { path, source }) => {
                assert_eq!(path, &missing);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("expected File error, got {other:?}"),
        }
        assert_eq!(results[1].as_ref().map(Blob::size).ok(), Some(3));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::ConnectionReset, "upload aborted"))
        }
    }

    #[test]
    fn from_reader_surfaces_io_cause() {
        let err = Blob::from_reader(FailingReader, "image/jpeg").unwrap_err();
        match err {
            ReadError::Io(e) => assert_eq!(e.kind(), ErrorKind::ConnectionReset),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn from_reader_reads_everything() {
        let blob = Blob::from_reader(Cursor::new(vec![1u8; 5000]), "image/webp").unwrap();
        assert_eq!(blob.size(), 5000);
    }
}
