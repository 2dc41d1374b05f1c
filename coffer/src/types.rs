//! Typed carriers for upload payloads and results.

use bytes::Bytes;

/// A single uploaded file as handed over by the request layer.
///
/// The declared `name` is only consulted for extension validation; stored
/// artifacts are always renamed with a generated name and the configured
/// default extension.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as declared by the client
    pub name: String,
    /// Raw payload bytes
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Payload length in bytes
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Relative paths produced by an inline image save: the stored original and
/// its derived thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Path of the raw decoded payload, relative to the web root
    pub path: String,
    /// Path of the thumbnail, relative to the web root
    pub thumbnail_path: String,
}
