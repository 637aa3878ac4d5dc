//! Encoded still frame returned by the extractor.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME type of frames encoded with the `mjpeg` codec.
pub const JPEG_MIME: &str = "image/jpeg";

/// Encoded image bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    bytes: Vec<u8>,
    mime: &'static str,
}

impl Thumbnail {
    /// Wrap JPEG bytes produced by the media tool.
    #[must_use]
    pub const fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: JPEG_MIME,
        }
    }

    /// Encoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type tag of [`Thumbnail::bytes`].
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Consume the thumbnail and return the raw bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// `data:<mime>;base64,<payload>` form suitable for embedding in HTML.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}
