//! Error types for the layout engine

use thiserror::Error;

/// Reasons an embedded photo cannot be placed
///
/// None of these abort a render; the photo is skipped with a warning.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// Data URL without a `;base64,` payload
    #[error("photo is not a base64 data URL (header '{header}')")]
    InvalidDataUrl { header: String },

    #[error("photo payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Bytes that are not PNG, JPEG or GIF
    #[error("unsupported photo format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode photo pixels: {0}")]
    Decode(#[from] image::ImageError),
}

impl PhotoError {
    pub fn invalid_data_url(header: impl Into<String>) -> Self {
        Self::InvalidDataUrl {
            header: header.into(),
        }
    }
}
