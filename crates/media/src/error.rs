//! Errors from the compression pipeline and the media host client.

/// Errors from the media layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The upload could not be decoded or re-encoded as an image.
    #[error("Invalid image: {0}")]
    Image(#[from] image::ImageError),

    /// Reading the in-memory upload failed.
    #[error("Image I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host returned a non-2xx status code.
    #[error("Media host error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// Credentials or other settings are missing or malformed.
    #[error("Media host configuration error: {0}")]
    Config(String),

    /// A blocking compression task panicked or was cancelled.
    #[error("Compression task failed: {0}")]
    Task(String),
}
