//! The remote media host seam.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MediaError;

/// Folder used when the caller does not name one.
pub const DEFAULT_FOLDER: &str = "uploads";

/// Transformation inserted into delivery URLs for web display.
const WEB_TRANSFORM: &str = "f_auto,q_auto/";

/// Transformation inserted into delivery URLs for thumbnails.
const THUMB_TRANSFORM: &str = "c_fill,g_face,w_480,h_320/";

/// An image to store on the host.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Encoded image bytes (WebP).
    pub bytes: Vec<u8>,
    pub folder: String,
    /// Name within the folder. An existing image with the same id is replaced.
    pub public_id: String,
    pub tags: Vec<String>,
}

/// What the host reports after a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    /// Full id including the folder, e.g. `uploads/palm-garden`.
    pub public_id: String,
    pub secure_url: String,
    pub web_url: String,
    pub thumb_url: String,
    pub bytes: i64,
    pub width: i32,
    pub height: i32,
    pub format: String,
}

/// Stores images and returns their delivery URLs.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<UploadedImage, MediaError>;
}

/// Auto-format, auto-quality variant of a delivery URL.
///
/// URLs without an `/upload/` segment are returned unchanged.
pub fn web_url(secure_url: &str) -> String {
    with_transform(secure_url, WEB_TRANSFORM)
}

/// Face-aware 480x320 crop of a delivery URL.
///
/// URLs without an `/upload/` segment are returned unchanged.
pub fn thumb_url(secure_url: &str) -> String {
    with_transform(secure_url, THUMB_TRANSFORM)
}

fn with_transform(secure_url: &str, transform: &str) -> String {
    secure_url.replace("/upload/", &format!("/upload/{transform}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://res.cloudinary.com/demo/image/upload/v1/uploads/palm.webp";

    #[test]
    fn web_variant() {
        assert_eq!(
            web_url(URL),
            "https://res.cloudinary.com/demo/image/upload/f_auto,q_auto/v1/uploads/palm.webp"
        );
    }

    #[test]
    fn thumb_variant() {
        assert_eq!(
            thumb_url(URL),
            "https://res.cloudinary.com/demo/image/upload/c_fill,g_face,w_480,h_320/v1/uploads/palm.webp"
        );
    }

    #[test]
    fn urls_without_upload_segment_are_unchanged() {
        let other = "https://cdn.example.com/palm.webp";
        assert_eq!(web_url(other), other);
        assert_eq!(thumb_url(other), other);
    }
}
