//! In-memory [`MediaHost`] for tests and local development without
//! media host credentials.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::MediaError;
use crate::host::{self, MediaHost, UploadRequest, UploadedImage};

/// Records uploads instead of sending them anywhere.
///
/// Uploads whose public id is listed in `fail_on` are rejected with an
/// [`MediaError::ApiError`].
#[derive(Default)]
pub struct MockMediaHost {
    base_url: String,
    fail_on: Vec<String>,
    uploads: Mutex<Vec<UploadRequest>>,
}

impl MockMediaHost {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reject uploads with this public id.
    pub fn failing_on(mut self, public_id: impl Into<String>) -> Self {
        self.fail_on.push(public_id.into());
        self
    }

    /// Requests received so far.
    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads
            .lock()
            .map(|u| u.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MediaHost for MockMediaHost {
    async fn upload(&self, request: UploadRequest) -> Result<UploadedImage, MediaError> {
        if self.fail_on.contains(&request.public_id) {
            return Err(MediaError::ApiError {
                status: 400,
                body: format!("rejected {}", request.public_id),
            });
        }

        let public_id = format!("{}/{}", request.folder, request.public_id);
        let secure_url = format!("{}/image/upload/v1/{public_id}.webp", self.base_url);
        let uploaded = UploadedImage {
            web_url: host::web_url(&secure_url),
            thumb_url: host::thumb_url(&secure_url),
            public_id,
            secure_url,
            bytes: request.bytes.len() as i64,
            width: 0,
            height: 0,
            format: "webp".to_string(),
        };

        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push(request);
        }
        Ok(uploaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(public_id: &str) -> UploadRequest {
        UploadRequest {
            bytes: vec![1, 2, 3],
            folder: "uploads".into(),
            public_id: public_id.into(),
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn records_uploads_and_builds_urls() {
        let host = MockMediaHost::new("https://media.test");
        let uploaded = host.upload(request("palm")).await.unwrap();
        assert_eq!(uploaded.public_id, "uploads/palm");
        assert_eq!(uploaded.secure_url, "https://media.test/image/upload/v1/uploads/palm.webp");
        assert!(uploaded.thumb_url.contains("/upload/c_fill,g_face,w_480,h_320/"));
        assert_eq!(uploaded.bytes, 3);
        assert_eq!(host.uploads().len(), 1);
    }

    #[tokio::test]
    async fn configured_failures() {
        let host = MockMediaHost::new("https://media.test").failing_on("bad");
        assert!(host.upload(request("bad")).await.is_err());
        assert!(host.uploads().is_empty());
    }
}
