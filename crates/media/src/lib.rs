//! Image pipeline for the gallery: compression to WebP and upload to the
//! remote media host.

pub mod cloudinary;
pub mod compress;
pub mod error;
pub mod host;
pub mod mock;

pub use cloudinary::{CloudinaryConfig, CloudinaryHost, SignatureAlgorithm};
pub use compress::{compress_to_webp, compress_to_webp_blocking, CompressedImage};
pub use error::MediaError;
pub use host::{MediaHost, UploadRequest, UploadedImage};
pub use mock::MockMediaHost;
