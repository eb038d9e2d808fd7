//! Decoder seam: the [`ImageBackend`] trait and its shared types.
//!
//! A backend answers two questions about a PNG file: how large is it
//! ([`identify`](ImageBackend::identify)) and how bright is it on average
//! ([`average_luminance`](ImageBackend::average_luminance)). The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend); tests
//! use the `MockBackend` below so the pipeline can be
//! exercised without encoding real images.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode: {0}")]
    Decode(String),
    #[error("Image has no pixels")]
    Empty,
    #[error("Average luminance is not a number")]
    NotANumber,
}

/// Pixel dimensions as stored in the PNG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Trait for image decoding backends.
pub trait ImageBackend {
    /// Read the image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the image and return its mean BT.709 luminance on the 0–255 scale.
    fn average_luminance(&self, path: &Path) -> Result<f32, BackendError>;
}
