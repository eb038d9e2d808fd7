//! Pure Rust decoding backend.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only) |
//! | Decode | `image::ImageReader` (pure Rust PNG decoder) |
//! | Luminance | [`luminance::average_luminance`](super::luminance::average_luminance) over RGB samples |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::luminance;
use image::{ColorType, DynamicImage, ImageError, ImageReader};
use std::path::Path;

/// Backend built on the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode a PNG from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .decode()
        .map_err(|e| backend_error(path, e))
}

/// Keep I/O failures distinguishable from undecodable content.
fn backend_error(path: &Path, err: ImageError) -> BackendError {
    match err {
        ImageError::IoError(e) => BackendError::Io(e),
        e => BackendError::Decode(format!("{}: {}", path.display(), e)),
    }
}

/// True when every channel of `color` is stored in a single byte.
fn is_eight_bit(color: ColorType) -> bool {
    color.bytes_per_pixel() == color.channel_count()
}

/// Mean luminance of a decoded image on the 0–255 scale.
///
/// Alpha is ignored and grayscale is expanded to RGB. Deeper images are
/// normalised through `f32` so they compare directly against 8-bit ones.
pub fn image_luminance(img: &DynamicImage) -> f32 {
    let pixel_count = img.width() as u64 * img.height() as u64;
    if is_eight_bit(img.color()) {
        let rgb = img.to_rgb8();
        luminance::average_luminance(rgb.pixels().map(|p| p.0.map(f32::from)), pixel_count)
    } else {
        let rgb = img.to_rgb32f();
        luminance::average_luminance(rgb.pixels().map(|p| p.0.map(|c| c * 255.0)), pixel_count)
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            image::image_dimensions(path).map_err(|e| backend_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn average_luminance(&self, path: &Path) -> Result<f32, BackendError> {
        let img = load_image(path)?;
        if img.width() == 0 || img.height() == 0 {
            return Err(BackendError::Empty);
        }
        let value = image_luminance(&img);
        if value.is_nan() {
            return Err(BackendError::NotANumber);
        }
        Ok(value)
    }
}
