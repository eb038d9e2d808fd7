//! Shared test utilities: PNG fixture writers and directory inspection.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_solid_png(tmp.path(), "dark.png", [10, 10, 10], 4, 4);
//! write_corrupt_png(tmp.path(), "broken.png");
//! assert_eq!(file_names(tmp.path()), vec!["broken.png", "dark.png"]);
//! ```

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture writers
// =========================================================================

/// Write a single-color 8-bit RGB PNG and return its path.
pub fn write_solid_png(dir: &Path, name: &str, rgb: [u8; 3], width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(rgb))
        .save(&path)
        .unwrap();
    path
}

/// Write an 8-bit RGB PNG whose pixels come from `f(x, y)`.
pub fn write_png_with<F>(dir: &Path, name: &str, width: u32, height: u32, f: F) -> PathBuf
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| Rgb(f(x, y)))
        .save(&path)
        .unwrap();
    path
}

/// Write a file with a `.png` name that no decoder accepts.
pub fn write_corrupt_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not a png, just some bytes").unwrap();
    path
}

// =========================================================================
// Inspection
// =========================================================================

/// Sorted names of all entries in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
