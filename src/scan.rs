//! Directory listing.
//!
//! Stage 1 of the pipeline. Lists the PNG files directly inside a directory:
//!
//! - regular files only, symlinks judged by their target (subdirectories are
//!   never descended into)
//! - names starting with `.` are hidden and skipped
//! - the name must end in `.png` exactly; `.PNG` does not match
//!
//! Entries come back sorted by filename. A directory that does not exist or
//! cannot be read yields an empty listing rather than an error.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PNG_SUFFIX: &[u8] = b".png";

/// Whether a bare filename passes the PNG selection rules.
pub fn is_png_name(name: &std::ffi::OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    !bytes.starts_with(b".") && bytes.ends_with(PNG_SUFFIX)
}

/// List the PNG files in `dir`, sorted by filename.
pub fn list_pngs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_png_name(e.file_name()))
        .map(|e| e.into_path())
        .collect()
}
