//! Luminance scoring.
//!
//! Stage 2 of the pipeline. Each listed file is identified (header only) and
//! decoded for its average luminance. Files that fail either step are not
//! fatal: they are dropped from the record list, left untouched on disk, and
//! reported back as [`SkippedImage`]s so the caller can show them.

use crate::imaging::{BackendError, ImageBackend};
use serde::{Serialize, Serializer};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Serialize an OS string or path as (possibly lossy) UTF-8 text.
///
/// JSON has no place for raw bytes; names on disk are never built from this.
pub(crate) fn serialize_lossy<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<OsStr>,
    S: Serializer,
{
    serializer.serialize_str(&value.as_ref().to_string_lossy())
}

/// One successfully scored PNG.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRecord {
    #[serde(serialize_with = "serialize_lossy")]
    pub original_path: PathBuf,
    /// Bare filename, byte for byte as listed.
    #[serde(serialize_with = "serialize_lossy")]
    pub filename: OsString,
    pub luminance: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageRecord {
    /// Filename with its trailing `.png` removed.
    pub fn stem(&self) -> &OsStr {
        Path::new(&self.filename)
            .file_stem()
            .unwrap_or(self.filename.as_os_str())
    }
}

/// A listed file that could not be scored.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedImage {
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    pub reason: String,
}

/// Records in listing order plus everything that was skipped.
#[derive(Debug, Default, Serialize)]
pub struct ScoreReport {
    pub records: Vec<ImageRecord>,
    pub skipped: Vec<SkippedImage>,
}

fn filename_of(path: &Path) -> OsString {
    path.file_name().map(OsStr::to_os_string).unwrap_or_default()
}

/// Score a single file.
pub fn score_image(backend: &impl ImageBackend, path: &Path) -> Result<ImageRecord, BackendError> {
    let dims = backend.identify(path)?;
    if dims.pixel_count() == 0 {
        return Err(BackendError::Empty);
    }
    let luminance = backend.average_luminance(path)?;
    if luminance.is_nan() {
        return Err(BackendError::NotANumber);
    }
    Ok(ImageRecord {
        original_path: path.to_path_buf(),
        filename: filename_of(path),
        luminance,
        width: Some(dims.width),
        height: Some(dims.height),
    })
}

/// Score every path, keeping listing order.
pub fn score_all(backend: &impl ImageBackend, paths: &[PathBuf]) -> ScoreReport {
    let mut report = ScoreReport::default();
    for path in paths {
        match score_image(backend, path) {
            Ok(record) => report.records.push(record),
            Err(e) => report.skipped.push(SkippedImage {
                path: path.clone(),
                reason: e.to_string(),
            }),
        }
    }
    report
}
