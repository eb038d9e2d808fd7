//! Rename planning and application.
//!
//! Stage 4 of the pipeline. [`plan_renames`] turns ranked records into
//! source → target pairs without touching the disk; [`apply_renames`] carries
//! them out one by one.
//!
//! ## Collisions
//!
//! A target that already exists as some other file is never overwritten. The
//! rename is skipped and reported as [`RenameStatus::Collision`]; the source
//! stays where it is. Sources moved away earlier in the same run free their
//! names, so a dry run reports the same outcomes a real run would produce.
//!
//! Running the tool again on its own output is not a no-op: every name gets a
//! fresh prefix in front of the old one.

use crate::config::NamingOptions;
use crate::naming::{digit_width, new_filename};
use crate::score::{ImageRecord, serialize_lossy};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A single planned move inside the processed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub index: usize,
    #[serde(serialize_with = "serialize_lossy")]
    pub from: PathBuf,
    #[serde(serialize_with = "serialize_lossy")]
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum RenameStatus {
    /// Moved on disk.
    Renamed,
    /// Would be moved; dry run.
    Planned,
    /// Target equals source.
    Unchanged,
    /// Target name is taken by another file.
    Collision,
    /// The filesystem refused the move.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub index: usize,
    #[serde(serialize_with = "serialize_lossy")]
    pub from: PathBuf,
    #[serde(serialize_with = "serialize_lossy")]
    pub to: PathBuf,
    #[serde(flatten)]
    pub status: RenameStatus,
}

/// Compute the target path of every ranked record.
///
/// `found` is the number of files listed in the directory and drives the
/// prefix width.
pub fn plan_renames(
    ranked: &[ImageRecord],
    found: usize,
    options: &NamingOptions,
) -> Vec<PlannedRename> {
    let width = digit_width(found, options.amount_digits_min);
    ranked
        .iter()
        .enumerate()
        .map(|(index, record)| PlannedRename {
            index,
            from: record.original_path.clone(),
            to: record
                .original_path
                .with_file_name(new_filename(record, index, width, options)),
        })
        .collect()
}

/// Tracks which names are taken as renames are applied or simulated.
#[derive(Default)]
struct Occupancy {
    vacated: HashSet<PathBuf>,
    created: HashSet<PathBuf>,
}

impl Occupancy {
    fn is_taken(&self, path: &Path) -> bool {
        self.created.contains(path)
            || (!self.vacated.contains(path) && fs::symlink_metadata(path).is_ok())
    }

    fn record_move(&mut self, from: &Path, to: &Path) {
        self.created.remove(from);
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.created.insert(to.to_path_buf());
    }
}

/// Execute `plan` in order. With `dry_run` nothing on disk changes.
pub fn apply_renames(plan: &[PlannedRename], dry_run: bool) -> Vec<RenameOutcome> {
    let mut occupancy = Occupancy::default();

    plan.iter()
        .map(|op| {
            let status = if op.to == op.from {
                RenameStatus::Unchanged
            } else if occupancy.is_taken(&op.to) {
                RenameStatus::Collision
            } else if dry_run {
                occupancy.record_move(&op.from, &op.to);
                RenameStatus::Planned
            } else {
                match fs::rename(&op.from, &op.to) {
                    Ok(()) => {
                        occupancy.record_move(&op.from, &op.to);
                        RenameStatus::Renamed
                    }
                    Err(e) => RenameStatus::Failed(e.to_string()),
                }
            };
            RenameOutcome {
                index: op.index,
                from: op.from.clone(),
                to: op.to.clone(),
                status,
            }
        })
        .collect()
}
