//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Found 4 PNG files in /home/me/shots
//! Skipped junk.png: Failed to decode: ...
//! 0 a.png → 0_a.png (luminance 10.00)
//! 1 b.png → 1_b.png (luminance 10.00)
//! 2 c.png → 2_c.png (luminance 200.00)
//!     warning: 2_c.png already exists, not renamed
//! Renamed 2 of 4 files (1 unreadable, 1 collision, 0 failed)
//! ```
//!
//! Each rename line starts with the rank, padded to the same width as the
//! prefix of the new name.
//!
//! A dry run prints the same listing, and its summary line starts with
//! `Dry run: would rename`.
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability; [`print_run_output`] writes them all to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::naming::rank_prefix;
use crate::pipeline::RunSummary;
use crate::rename::{RenameOutcome, RenameStatus};
use crate::score::SkippedImage;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Header line naming the processed directory.
pub fn format_scan_output(summary: &RunSummary) -> Vec<String> {
    vec![format!(
        "Found {} in {}",
        plural(summary.found, "PNG file", "PNG files"),
        summary.config.dir.display()
    )]
}

/// One line per image that could not be scored.
pub fn format_skipped(skipped: &[SkippedImage]) -> Vec<String> {
    skipped
        .iter()
        .map(|s| format!("Skipped {}: {}", display_name(&s.path), s.reason))
        .collect()
}

/// Rename line plus an optional warning line for a single outcome.
///
/// `width` is the prefix width of the run.
pub fn format_rename(
    outcome: &RenameOutcome,
    width: usize,
    luminance: Option<f32>,
) -> Vec<String> {
    let rank = rank_prefix(outcome.index, width);
    let from = display_name(&outcome.from);
    let to = display_name(&outcome.to);
    let detail = luminance
        .map(|l| format!(" (luminance {l:.2})"))
        .unwrap_or_default();

    let mut lines = Vec::new();
    match &outcome.status {
        RenameStatus::Unchanged => lines.push(format!("{rank} {from} unchanged{detail}")),
        status => {
            lines.push(format!("{rank} {from} \u{2192} {to}{detail}"));
            match status {
                RenameStatus::Collision => lines.push(format!(
                    "{}warning: {to} already exists, not renamed",
                    indent(1)
                )),
                RenameStatus::Failed(reason) => {
                    lines.push(format!("{}warning: rename failed: {reason}", indent(1)))
                }
                _ => {}
            }
        }
    }
    lines
}

/// All rename lines in rank order.
pub fn format_renames(summary: &RunSummary) -> Vec<String> {
    summary
        .renames
        .iter()
        .flat_map(|o| {
            format_rename(
                o,
                summary.width,
                summary.ranked.get(o.index).map(|r| r.luminance),
            )
        })
        .collect()
}

/// Closing tally.
pub fn format_summary(summary: &RunSummary) -> String {
    let verb = if summary.config.dry_run {
        "Dry run: would rename"
    } else {
        "Renamed"
    };
    format!(
        "{verb} {} of {} ({} unreadable, {}, {} failed)",
        summary.moved(),
        plural(summary.found, "file", "files"),
        summary.skipped.len(),
        plural(summary.collisions(), "collision", "collisions"),
        summary.failures(),
    )
}

/// Every section of a run, in display order.
pub fn format_run_output(summary: &RunSummary) -> Vec<String> {
    let mut lines = format_scan_output(summary);
    lines.extend(format_skipped(&summary.skipped));
    lines.extend(format_renames(summary));
    lines.push(format_summary(summary));
    lines
}

pub fn print_run_output(summary: &RunSummary) {
    for line in format_run_output(summary) {
        println!("{}", line);
    }
}
