//! Run configuration.
//!
//! A [`RunConfig`] is assembled once from the command line and then only
//! read. There is no config file and nothing is persisted between runs.
//!
//! ## Options
//!
//! ```text
//! dir                  directory to process (default: current directory)
//! order                ascending | descending        (-d, --desc)
//! numeric_only         name is only the rank prefix  (-n, --numeric_only)
//! append_luminance     add brightness percent        (-l, --append_luminance)
//! append_dimensions    add WxH                       (-p, --append_px_wid_and_hgt)
//! amount_digits_min    minimum prefix width, def. 1  (-a, --amount_digits_min)
//! dry_run              plan only, rename nothing     (--dry-run)
//! ```

use crate::rank::SortOrder;
use crate::score::serialize_lossy;
use serde::Serialize;
use std::path::PathBuf;

/// How new filenames are put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamingOptions {
    /// Replace the original stem with nothing but the rank prefix.
    pub numeric_only: bool,
    /// Append the three-digit brightness percentage.
    pub append_luminance: bool,
    /// Append `WIDTHxHEIGHT`.
    pub append_dimensions: bool,
    /// Lower bound for the zero-padded prefix width.
    pub amount_digits_min: u8,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            numeric_only: false,
            append_luminance: false,
            append_dimensions: false,
            amount_digits_min: 1,
        }
    }
}

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    #[serde(serialize_with = "serialize_lossy")]
    pub dir: PathBuf,
    pub order: SortOrder,
    pub naming: NamingOptions,
    pub dry_run: bool,
}

impl RunConfig {
    /// Defaults for processing `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            order: SortOrder::default(),
            naming: NamingOptions::default(),
            dry_run: false,
        }
    }
}
