//! The whole run: list → score → rank → rename.
//!
//! Stages run strictly one after another on a single thread. Nothing here is
//! fatal: unreadable directories list as empty, undecodable images are
//! skipped, and failed renames are recorded in the [`RunSummary`].

use crate::config::RunConfig;
use crate::imaging::ImageBackend;
use crate::naming;
use crate::rank;
use crate::rename::{self, RenameOutcome, RenameStatus};
use crate::scan;
use crate::score::{self, ImageRecord, ScoreReport, SkippedImage};
use serde::Serialize;

/// Everything a run found and did.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// The configuration the run was started with.
    pub config: RunConfig,
    /// Number of PNG files listed, scoreable or not.
    pub found: usize,
    /// Digits in every rank prefix of this run.
    pub width: usize,
    /// Scored images in rank order.
    pub ranked: Vec<ImageRecord>,
    pub skipped: Vec<SkippedImage>,
    pub renames: Vec<RenameOutcome>,
}

impl RunSummary {
    fn count(&self, pred: impl Fn(&RenameStatus) -> bool) -> usize {
        self.renames.iter().filter(|o| pred(&o.status)).count()
    }

    /// Renamed on disk, or would be in a dry run.
    pub fn moved(&self) -> usize {
        self.count(|s| matches!(s, RenameStatus::Renamed | RenameStatus::Planned))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, RenameStatus::Unchanged))
    }

    pub fn collisions(&self) -> usize {
        self.count(|s| matches!(s, RenameStatus::Collision))
    }

    pub fn failures(&self) -> usize {
        self.count(|s| matches!(s, RenameStatus::Failed(_)))
    }
}

/// Process `config.dir` with `backend`.
pub fn run(backend: &impl ImageBackend, config: &RunConfig) -> RunSummary {
    let found = scan::list_pngs(&config.dir);
    let ScoreReport { records, skipped } = score::score_all(backend, &found);
    let ranked = rank::rank(records, config.order);
    let plan = rename::plan_renames(&ranked, found.len(), &config.naming);
    let renames = rename::apply_renames(&plan, config.dry_run);

    RunSummary {
        config: config.clone(),
        found: found.len(),
        width: naming::digit_width(found.len(), config.naming.amount_digits_min),
        ranked,
        skipped,
        renames,
    }
}
