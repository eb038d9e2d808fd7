//! # lspng
//!
//! Rename the PNG files of a directory in order of how bright they are.
//! Every image gets a zero-padded rank prefix (`0_dusk.png`, `1_noon.png`, …),
//! optionally followed by a brightness percentage and its pixel dimensions.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan     directory  →  PNG paths         (sorted by filename)
//! 2. Score    PNG paths  →  ImageRecords      (BT.709 mean luminance, size)
//! 3. Rank     records    →  ordered records   (luminance, then filename)
//! 4. Rename   records    →  moves on disk     (prefix + optional suffixes)
//! ```
//!
//! The stages run once, in order, on a single thread. Each one is a plain
//! function over the previous stage's output, so everything except the final
//! rename can be tested without touching real images.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists `*.png` regular files in one directory |
//! | [`score`] | Stage 2: builds [`score::ImageRecord`]s, collects unreadable files |
//! | [`rank`] | Stage 3: luminance ordering with a filename tie-break |
//! | [`rename`] | Stage 4: rename plan and its application, collision checks |
//! | [`naming`] | Prefix width, zero padding, filename suffixes |
//! | [`imaging`] | Decoder seam: header-only identify, PNG decoding, luminance math |
//! | [`config`] | Immutable run configuration |
//! | [`pipeline`] | Runs the four stages and summarises the result |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Unreadable Images Are Skipped, Not Fatal
//!
//! A file that fails to decode keeps its name and drops out of the ranking.
//! It still counts towards the prefix width, and it is listed in the run
//! output so the skip is visible.
//!
//! ## No Silent Overwrites
//!
//! A rename whose target already exists is skipped and reported. Sources
//! that moved away earlier in the run free their names for later targets.
//!
//! ## Brightness Percentage
//!
//! The optional percentage suffix is
//! `100 - floor(((255 - L) / ((255 + L) / 2) * 100) / 2)`: black is `000`,
//! white is `100`. It is kept as-is for compatibility with names produced by
//! earlier versions.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod rename;
pub mod scan;
pub mod score;

#[cfg(test)]
pub(crate) mod test_helpers;
