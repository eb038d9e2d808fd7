//! Image inspection: pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions`, header only |
//! | **Decode** | `image` crate PNG decoder |
//! | **Luminance** | BT.709 weighted mean over all pixels |
//!
//! The module is split into:
//! - **Luminance**: pure math (unit testable)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod luminance;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use luminance::brightness_percent;
pub use rust_backend::RustBackend;
