//! # imgproc-core
//!
//! Core types for imgproc.
//!
//! - [`Image`] - Immutable row-major RGB image with a declared max value
//! - [`Rgb`], [`Channel`] - Pixel triple and channel selector
//! - [`Error`], [`Result`] - Shape and bounds errors
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace
//! builds on it:
//!
//! ```text
//! imgproc-core (this crate)
//!    ^
//!    |
//!    +-- imgproc-io  (P3 text codec)
//!    +-- imgproc-ops (registry and operation engine)
//!    +-- imgproc-cli (command session and binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{Image, ImageInfo};
pub use pixel::{Channel, Rgb, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};

/// Prelude module for convenient imports.
///
/// ```
/// use imgproc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, ImageInfo};
    pub use crate::pixel::{Channel, Rgb, grey, intensity, luminance_rec709, value};
}
