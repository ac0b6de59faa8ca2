//! # imgproc-io
//!
//! Image I/O for imgproc.
//!
//! The only on-disk format is plain-text PPM ("P3"), implemented in [`ppm`].
//! [`read`] and [`write`] are the path-based entry points the rest of the
//! workspace uses.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use imgproc_io::{read, write};
//!
//! let image = read("koala.ppm")?;
//! write("koala-copy.ppm", &image)?;
//! ```
//!
//! # Errors
//!
//! | Variant | When |
//! |---------|------|
//! | [`IoError::NotFound`] | source file cannot be opened |
//! | [`IoError::Truncated`] | input ends before all samples are read |
//! | [`IoError::Malformed`] | numeric token is not a non-negative integer |
//! | [`IoError::IoFailure`] | destination cannot be written |
//! | [`IoError::Image`] | header describes an empty image |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};

use imgproc_core::Image;
use std::path::Path;

/// Reads an image from a P3 file.
///
/// # Errors
///
/// See [`ppm::read`].
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    ppm::read(path)
}

/// Writes an image to a P3 file, replacing any existing file.
///
/// # Errors
///
/// Returns [`IoError::IoFailure`] if the destination cannot be written.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    ppm::write(path, image)
}
