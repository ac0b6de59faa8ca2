//! Error types for imgproc-core operations.
//!
//! The [`Error`] enum covers the two ways an [`Image`](crate::Image) can be
//! misused: building it from a malformed pixel grid, and addressing a pixel
//! outside its bounds.
//!
//! # Usage
//!
//! ```rust
//! use imgproc_core::{Error, Result};
//!
//! fn check(row: u32, col: u32, width: u32, height: u32) -> Result<()> {
//!     if row >= height || col >= width {
//!         return Err(Error::out_of_range(row, col, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0, 0, 1, 1).is_ok());
//! assert!(check(1, 0, 1, 1).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by image construction and pixel access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// Returned when `row >= height` or `col >= width`.
    #[error("pixel (row {row}, col {col}) out of range for image {width}x{height}")]
    OutOfRange {
        /// Requested row
        row: u32,
        /// Requested column
        col: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// The pixel grid handed to a constructor is not a non-empty rectangle.
    #[error("invalid image shape: {0}")]
    InvalidShape(String),
}

impl Error {
    /// Creates an [`Error::OutOfRange`] error.
    #[inline]
    pub fn out_of_range(row: u32, col: u32, width: u32, height: u32) -> Self {
        Self::OutOfRange {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidShape`] error.
    #[inline]
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape(reason.into())
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
