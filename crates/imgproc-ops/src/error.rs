//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// No image is registered under this name.
    #[error("image '{0}' not found")]
    NotFound(String),

    /// Operation name is not part of the catalog.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Building or reading an image failed.
    #[error(transparent)]
    Image(#[from] imgproc_core::Error),

    /// Loading or saving an image failed.
    #[error(transparent)]
    Io(#[from] imgproc_io::IoError),
}

impl OpsError {
    /// Returns `true` for an unknown registry name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
