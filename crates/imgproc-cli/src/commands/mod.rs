//! CLI command implementations

pub mod apply;
pub mod info;
pub mod run;
pub mod shell;

use anyhow::{Context, Result};
use imgproc_core::Image;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Image> {
    imgproc_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &Image) -> Result<()> {
    imgproc_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Warn when a path does not carry the `.ppm` extension.
///
/// The codec only speaks P3, so this is a hint rather than an error.
pub fn check_extension(path: &Path) {
    if !imgproc_io::ppm::is_ppm_path(path) {
        tracing::warn!(path = %path.display(), "path does not have a .ppm extension");
    }
}
