//! Build-a-new-image-from-an-old-one engine.
//!
//! [`render`] evaluates an [`Operation`] over every output coordinate of a
//! source image. [`apply`] adds the registry lookup and the final store.

use crate::{Operation, OpsResult, Registry};
use imgproc_core::Image;
use tracing::{debug, trace};

/// Renders `op` over `src` into a new image of the same size and max value.
///
/// Pixels are evaluated in row-major order. `src` is never modified.
///
/// # Example
///
/// ```rust
/// use imgproc_core::Image;
/// use imgproc_ops::{render, Operation};
///
/// let src = Image::filled(2, 2, [0.5, 0.25, 0.0], 255).unwrap();
/// let out = render(&src, &Operation::Value).unwrap();
/// assert_eq!(out.pixel_at(1, 1).unwrap(), [0.5, 0.5, 0.5]);
/// ```
pub fn render(src: &Image, op: &Operation) -> OpsResult<Image> {
    let (width, height) = src.dimensions();
    trace!(op = %op, width, height, "engine::render");

    let mut pixels = Vec::with_capacity(src.pixel_count());
    for row in 0..height {
        for col in 0..width {
            pixels.push(op.eval(src, row, col)?);
        }
    }

    Ok(Image::from_pixels(width, height, pixels, src.max_value())?)
}

/// Applies `op` to the image named `source` and stores the result as `dest`.
///
/// `source` and `dest` may be the same name, in which case the source is
/// replaced once the new image is complete.
///
/// # Errors
///
/// Returns [`OpsError::NotFound`](crate::OpsError::NotFound) if `source` is
/// not registered. The registry is unchanged on failure.
pub fn apply(registry: &mut Registry, source: &str, dest: &str, op: &Operation) -> OpsResult<()> {
    let image = render(registry.get(source)?, op)?;
    debug!(op = %op, source, dest, "applied operation");
    registry.put(dest, image);
    Ok(())
}

impl Registry {
    /// Applies `op` to `source`, storing the result as `dest`.
    ///
    /// Method form of [`apply`].
    pub fn apply(&mut self, op: &Operation, source: &str, dest: &str) -> OpsResult<()> {
        apply(self, source, dest, op)
    }

    /// Red channel replicated into all three.
    pub fn red_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Component(imgproc_core::Channel::Red), source, dest)
    }

    /// Green channel replicated into all three.
    pub fn green_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Component(imgproc_core::Channel::Green), source, dest)
    }

    /// Blue channel replicated into all three.
    pub fn blue_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Component(imgproc_core::Channel::Blue), source, dest)
    }

    /// Largest channel replicated into all three.
    pub fn value_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Value, source, dest)
    }

    /// Rec.709 luma replicated into all three.
    pub fn luma_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Luma, source, dest)
    }

    /// Channel mean replicated into all three.
    pub fn intensity_component(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Intensity, source, dest)
    }

    /// Shifts every channel by `delta / 255`, clamped to `[0, 1]`.
    pub fn brighten(&mut self, delta: i32, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::Brighten { delta }, source, dest)
    }

    /// Mirrors left to right.
    pub fn horizontal_flip(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::FlipHorizontal, source, dest)
    }

    /// Mirrors top to bottom.
    pub fn vertical_flip(&mut self, source: &str, dest: &str) -> OpsResult<()> {
        self.apply(&Operation::FlipVertical, source, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    fn ramp(width: u32, height: u32) -> Image {
        let n = (width * height) as usize;
        let pixels = (0..n)
            .map(|i| {
                let v = i as f32 / n as f32;
                [v, 1.0 - v, 0.5]
            })
            .collect();
        Image::from_pixels(width, height, pixels, 200).unwrap()
    }

    #[test]
    fn test_render_keeps_shape_and_max() {
        let src = ramp(4, 3);
        let out = render(&src, &Operation::FlipVertical).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
        assert_eq!(out.max_value(), 200);
        assert_eq!(out.row(0).unwrap(), src.row(2).unwrap());
    }

    #[test]
    fn test_render_leaves_source_intact() {
        let src = ramp(3, 3);
        let before = src.clone();
        let _ = render(&src, &Operation::Brighten { delta: 40 }).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_apply_in_place() {
        let mut registry = Registry::new();
        registry.put("img", ramp(2, 2));
        registry.horizontal_flip("img", "img").unwrap();
        registry.horizontal_flip("img", "img").unwrap();
        assert_eq!(registry.get("img").unwrap(), &ramp(2, 2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_apply_missing_source() {
        let mut registry = Registry::new();
        registry.put("other", ramp(1, 1));
        let err = registry.luma_component("nope", "dest").unwrap_err();
        assert!(matches!(err, OpsError::NotFound(ref n) if n == "nope"));
        assert!(!registry.contains("dest"));
        assert_eq!(registry.len(), 1);
    }
}
