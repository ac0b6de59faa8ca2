//! The catalog of per-pixel operations.
//!
//! Every operation computes one output pixel from the source image and the
//! output coordinate. Nothing reads a neighbouring output pixel, so the
//! engine is free to fill the grid in plain row-major order.
//!
//! | Operation | Command name | Output pixel |
//! |-----------|--------------|--------------|
//! | [`Component`](Operation::Component) | `red-component` etc. | chosen channel, replicated |
//! | [`Value`](Operation::Value) | `value-component` | `max(r, g, b)`, replicated |
//! | [`Luma`](Operation::Luma) | `luma-component` | Rec.709 luma, replicated |
//! | [`Intensity`](Operation::Intensity) | `intensity-component` | `(r + g + b) / 3`, replicated |
//! | [`Brighten`](Operation::Brighten) | `brighten` | `clamp(c + delta / 255, 0, 1)` |
//! | [`FlipHorizontal`](Operation::FlipHorizontal) | `horizontal-flip` | pixel at `(row, width - 1 - col)` |
//! | [`FlipVertical`](Operation::FlipVertical) | `vertical-flip` | pixel at `(height - 1 - row, col)` |

use crate::{OpsError, OpsResult};
use imgproc_core::pixel::{grey, intensity, luminance_rec709, value};
use imgproc_core::{Channel, Error, Image, Rgb};
use std::fmt;

/// Brighten deltas are expressed on this integer scale.
pub const BRIGHTEN_SCALE: f32 = 255.0;

/// One catalog operation together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Replicate one channel into all three.
    Component(Channel),
    /// Replicate the largest channel.
    Value,
    /// Replicate Rec.709 luma.
    Luma,
    /// Replicate the channel mean.
    Intensity,
    /// Shift every channel by `delta / 255`, clamped to `[0, 1]`.
    /// Negative deltas darken.
    Brighten {
        /// Shift on the 0..255 sample scale.
        delta: i32,
    },
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
}

impl Operation {
    /// Every command name accepted by [`Operation::parse`].
    pub const NAMES: [&'static str; 9] = [
        "red-component",
        "green-component",
        "blue-component",
        "value-component",
        "luma-component",
        "intensity-component",
        "brighten",
        "horizontal-flip",
        "vertical-flip",
    ];

    /// Looks up an operation by command name (case-insensitive).
    ///
    /// `delta` is required for `brighten` and ignored otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgproc_core::Channel;
    /// use imgproc_ops::Operation;
    ///
    /// assert_eq!(
    ///     Operation::parse("Red-Component", None).unwrap(),
    ///     Operation::Component(Channel::Red)
    /// );
    /// assert_eq!(
    ///     Operation::parse("brighten", Some(-10)).unwrap(),
    ///     Operation::Brighten { delta: -10 }
    /// );
    /// assert!(Operation::parse("brighten", None).is_err());
    /// assert!(Operation::parse("sepia", None).is_err());
    /// ```
    pub fn parse(name: &str, delta: Option<i32>) -> OpsResult<Self> {
        let op = match name.to_ascii_lowercase().as_str() {
            "red-component" => Operation::Component(Channel::Red),
            "green-component" => Operation::Component(Channel::Green),
            "blue-component" => Operation::Component(Channel::Blue),
            "value-component" => Operation::Value,
            "luma-component" => Operation::Luma,
            "intensity-component" => Operation::Intensity,
            "brighten" => {
                let delta = delta.ok_or_else(|| {
                    OpsError::InvalidParameter("brighten requires a delta".into())
                })?;
                Operation::Brighten { delta }
            }
            "horizontal-flip" => Operation::FlipHorizontal,
            "vertical-flip" => Operation::FlipVertical,
            _ => return Err(OpsError::Unsupported(name.to_string())),
        };
        Ok(op)
    }

    /// Command name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Component(Channel::Red) => "red-component",
            Operation::Component(Channel::Green) => "green-component",
            Operation::Component(Channel::Blue) => "blue-component",
            Operation::Value => "value-component",
            Operation::Luma => "luma-component",
            Operation::Intensity => "intensity-component",
            Operation::Brighten { .. } => "brighten",
            Operation::FlipHorizontal => "horizontal-flip",
            Operation::FlipVertical => "vertical-flip",
        }
    }

    /// Returns `true` if every output pixel has three equal channels.
    pub fn is_greyscale(&self) -> bool {
        matches!(
            self,
            Operation::Component(_) | Operation::Value | Operation::Luma | Operation::Intensity
        )
    }

    /// Computes the output pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(row, col)` lies outside `src`.
    pub fn eval(&self, src: &Image, row: u32, col: u32) -> OpsResult<Rgb> {
        let px = match *self {
            Operation::Component(channel) => grey(channel.of(src.pixel_at(row, col)?)),
            Operation::Value => grey(value(src.pixel_at(row, col)?)),
            Operation::Luma => grey(luminance_rec709(src.pixel_at(row, col)?)),
            Operation::Intensity => grey(intensity(src.pixel_at(row, col)?)),
            Operation::Brighten { delta } => brighten(src.pixel_at(row, col)?, delta),
            Operation::FlipHorizontal => {
                let mirrored = (src.width() - 1)
                    .checked_sub(col)
                    .ok_or_else(|| Error::out_of_range(row, col, src.width(), src.height()))?;
                src.pixel_at(row, mirrored)?
            }
            Operation::FlipVertical => {
                let mirrored = (src.height() - 1)
                    .checked_sub(row)
                    .ok_or_else(|| Error::out_of_range(row, col, src.width(), src.height()))?;
                src.pixel_at(mirrored, col)?
            }
        };
        Ok(px)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Brighten { delta } => write!(f, "brighten({delta:+})"),
            other => f.write_str(other.name()),
        }
    }
}

#[inline]
fn brighten(px: Rgb, delta: i32) -> Rgb {
    let shift = delta as f32 / BRIGHTEN_SCALE;
    px.map(|c| (c + shift).clamp(0.0, 1.0))
}
