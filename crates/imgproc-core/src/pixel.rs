//! Pixel representation and per-pixel channel math.
//!
//! A pixel is a plain `[f32; 3]` triple of normalized red, green and blue
//! channels. The helpers here are the building blocks of the greyscale
//! operations: each reduces a triple to a single scalar which is then
//! replicated with [`grey`].
//!
//! # Example
//!
//! ```
//! use imgproc_core::pixel::{grey, luminance_rec709, value};
//!
//! let px = [0.5, 0.3, 0.2];
//! assert_eq!(value(px), 0.5);
//! let y = luminance_rec709(px);
//! assert_eq!(grey(y), [y, y, y]);
//! ```

use std::fmt;
use std::str::FromStr;

/// An RGB triple with channels normalized to `[0.0, 1.0]`.
pub type Rgb = [f32; 3];

/// Number of channels in a pixel.
pub const CHANNELS: usize = 3;

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Calculate Rec.709 luminance from RGB values.
///
/// # Example
/// ```
/// use imgproc_core::pixel::luminance_rec709;
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// // 0.5 * 0.2126 + 0.3 * 0.7152 + 0.2 * 0.0722 = 0.3353
/// assert!((luma - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luminance_rec709(rgb: Rgb) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// Arithmetic mean of the three channels.
#[inline]
pub fn intensity(rgb: Rgb) -> f32 {
    (rgb[0] + rgb[1] + rgb[2]) / 3.0
}

/// Largest of the three channels.
#[inline]
pub fn value(rgb: Rgb) -> f32 {
    rgb[0].max(rgb[1]).max(rgb[2])
}

/// Replicates a scalar into all three channels.
#[inline]
pub fn grey(v: f32) -> Rgb {
    [v, v, v]
}

/// Returns `true` when all three channels hold the same value.
#[inline]
pub fn is_grey(rgb: Rgb) -> bool {
    rgb[0] == rgb[1] && rgb[1] == rgb[2]
}

/// One of the three color channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red, index 0.
    Red,
    /// Green, index 1.
    Green,
    /// Blue, index 2.
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside an [`Rgb`] triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Lowercase channel name.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Reads this channel out of a pixel.
    #[inline]
    pub fn of(self, rgb: Rgb) -> f32 {
        rgb[self.index()]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            other => Err(format!("unknown channel '{other}'")),
        }
    }
}
