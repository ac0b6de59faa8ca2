//! Image buffer type.
//!
//! An [`Image`] is an immutable, row-major grid of [`Rgb`] triples together
//! with the declared maximum channel value of the file it came from.
//!
//! # Memory Layout
//!
//! Pixels are stored top-to-bottom, left-to-right in one contiguous buffer:
//!
//! ```text
//! [RGB RGB RGB ...]  <- row 0
//! [RGB RGB RGB ...]  <- row 1
//! ...
//! ```
//!
//! # Construction
//!
//! Every constructor validates the shape, so an `Image` that exists always
//! satisfies `width > 0`, `height > 0` and `pixels == width * height`:
//!
//! ```rust
//! use imgproc_core::Image;
//!
//! let img = Image::from_rows(
//!     vec![
//!         vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
//!         vec![[0.5, 0.5, 0.5], [0.2, 0.4, 0.6]],
//!     ],
//!     255,
//! ).unwrap();
//!
//! assert_eq!(img.dimensions(), (2, 2));
//! assert_eq!(img.pixel_at(1, 1).unwrap(), [0.2, 0.4, 0.6]);
//! assert!(Image::from_rows(vec![], 255).is_err());
//! ```
//!
//! There are no mutating methods. Operations build a new image from an old one.

use crate::pixel::{CHANNELS, Rgb};
use crate::{Error, Result};
use std::fmt;

/// Owned, immutable RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Row-major pixel triples, `width * height` entries
    pixels: Vec<Rgb>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
    /// Declared maximum channel value (usually 255)
    max_value: u32,
}

impl Image {
    /// Creates an image from a grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if there are no rows, the first row is
    /// empty, or any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<Rgb>>, max_value: u32) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::invalid_shape(format!(
                "image must have at least one row and column, got {width}x{height}"
            )));
        }

        let mut pixels = Vec::with_capacity(width * height);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::invalid_shape(format!(
                    "row {r} has {} pixels, expected {width}",
                    row.len()
                )));
            }
            pixels.extend(row);
        }

        Ok(Self {
            pixels,
            width: to_u32(width, "width")?,
            height: to_u32(height, "height")?,
            max_value,
        })
    }

    /// Creates an image from row-major pixel triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>, max_value: u32) -> Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::invalid_shape(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            max_value,
        })
    }

    /// Creates an image from interleaved `[R G B R G B ...]` channel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if either dimension is zero or
    /// `data.len() != width * height * 3`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use imgproc_core::Image;
    ///
    /// let img = Image::from_data(2, 1, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5], 255).unwrap();
    /// assert_eq!(img.pixel_at(0, 1).unwrap(), [0.3, 0.4, 0.5]);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<f32>, max_value: u32) -> Result<Self> {
        let expected = checked_pixel_count(width, height)? * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_shape(format!(
                "expected {expected} channel values for {width}x{height}, got {}",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
            max_value,
        })
    }

    /// Creates an image where every pixel is `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidShape`] if either dimension is zero.
    pub fn filled(width: u32, height: u32, rgb: Rgb, max_value: u32) -> Result<Self> {
        let count = checked_pixel_count(width, height)?;
        Ok(Self {
            pixels: vec![rgb; count],
            width,
            height,
            max_value,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the declared maximum channel value.
    #[inline]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= height` or `col >= width`.
    #[inline]
    pub fn pixel_at(&self, row: u32, col: u32) -> Result<Rgb> {
        if row >= self.height || col >= self.width {
            return Err(Error::out_of_range(row, col, self.width, self.height));
        }
        Ok(self.pixels[self.index(row, col)])
    }

    /// Returns one row of pixels, or `None` past the last row.
    pub fn row(&self, row: u32) -> Option<&[Rgb]> {
        if row >= self.height {
            return None;
        }
        let start = self.index(row, 0);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Returns all pixels in row-major order.
    #[inline]
    pub fn data(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterates over all pixels in row-major order as `(row, col, rgb)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, px)| ((i / width) as u32, (i % width) as u32, *px))
    }

    /// Returns a summary of the image header.
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
            max_value: self.max_value,
        }
    }

    /// Compares two images channel by channel with an absolute tolerance.
    ///
    /// Dimensions and max value must match exactly.
    pub fn approx_eq(&self, other: &Image, epsilon: f32) -> bool {
        self.info() == other.info()
            && self
                .pixels
                .iter()
                .zip(&other.pixels)
                .all(|(a, b)| a.iter().zip(b).all(|(x, y)| (x - y).abs() <= epsilon))
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

/// Header-level description of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Declared maximum channel value
    pub max_value: u32,
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}, max value {}",
            self.width, self.height, self.max_value
        )
    }
}

fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_shape(format!(
            "dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_shape(format!("{width}x{height} overflows")))
}

fn to_u32(n: usize, what: &str) -> Result<u32> {
    u32::try_from(n).map_err(|_| Error::invalid_shape(format!("{what} {n} exceeds u32")))
}
