//! Plain-text PPM ("P3") format support.
//!
//! # Layout
//!
//! ```text
//! P3
//! <width> <height>
//! <max-value>
//! <r0>
//! <g0>
//! <b0>
//! ...
//! ```
//!
//! Tokens may be separated by any whitespace or commas. Lines whose first
//! character is `#` are dropped before tokenizing.
//!
//! # Channel scale
//!
//! Channels are normalized by dividing by [`CHANNEL_SCALE`] on read and
//! denormalized by multiplying by it on write. The header's max value is
//! carried through unchanged but is *not* used for scaling, so a file declaring
//! `max_value = 15` still has its samples divided by 255. Files produced by
//! other tools with a non-255 max value therefore round-trip through this
//! codec byte-for-byte but are not interpreted the way a netpbm viewer would.

use crate::{IoError, IoResult};
use imgproc_core::{Image, Rgb};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Format marker expected as the first token.
pub const PPM_MAGIC: &str = "P3";

/// Fixed divisor/multiplier between integer samples and normalized channels.
pub const CHANNEL_SCALE: f32 = 255.0;

/// Header tokens: marker, width, height, max value.
const HEADER_TOKENS: usize = 4;

/// Reads a P3 file.
///
/// # Errors
///
/// - [`IoError::NotFound`] if the file cannot be opened
/// - [`IoError::Truncated`] if the file ends early
/// - [`IoError::Malformed`] if a numeric field is not a non-negative integer
/// - [`IoError::Image`] if the header declares a zero dimension
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    trace!(path = %path.display(), "ppm::read");

    let mut file = File::open(path).map_err(|source| IoError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(&mut file)
}

/// Reads a P3 image from any byte stream.
pub fn read_from<R: Read>(reader: &mut R) -> IoResult<Image> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    decode(&text)
}

/// Decodes P3 text into an [`Image`].
///
/// # Example
///
/// ```rust
/// use imgproc_io::ppm::decode;
///
/// let img = decode("P3\n# comment\n1 1\n255\n255 0 51\n").unwrap();
/// assert_eq!(img.dimensions(), (1, 1));
/// assert_eq!(img.pixel_at(0, 0).unwrap(), [1.0, 0.0, 0.2]);
/// ```
pub fn decode(text: &str) -> IoResult<Image> {
    let mut tokens = Tokens::new(text);

    let marker = tokens.next_token(HEADER_TOKENS)?;
    if marker != PPM_MAGIC {
        warn!(marker, expected = PPM_MAGIC, "unexpected format marker, decoding anyway");
    }
    let width = tokens.next_u32(HEADER_TOKENS)?;
    let height = tokens.next_u32(HEADER_TOKENS)?;
    let max_value = tokens.next_u32(HEADER_TOKENS)?;
    debug!(width, height, max_value, "decoded P3 header");

    let count = width as usize * height as usize;
    let expected = HEADER_TOKENS.saturating_add(count.saturating_mul(3));

    // Cap the up-front reservation: the header is untrusted.
    let mut pixels: Vec<Rgb> = Vec::with_capacity(count.min(1 << 20));
    for _ in 0..count {
        let r = tokens.next_u32(expected)?;
        let g = tokens.next_u32(expected)?;
        let b = tokens.next_u32(expected)?;
        pixels.push([normalize(r), normalize(g), normalize(b)]);
    }

    let trailing = tokens.remaining();
    if trailing > 0 {
        debug!(trailing, "ignoring tokens after last pixel");
    }

    Ok(Image::from_pixels(width, height, pixels, max_value)?)
}

/// Writes an image as a P3 file.
///
/// # Errors
///
/// Returns [`IoError::IoFailure`] if the file cannot be created or written.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), "ppm::write");

    let failure = |source: std::io::Error| IoError::IoFailure {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(failure)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(encode(image).as_bytes()).map_err(failure)?;
    writer.flush().map_err(failure)?;
    Ok(())
}

/// Writes P3 text for `image` to any byte sink.
///
/// Sink failures surface as [`IoError::Io`]. Only the path-based [`write`]
/// reports [`IoError::IoFailure`], since it has a destination path to name.
pub fn write_to<W: Write>(writer: &mut W, image: &Image) -> IoResult<()> {
    writer.write_all(encode(image).as_bytes())?;
    Ok(())
}

/// Encodes an image as P3 text, one channel value per line.
///
/// # Example
///
/// ```rust
/// use imgproc_core::Image;
/// use imgproc_io::ppm::encode;
///
/// let img = Image::filled(1, 1, [1.0, 0.0, 0.2], 255).unwrap();
/// assert_eq!(encode(&img), "P3\n1 1\n255\n255\n0\n51\n");
/// ```
pub fn encode(image: &Image) -> String {
    // Three short lines per pixel; four bytes each covers "255\n".
    let mut out = String::with_capacity(32 + image.pixel_count() * 3 * 4);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{PPM_MAGIC}");
    let _ = writeln!(out, "{} {}", image.width(), image.height());
    let _ = writeln!(out, "{}", image.max_value());
    for px in image.data() {
        for &c in px {
            let _ = writeln!(out, "{}", denormalize(c));
        }
    }
    out
}

/// Returns `true` if the path has a `.ppm` extension (any case).
pub fn is_ppm_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ppm"))
}

#[inline]
fn normalize(sample: u32) -> f32 {
    sample as f32 / CHANNEL_SCALE
}

/// Float-to-int `as` saturates, so NaN and negatives land on 0.
#[inline]
fn denormalize(channel: f32) -> u32 {
    (channel * CHANNEL_SCALE).round() as u32
}

/// Token stream over the non-comment lines of a P3 document.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = &'a str> + 'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
            .filter(|tok| !tok.is_empty());
        Self {
            inner: Box::new(inner),
            consumed: 0,
        }
    }

    /// `expected` is the total token count reported if the stream runs dry.
    fn next_token(&mut self, expected: usize) -> IoResult<&'a str> {
        match self.inner.next() {
            Some(tok) => {
                self.consumed += 1;
                Ok(tok)
            }
            None => Err(IoError::Truncated {
                expected,
                found: self.consumed,
            }),
        }
    }

    fn next_u32(&mut self, expected: usize) -> IoResult<u32> {
        let tok = self.next_token(expected)?;
        tok.parse::<u32>().map_err(|e| IoError::Malformed {
            token: tok.to_string(),
            reason: e.to_string(),
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decode_skips_comments_and_commas() {
        let text = "# made by hand\nP3\n# size\n2,1\n255\n0 0 0\n5,10,20\n";
        let img = decode(text).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.max_value(), 255);
        assert_eq!(img.pixel_at(0, 0).unwrap(), [0.0, 0.0, 0.0]);
        let px = img.pixel_at(0, 1).unwrap();
        assert_relative_eq!(px[0], 5.0 / 255.0);
        assert_relative_eq!(px[1], 10.0 / 255.0);
        assert_relative_eq!(px[2], 20.0 / 255.0);
    }

    #[test]
    fn decode_tolerates_wrong_marker() {
        let img = decode("P6\n1 1\n255\n1 2 3\n").unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn decode_ignores_declared_max_for_scaling() {
        let img = decode("P3\n1 1\n15\n15 15 15\n").unwrap();
        assert_eq!(img.max_value(), 15);
        assert_relative_eq!(img.pixel_at(0, 0).unwrap()[0], 15.0 / 255.0);
    }

    #[test]
    fn decode_truncated_header() {
        let err = decode("P3\n4").unwrap_err();
        assert!(matches!(err, IoError::Truncated { expected: 4, found: 2 }));
        assert!(decode("").unwrap_err().is_truncated());
    }

    #[test]
    fn decode_truncated_pixels() {
        let err = decode("P3\n2 1\n255\n1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(err, IoError::Truncated { expected: 10, found: 9 }));
    }

    #[test]
    fn decode_malformed_token() {
        let err = decode("P3\n1 1\n255\n1 -2 3\n").unwrap_err();
        match err {
            IoError::Malformed { token, .. } => assert_eq!(token, "-2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_zero_dimension() {
        let err = decode("P3\n0 3\n255\n").unwrap_err();
        assert!(matches!(err, IoError::Image(imgproc_core::Error::InvalidShape(_))));
    }

    #[test]
    fn decode_ignores_trailing_tokens() {
        let img = decode("P3\n1 1\n255\n1 2 3 4 5 6\n").unwrap();
        assert_eq!(img.pixel_count(), 1);
    }

    #[test]
    fn encode_layout() {
        let img = Image::from_rows(vec![vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.2]]], 255).unwrap();
        assert_eq!(encode(&img), "P3\n2 1\n255\n0\n0\n0\n255\n128\n51\n");
    }

    #[test]
    fn encode_multi_digit_header() {
        let img = Image::filled(12, 3, [0.0; 3], 1023).unwrap();
        let text = encode(&img);
        assert!(text.starts_with("P3\n12 3\n1023\n0\n"));
        assert_eq!(text.lines().count(), 3 + 12 * 3 * 3);
    }

    #[test]
    fn write_to_failing_sink_is_io() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let img = Image::filled(1, 1, [0.5; 3], 255).unwrap();
        let err = write_to(&mut Broken, &img).unwrap_err();
        assert!(matches!(err, IoError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn encode_rounds_to_nearest() {
        let img = Image::filled(1, 1, [10.4 / 255.0, 10.6 / 255.0, 0.0], 255).unwrap();
        assert!(encode(&img).ends_with("\n10\n11\n0\n"));
    }

    #[test]
    fn denormalize_saturates() {
        assert_eq!(denormalize(-0.5), 0);
        assert_eq!(denormalize(f32::NAN), 0);
        assert_eq!(denormalize(1.0), 255);
    }

    #[test]
    fn write_to_and_read_from() {
        let img = Image::from_data(1, 2, vec![0.2, 0.4, 0.6, 0.8, 1.0, 0.0], 255).unwrap();
        let mut buf = Vec::new();
        write_to(&mut buf, &img).unwrap();
        let back = read_from(&mut buf.as_slice()).unwrap();
        assert!(back.approx_eq(&img, 1.0 / 255.0));
    }

    #[test]
    fn ppm_extension() {
        assert!(is_ppm_path("a/b/koala.ppm"));
        assert!(is_ppm_path("KOALA.PPM"));
        assert!(!is_ppm_path("koala.png"));
        assert!(!is_ppm_path("koala"));
    }
}
