//! Destinations for session output.

use imgproc_core::Image;
use std::io::Write;

/// Receives one human-readable line at a time.
pub trait MessageSink {
    /// Delivers a single message. Implementations add their own line ending.
    fn message(&mut self, msg: &str);
}

/// Collects messages in memory.
impl MessageSink for Vec<String> {
    fn message(&mut self, msg: &str) {
        self.push(msg.to_string());
    }
}

/// Writes each message followed by a newline and flushes immediately, so
/// prompts show up before the next line is read.
///
/// Write failures (a closed stdout, a broken pipe) are logged at warn level
/// and otherwise dropped: the session keeps executing commands and input
/// errors remain the only thing that ends it early.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn message(&mut self, msg: &str) {
        // Output errors are logged, never propagated.
        if writeln!(self.inner, "{msg}").and_then(|_| self.inner.flush()).is_err() {
            tracing::warn!("failed to write session output");
        }
    }
}

/// Renders the summary shown by the `info` command.
pub fn render_image(sink: &mut dyn MessageSink, name: &str, image: &Image) {
    sink.message(&format!("Image name - {name}:"));
    sink.message(&format!("Maximum Color Value: {}", image.max_value()));
    sink.message(&format!("Height: {} pixels", image.height()));
    sink.message(&format!("Width: {} pixels", image.width()));
}
