//! Line-driven command session over a [`Registry`].

use crate::script::{self, Command, MENU};
use crate::sink::{self, MessageSink};
use anyhow::{Context, Result};
use imgproc_core::Channel;
use imgproc_ops::{Operation, Registry};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Prompt printed before each interactive command.
pub const PROMPT: &str = "Enter Image Operation:";

/// Settings a session starts with.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Directory `load` and `save` paths are resolved against.
    pub source_dir: PathBuf,
    /// Print the operations menu before reading input.
    pub show_menu: bool,
    /// Print [`PROMPT`] before each line.
    pub prompt: bool,
}

impl SessionConfig {
    /// Settings for a terminal user: menu and prompt on.
    pub fn interactive(source_dir: Option<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.unwrap_or_default(),
            show_menu: true,
            prompt: true,
        }
    }

    /// Settings for a script: no menu, no prompt.
    pub fn batch(source_dir: Option<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the registry and routes command results to a sink.
pub struct Session<S: MessageSink> {
    registry: Registry,
    config: SessionConfig,
    sink: S,
    failures: usize,
}

impl<S: MessageSink> Session<S> {
    pub fn new(config: SessionConfig, sink: S) -> Self {
        Self {
            registry: Registry::new(),
            config,
            sink,
            failures: 0,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn source_dir(&self) -> &Path {
        &self.config.source_dir
    }

    /// Number of commands that reported an error so far.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Resolves a command path against the source directory.
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.config.source_dir.join(path)
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Command failures are reported to the sink and do not stop the loop;
    /// only a failure to read `input` is returned.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        if self.config.show_menu {
            self.sink.message(MENU);
        }
        let mut lines = input.lines();
        loop {
            if self.config.prompt {
                self.sink.message(PROMPT);
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command input")?;
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }
        debug!(failures = self.failures, images = self.registry.len(), "session finished");
        Ok(())
    }

    /// Parses and executes one line, reporting any error to the sink.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let result = script::parse_line(line).and_then(|cmd| match cmd {
            Some(cmd) => self.execute(cmd),
            None => Ok(Flow::Continue),
        });
        match result {
            Ok(flow) => flow,
            Err(err) => {
                self.failures += 1;
                self.sink.message(&format!("Error: {err}"));
                Flow::Continue
            }
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, cmd: Command) -> Result<Flow> {
        trace!(?cmd, "session::execute");
        match cmd {
            Command::Load { path, name } => {
                let path = self.resolve(&path);
                self.registry.load(&path, &name)?;
                self.sink
                    .message(&format!("{} has been loaded and named {name}", path.display()));
            }
            Command::Save { path, name } => {
                let path = self.resolve(&path);
                self.registry.save(&path, &name)?;
                self.sink
                    .message(&format!("{name} has been saved as: {}", path.display()));
            }
            Command::Apply { op, source, dest } => {
                self.registry.apply(&op, &source, &dest)?;
                self.sink.message(&describe(&op, &source, &dest));
            }
            Command::SetSource(dir) => {
                self.sink
                    .message(&format!("Source folder has been set to {}", dir.display()));
                self.config.source_dir = dir;
            }
            Command::Info(name) => {
                let image = self.registry.get(&name)?;
                sink::render_image(&mut self.sink, &name, image);
            }
            Command::List => {
                let names = self.registry.names();
                if names.is_empty() {
                    self.sink.message("No images loaded");
                }
                for name in names {
                    self.sink.message(name);
                }
            }
            Command::Help => self.sink.message(MENU),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Status line for a completed operation.
fn describe(op: &Operation, source: &str, dest: &str) -> String {
    let kind = match op {
        Operation::Component(Channel::Red) => "a red component greyscale",
        Operation::Component(Channel::Green) => "a green component greyscale",
        Operation::Component(Channel::Blue) => "a blue component greyscale",
        Operation::Value => "a value component greyscale",
        Operation::Luma => "a luma component greyscale",
        Operation::Intensity => "an intensity component greyscale",
        Operation::Brighten { delta } => {
            return format!(
                "{source} has been saved as a brightened/darkened image by a value of {delta} and named: {dest}"
            );
        }
        Operation::FlipHorizontal => "a horizontally flipped",
        Operation::FlipVertical => "a vertically flipped",
    };
    format!("{source} has been saved as {kind} image named: {dest}")
}
