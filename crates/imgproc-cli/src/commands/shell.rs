//! Interactive command shell on stdin/stdout.

use crate::ShellArgs;
use crate::session::{Session, SessionConfig};
use crate::sink::WriterSink;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;

pub fn run(args: ShellArgs) -> Result<()> {
    let config = SessionConfig::interactive(args.source);
    let mut session = Session::new(config, WriterSink::new(io::stdout().lock()));
    debug!(source = %session.source_dir().display(), "starting shell");

    session.run(io::stdin().lock())?;

    session
        .into_sink()
        .into_inner()
        .flush()
        .context("Failed to flush stdout")
}
