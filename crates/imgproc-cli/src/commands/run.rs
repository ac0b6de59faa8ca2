//! Script runner: executes a file of session commands.

use crate::RunArgs;
use crate::session::{Session, SessionConfig};
use crate::sink::WriterSink;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{info, trace};

pub fn run(args: RunArgs) -> Result<()> {
    trace!(script = %args.script.display(), "run::run");

    let file = File::open(&args.script)
        .with_context(|| format!("Failed to open script: {}", args.script.display()))?;

    let config = SessionConfig::batch(args.source);
    let mut session = Session::new(config, WriterSink::new(io::stdout().lock()));
    session.run(BufReader::new(file))?;

    let failed = session.failures();
    info!(
        script = %args.script.display(),
        images = session.registry().len(),
        failed,
        "script complete"
    );

    if failed > 0 {
        bail!("{failed} command(s) failed in {}", args.script.display());
    }
    Ok(())
}
