//! One-shot operation: load, transform, save.

use crate::ApplyArgs;
use anyhow::{Context, Result};
use imgproc_ops::{Operation, render};
use tracing::{info, trace};

pub fn run(args: ApplyArgs, verbose: u8) -> Result<()> {
    trace!(op = %args.operation, input = %args.input.display(), "apply::run");

    let op = Operation::parse(&args.operation, args.delta)
        .with_context(|| format!("Invalid operation '{}'", args.operation))?;
    super::check_extension(&args.output);

    let image = super::load_image(&args.input)?;
    let output = render(&image, &op).with_context(|| format!("Failed to apply {op}"))?;
    super::save_image(&args.output, &output)?;

    info!(op = %op, info = %output.info(), "applied");
    if verbose > 0 {
        println!(
            "{} -> {} ({op})",
            args.input.display(),
            args.output.display()
        );
    }
    Ok(())
}
