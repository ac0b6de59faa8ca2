//! imgproc - command-driven PPM image processing
//!
//! Loads plain-text PPM images into named slots, runs channel, greyscale,
//! brightness and flip operations on them, and saves the results.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;
mod script;
mod session;
mod sink;

#[derive(Parser)]
#[command(name = "imgproc")]
#[command(author, version, about = "Command-driven PPM image processing")]
#[command(long_about = "
Loads plain-text PPM (P3) images into named slots and runs channel,
greyscale, brightness and flip operations on them.

Examples:
  imgproc shell --source res/            # Interactive session
  imgproc run edits.txt                  # Execute a command script
  imgproc apply luma-component koala.ppm -o koala-luma.ppm
  imgproc apply brighten koala.ppm -o bright.ppm --delta 25
  imgproc info koala.ppm                 # Show dimensions and max value
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive command session on stdin
    #[command(visible_alias = "sh")]
    Shell(ShellArgs),

    /// Execute a command script
    Run(RunArgs),

    /// Apply a single operation to a file
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the `shell` command.
#[derive(Args)]
struct ShellArgs {
    /// Directory load/save paths are resolved against
    #[arg(short, long)]
    source: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Args)]
struct RunArgs {
    /// Script with one command per line
    script: PathBuf,

    /// Directory load/save paths are resolved against
    #[arg(short, long)]
    source: Option<PathBuf>,
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    /// Operation name (red-component, luma-component, brighten, horizontal-flip, ...)
    operation: String,

    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Brightness shift on the 0..255 scale (brighten only)
    #[arg(short, long, allow_hyphen_values = true)]
    delta: Option<i32>,
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Shell(args) => commands::shell::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
///
/// The returned guard must live until exit so buffered file logs get flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
