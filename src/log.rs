use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Log debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::WARN;
        }

        match self.verbose {
            0 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags. The returned
/// guard flushes the log file when dropped, so hold it until `main` returns.
pub fn init(args: &LogArgs) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::builder()
        .with_default_directive(args.level().into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_file(true)
        .with_target(false);

    match args.log_file.as_deref() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open(path)?);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!(e))?;
            Ok(None)
        }
    }
}

fn open(path: &Path) -> anyhow::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Opening log file: {}", path.display()))
}
