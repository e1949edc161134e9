#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use clap::Parser;
use profile_compiler::{
    compile_all,
    compiler::{FailurePolicy, OutputLayout},
    log::{self, LogArgs},
    CompileOptions, DEFAULT_EXTENSION,
};

/// Compile text-format profiles into binary profiles.
#[derive(Debug, Parser)]
#[command(name = "compile")]
struct Args {
    /// Directory searched recursively for text profiles.
    #[arg(short, long, env = "PROFILE_INPUT_DIR", default_value = "text_profiles")]
    input: PathBuf,

    /// Existing directory that receives the binary profiles.
    #[arg(short, long, env = "PROFILE_OUTPUT_DIR", default_value = "profiles")]
    output: PathBuf,

    /// Extension of the text profiles.
    #[arg(long, env = "PROFILE_EXTENSION", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// How output files are named under the output directory.
    #[arg(long, value_enum, env = "PROFILE_LAYOUT", default_value_t = OutputLayout::FlatUnique)]
    layout: OutputLayout,

    /// Keep compiling after a profile fails instead of stopping at the first failure.
    #[arg(long, env = "PROFILE_KEEP_GOING")]
    keep_going: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = log::init(&args.log)?;

    let failure_policy = if args.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    let options = CompileOptions::new(args.input, args.output)
        .with_extension(args.extension)
        .with_layout(args.layout)
        .with_failure_policy(failure_policy);

    let report = compile_all(&options)?;
    let bytes = report.bytes_written();
    let compiled = report.finish()?;

    info!(
        "Wrote {} profiles ({} bytes) to {}",
        compiled.len(),
        bytes,
        options.output_root.display()
    );

    Ok(())
}
