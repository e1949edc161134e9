#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use profile_compiler::{
    eeprom,
    log::{self, LogArgs},
    profiles,
};

/// Pack compiled profiles into the controller's EEPROM image.
#[derive(Debug, Parser)]
#[command(name = "pack")]
struct Args {
    /// Directory of compiled profiles.
    #[arg(short, long, env = "PROFILE_OUTPUT_DIR", default_value = "profiles")]
    profiles: PathBuf,

    /// Where to write the image.
    #[arg(short, long, default_value = "profiles.eeprom")]
    output: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = log::init(&args.log)?;

    let loaded = profiles::load_all(&args.profiles)?;
    let image = eeprom::encode(&loaded).context("Unable to encode profiles")?;

    std::fs::write(&args.output, &image)
        .with_context(|| format!("Writing file: {}", args.output.display()))?;

    info!(
        "Packed {} profiles into {} ({} bytes)",
        loaded.len(),
        args.output.display(),
        image.len()
    );

    Ok(())
}
