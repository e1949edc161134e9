#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use profile_compiler::{
    discover,
    eeprom::{self, MAX_EEPROM_BYTES},
    log::{self, LogArgs},
    parse_text, DEFAULT_EXTENSION,
};

/// Check that text profiles parse and fit on the controller, without writing anything.
#[derive(Debug, Parser)]
#[command(name = "validate")]
struct Args {
    /// Directory searched recursively for text profiles.
    #[arg(short, long, env = "PROFILE_INPUT_DIR", default_value = "text_profiles")]
    input: PathBuf,

    /// Extension of the text profiles.
    #[arg(long, env = "PROFILE_EXTENSION", default_value = DEFAULT_EXTENSION)]
    extension: String,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = log::init(&args.log)?;

    let mut profiles = vec![];
    for source in discover(&args.input, &args.extension)? {
        let contents =
            std::fs::read(&source).with_context(|| format!("Reading file: {}", source.display()))?;
        profiles.push(
            parse_text(&contents).with_context(|| format!("Parsing file: {}", source.display()))?,
        );
    }

    let image = eeprom::encode(&profiles)?;

    info!(
        "{} profiles are valid, using {} of {} bytes",
        profiles.len(),
        image.len(),
        MAX_EEPROM_BYTES
    );

    Ok(())
}
