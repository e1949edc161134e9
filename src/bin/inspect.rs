use std::path::PathBuf;

use clap::Parser;
use profile_compiler::{
    log::{self, LogArgs},
    profiles,
};

/// Print compiled profiles as text format.
#[derive(Debug, Parser)]
#[command(name = "inspect")]
struct Args {
    /// Binary profiles, or directories of them.
    #[arg(default_value = "profiles")]
    paths: Vec<PathBuf>,

    /// Only print the profile with this name.
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = log::init(&args.log)?;

    let mut loaded = vec![];
    for path in args.paths.iter() {
        if path.is_dir() {
            loaded.extend(profiles::load_all(path)?);
        } else {
            loaded.push(profiles::load(path)?);
        }
    }

    let selected = match args.name.as_deref() {
        Some(name) => vec![profiles::find_or_err(&loaded, name)?],
        None => loaded.iter().collect(),
    };

    for profile in selected {
        println!("# {}", profile.name);
        println!("{}", profiles::to_text(profile));
    }

    Ok(())
}
