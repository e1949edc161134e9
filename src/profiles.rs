use std::{
    fs,
    path::{Component, Path},
};

use anyhow::{anyhow, bail, Context};
use indexmap::IndexMap;
use protobuf::{text_format::print_to_string_pretty, Message};
use walkdir::WalkDir;

use crate::{protogen::profile::Profile, serialize_binary};

pub type Profiles = IndexMap<String, Profile>;

pub fn load(path: &Path) -> anyhow::Result<Profile> {
    let contents = fs::read(path).with_context(|| format!("Reading file: {}", path.display()))?;
    Profile::parse_from_bytes(&contents)
        .with_context(|| format!("Decoding file: {}", path.display()))
}

pub fn load_all(dir: &Path) -> anyhow::Result<Vec<Profile>> {
    let timer = std::time::Instant::now();

    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let mut profiles = vec![];
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            profiles.push(load(entry.path())?);
        }
    }

    info!(
        "Loaded {} profiles in {}ms",
        profiles.len(),
        timer.elapsed().as_millis()
    );

    Ok(profiles)
}

pub fn load_by_name(dir: &Path) -> anyhow::Result<Profiles> {
    let loaded = load_all(dir)?;

    let mut profiles = Profiles::with_capacity(loaded.len());
    for profile in loaded {
        if let Some(overwritten) = profiles.insert(profile.name.clone(), profile) {
            warn!("Overwriting profile {}", overwritten.name);
        }
    }

    Ok(profiles)
}

pub fn save_all(profiles: &[Profile], dir: &Path) -> anyhow::Result<()> {
    for profile in profiles {
        let mut components = Path::new(&profile.name).components();
        if !matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        ) {
            bail!("Profile name {:?} is not a valid file name", profile.name);
        }

        let path = dir.join(&profile.name);
        let encoded = serialize_binary(profile)
            .with_context(|| format!("Encoding profile: {}", profile.name))?;
        fs::write(&path, encoded).with_context(|| format!("Writing file: {}", path.display()))?;
    }

    Ok(())
}

pub fn find(profiles: &[Profile], name: &str) -> Option<usize> {
    profiles.iter().position(|profile| profile.name == name)
}

pub fn find_or_err<'a>(profiles: &'a [Profile], name: &str) -> anyhow::Result<&'a Profile> {
    find(profiles, name)
        .map(|idx| &profiles[idx])
        .ok_or_else(|| anyhow!("No profile named {}", name))
}

pub fn to_text(profile: &Profile) -> String {
    print_to_string_pretty(profile)
}
