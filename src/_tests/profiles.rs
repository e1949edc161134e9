use pretty_assertions::assert_eq;

use crate::{
    parse_text,
    profiles::{find, find_or_err, load, load_all, load_by_name, save_all, to_text},
    protogen::profile::profile::{layer::DigitalAction, Layer, Platform},
    serialize_binary,
};

use super::{digital, files_under, profile, write, PC_PROFILE, SWITCH_PROFILE};

#[test]
fn saved_profiles_load_back() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let switch = parse_text(SWITCH_PROFILE.as_bytes())?;
    let pc = parse_text(PC_PROFILE.as_bytes())?;

    save_all(&[switch.clone(), pc.clone()], dir.path())?;

    assert_eq!(files_under(dir.path()), ["pc", "switch"]);
    assert_eq!(load_all(dir.path())?, [pc, switch.clone()]);
    assert_eq!(load(&dir.path().join("switch"))?, switch);

    Ok(())
}

#[test]
fn load_all_recurses_into_subdirectories() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let switch = parse_text(SWITCH_PROFILE.as_bytes())?;
    let pc = parse_text(PC_PROFILE.as_bytes())?;
    write(dir.path(), "a/nested/switch", serialize_binary(&switch)?);
    write(dir.path(), "b", serialize_binary(&pc)?);

    assert_eq!(load_all(dir.path())?, [switch, pc]);

    Ok(())
}

#[test]
fn load_all_rejects_missing_directory() {
    assert!(load_all(std::path::Path::new("")).is_err());
}

#[test]
fn load_all_rejects_undecodable_files() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    // Field 1 claims five bytes but only one follows.
    write(dir.path(), "truncated", [0x0a, 0x05, b'a']);

    let error = load_all(dir.path()).unwrap_err();
    assert!(error.to_string().contains("Decoding file"));

    Ok(())
}

#[test]
fn load_by_name_keeps_the_last_duplicate() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let first = profile("shared", &[(Platform::SWITCH, 0)], 10, Layer::new(), None);
    let mut base = Layer::new();
    base.thumb_top = digital(DigitalAction::R);
    let second = profile("shared", &[(Platform::PC, 0)], 20, base, None);
    write(dir.path(), "1", serialize_binary(&first)?);
    write(dir.path(), "2", serialize_binary(&second)?);

    let profiles = load_by_name(dir.path())?;

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles["shared"], second);

    Ok(())
}

#[test]
fn save_all_rejects_names_outside_the_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().join("profiles");
    std::fs::create_dir(&root)?;

    for name in ["../escape", "", "nested/name", "/absolute"] {
        let invalid = profile(name, &[(Platform::PC, 0)], 10, Layer::new(), None);
        assert!(save_all(&[invalid], &root).is_err(), "{:?}", name);
    }
    assert!(files_under(dir.path()).is_empty());

    Ok(())
}

#[test]
fn finds_profiles_by_name() -> anyhow::Result<()> {
    let profiles = [
        parse_text(SWITCH_PROFILE.as_bytes())?,
        parse_text(PC_PROFILE.as_bytes())?,
    ];

    assert_eq!(find(&profiles, "pc"), Some(1));
    assert_eq!(find(&profiles, "missing"), None);
    assert_eq!(find_or_err(&profiles, "switch")?.name, "switch");
    assert!(find_or_err(&profiles, "missing").is_err());

    Ok(())
}

#[test]
fn text_rendering_parses_back() -> anyhow::Result<()> {
    let pc = parse_text(PC_PROFILE.as_bytes())?;

    let text = to_text(&pc);

    assert!(text.contains("name: \"pc\""));
    assert!(text.contains("digital: HOME"));
    assert_eq!(parse_text(text.as_bytes())?, pc);

    Ok(())
}
