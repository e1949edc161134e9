use pretty_assertions::assert_eq;
use protobuf::{text_format, Message};

use crate::{
    compile_all, compile_file,
    compiler::{FailurePolicy, OutputLayout},
    discover,
    error::ParseError,
    parse_text,
    protogen::profile::{
        profile::{
            layer::{analog_action, DigitalAction},
            Layer, Platform,
        },
        Profile,
    },
    serialize_binary, CompileError, CompileOptions,
};

use super::{
    analog, digital, files_under, init_logging, profile, write, MALFORMED_PROFILE, PC_PROFILE,
    SWITCH_PROFILE,
};

#[test]
fn compiles_every_profile_under_the_input_root() -> anyhow::Result<()> {
    init_logging();

    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "switch/switch.textpb", SWITCH_PROFILE);
    write(input.path(), "pc.textpb", PC_PROFILE);

    let report = compile_all(&CompileOptions::new(input.path(), output.path()))?;

    assert!(report.is_success());
    assert_eq!(report.compiled.len(), 2);
    assert_eq!(files_under(output.path()), ["pc", "switch"]);

    let compiled = std::fs::read(output.path().join("switch"))?;
    assert_eq!(compiled, serialize_binary(&parse_text(SWITCH_PROFILE.as_bytes())?)?);
    assert_eq!(Profile::parse_from_bytes(&compiled)?.name, "switch");
    assert_eq!(
        report.bytes_written(),
        compiled.len() + std::fs::read(output.path().join("pc"))?.len()
    );

    Ok(())
}

#[test]
fn compiled_bytes_match_canonical_encoding() -> anyhow::Result<()> {
    let mut base = Layer::new();
    base.thumb_top = digital(DigitalAction::ZL);
    base.ring_bottom = analog(analog_action::ID::SLIDER_LEFT, 1023);
    let expected = profile(
        "canonical",
        &[(Platform::PC, 2), (Platform::SWITCH, 0)],
        70,
        base,
        Some(Layer::new()),
    );

    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(
        input.path(),
        "canonical.textpb",
        text_format::print_to_string_pretty(&expected),
    );

    let written = compile_file(
        &input.path().join("canonical.textpb"),
        &output.path().join("canonical"),
    )?;

    let compiled = std::fs::read(output.path().join("canonical"))?;
    assert_eq!(written, compiled.len());
    assert_eq!(compiled, expected.write_to_bytes()?);
    assert_eq!(Profile::parse_from_bytes(&compiled)?, expected);

    Ok(())
}

#[test]
fn only_matching_extension_is_compiled() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "switch.textpb", SWITCH_PROFILE);
    write(input.path(), "pc.txt", PC_PROFILE);
    write(input.path(), "backup.textpb.bak", PC_PROFILE);
    write(input.path(), "notes/README", "not a profile");

    let report = compile_all(&CompileOptions::new(input.path(), output.path()))?;

    assert_eq!(report.compiled.len(), 1);
    assert_eq!(files_under(output.path()), ["switch"]);

    Ok(())
}

#[test]
fn custom_extension_accepts_leading_dot() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    write(input.path(), "b.pbtxt", PC_PROFILE);
    write(input.path(), "a/c.pbtxt", SWITCH_PROFILE);
    write(input.path(), "d.textpb", SWITCH_PROFILE);

    let sources = discover(input.path(), ".pbtxt")?;

    assert_eq!(
        sources,
        [input.path().join("a/c.pbtxt"), input.path().join("b.pbtxt")]
    );

    Ok(())
}

#[test]
fn flat_layout_overwrites_colliding_stems() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a/shared.textpb", SWITCH_PROFILE);
    write(input.path(), "b/shared.textpb", PC_PROFILE);

    let report = compile_all(
        &CompileOptions::new(input.path(), output.path()).with_layout(OutputLayout::Flat),
    )?;

    // Both files compile, but only the last one processed survives.
    assert_eq!(report.compiled.len(), 2);
    assert_eq!(files_under(output.path()), ["shared"]);
    let survivor = Profile::parse_from_bytes(&std::fs::read(output.path().join("shared"))?)?;
    assert_eq!(survivor.name, "pc");

    Ok(())
}

#[test]
fn flat_unique_layout_rejects_collisions_before_writing() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a/first.textpb", PC_PROFILE);
    write(input.path(), "a/shared.textpb", SWITCH_PROFILE);
    write(input.path(), "b/shared.textpb", PC_PROFILE);

    let result = compile_all(&CompileOptions::new(input.path(), output.path()));

    match result {
        Err(CompileError::Collision {
            stem,
            first,
            second,
        }) => {
            assert_eq!(stem, "shared");
            assert_eq!(first, input.path().join("a/shared.textpb"));
            assert_eq!(second, input.path().join("b/shared.textpb"));
        }
        other => panic!("Expected a collision, got {:?}", other),
    }
    assert!(files_under(output.path()).is_empty());

    Ok(())
}

#[test]
fn mirror_layout_keeps_directories() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a/shared.textpb", SWITCH_PROFILE);
    write(input.path(), "b/nested/shared.textpb", PC_PROFILE);

    let report = compile_all(
        &CompileOptions::new(input.path(), output.path()).with_layout(OutputLayout::Mirror),
    )?;

    assert_eq!(report.compiled.len(), 2);
    assert_eq!(files_under(output.path()), ["a/shared", "b/nested/shared"]);
    assert_eq!(
        report.compiled[1].output,
        output.path().join("b/nested/shared")
    );

    Ok(())
}

#[test]
fn mirror_layout_rejects_file_shadowing_directory() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a/x.textpb", SWITCH_PROFILE);
    write(input.path(), "a/x/y.textpb", PC_PROFILE);

    let result = compile_all(
        &CompileOptions::new(input.path(), output.path()).with_layout(OutputLayout::Mirror),
    );

    match result {
        Err(CompileError::Collision {
            stem,
            first,
            second,
        }) => {
            assert_eq!(stem, "x");
            assert_eq!(first, input.path().join("a/x.textpb"));
            assert_eq!(second, input.path().join("a/x/y.textpb"));
        }
        other => panic!("Expected a collision, got {:?}", other),
    }
    assert!(files_under(output.path()).is_empty());

    Ok(())
}

#[test]
fn first_failure_aborts_the_batch() -> anyhow::Result<()> {
    init_logging();

    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a/x.textpb", SWITCH_PROFILE);
    write(input.path(), "a/y.textpb", MALFORMED_PROFILE);
    write(input.path(), "b/x.textpb", PC_PROFILE);

    let result = compile_all(
        &CompileOptions::new(input.path(), output.path()).with_layout(OutputLayout::Flat),
    );

    match result {
        Err(CompileError::Parse {
            path,
            source: ParseError::TextFormat(_),
        }) => assert_eq!(path, input.path().join("a/y.textpb")),
        other => panic!("Expected a parse error, got {:?}", other),
    }

    // a/x was written before the failure, b/x was never reached.
    assert_eq!(files_under(output.path()), ["x"]);
    let written = Profile::parse_from_bytes(&std::fs::read(output.path().join("x"))?)?;
    assert_eq!(written.name, "switch");

    Ok(())
}

#[test]
fn continue_policy_reports_every_failure() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a.textpb", SWITCH_PROFILE);
    write(input.path(), "b.textpb", MALFORMED_PROFILE);
    write(input.path(), "c.textpb", "bogus_field: 1");
    write(input.path(), "d.textpb", PC_PROFILE);

    let report = compile_all(
        &CompileOptions::new(input.path(), output.path())
            .with_failure_policy(FailurePolicy::Continue),
    )?;

    assert!(!report.is_success());
    assert_eq!(files_under(output.path()), ["a", "d"]);
    assert_eq!(
        report
            .failures
            .iter()
            .map(|failure| failure.path().to_path_buf())
            .collect::<Vec<_>>(),
        [input.path().join("b.textpb"), input.path().join("c.textpb")]
    );

    Ok(())
}

#[test]
fn finishing_a_report_with_failures_is_an_error() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a.textpb", SWITCH_PROFILE);
    write(input.path(), "b.textpb", MALFORMED_PROFILE);

    let report = compile_all(
        &CompileOptions::new(input.path(), output.path())
            .with_failure_policy(FailurePolicy::Continue),
    )?;

    let error = report.finish().unwrap_err();
    assert_eq!(error.to_string(), "1 of 2 profiles failed to compile");

    Ok(())
}

#[test]
fn finishing_a_clean_report_returns_compiled_files() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "a.textpb", SWITCH_PROFILE);

    let compiled = compile_all(
        &CompileOptions::new(input.path(), output.path())
            .with_failure_policy(FailurePolicy::Continue),
    )?
    .finish()?;

    assert_eq!(compiled.len(), 1);
    assert_eq!(compiled[0].output, output.path().join("a"));

    Ok(())
}

#[test]
fn empty_input_root_compiles_nothing() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "empty/.keep", "");

    let report = compile_all(&CompileOptions::new(input.path(), output.path()))?;

    assert!(report.is_success());
    assert!(report.compiled.is_empty());
    assert!(files_under(output.path()).is_empty());

    Ok(())
}

#[test]
fn missing_output_root_is_an_io_error() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "switch.textpb", SWITCH_PROFILE);
    let missing = output.path().join("missing");

    let result = compile_all(&CompileOptions::new(input.path(), &missing));

    match result {
        Err(CompileError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected an io error, got {:?}", other),
    }
    assert!(!missing.exists());

    Ok(())
}

#[test]
fn missing_input_root_is_an_io_error() -> anyhow::Result<()> {
    let output = tempfile::tempdir()?;
    let missing = output.path().join("missing");

    let result = compile_all(&CompileOptions::new(&missing, output.path()));

    assert!(matches!(result, Err(CompileError::Io { .. })));

    Ok(())
}

#[test]
fn non_utf8_profile_is_a_parse_error() -> anyhow::Result<()> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write(input.path(), "binary.textpb", [0xffu8, 0xfe, 0x00, 0x01]);

    let result = compile_all(&CompileOptions::new(input.path(), output.path()));

    assert!(matches!(
        result,
        Err(CompileError::Parse {
            source: ParseError::Utf8(_),
            ..
        })
    ));

    Ok(())
}

#[test]
fn unknown_field_is_a_parse_error() {
    assert!(matches!(
        parse_text(b"name: \"x\" handedness: LEFT"),
        Err(ParseError::TextFormat(_))
    ));
}

#[test]
fn repeated_singular_field_keeps_last_value() -> anyhow::Result<()> {
    let profile = parse_text(b"name: \"a\" name: \"b\"")?;

    assert_eq!(profile.name, "b");

    Ok(())
}
