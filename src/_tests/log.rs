use pretty_assertions::assert_eq;
use tracing::level_filters::LevelFilter;

use crate::log::LogArgs;

fn args(verbose: u8, quiet: bool) -> LogArgs {
    LogArgs {
        verbose,
        quiet,
        log_file: None,
    }
}

#[test]
fn verbosity_flags_select_level() {
    assert_eq!(args(0, false).level(), LevelFilter::INFO);
    assert_eq!(args(1, false).level(), LevelFilter::DEBUG);
    assert_eq!(args(0, true).level(), LevelFilter::WARN);
}

#[test]
fn extra_verbosity_stays_at_debug() {
    // Trace events are compiled out.
    assert_eq!(args(3, false).level(), LevelFilter::DEBUG);
}
