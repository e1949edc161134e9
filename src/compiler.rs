use std::{
    collections::HashMap,
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::Level;
use walkdir::WalkDir;

use crate::{error::CompileError, parse_text, serialize_binary, DEFAULT_EXTENSION};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputLayout {
    /// Outputs land directly in the output root, named by stem. A later file with the same
    /// stem overwrites an earlier one.
    Flat,
    /// Flat, but a stem collision fails the run before anything is written.
    #[default]
    FlatUnique,
    /// Outputs keep their directory relative to the input root. An output that would also be
    /// the directory of another output fails the run before anything is written.
    Mirror,
}

impl OutputLayout {
    pub fn output_path(self, input_root: &Path, output_root: &Path, source: &Path) -> PathBuf {
        match self {
            OutputLayout::Flat | OutputLayout::FlatUnique => {
                output_root.join(source.file_stem().unwrap_or_default())
            }
            OutputLayout::Mirror => {
                let relative = source
                    .strip_prefix(input_root)
                    .unwrap_or_else(|_| Path::new(source.file_name().unwrap_or_default()));
                output_root.join(relative.with_extension(""))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Stop at the first file that fails. Files compiled before it stay on disk.
    #[default]
    Abort,
    /// Record the failure and move on to the next file.
    Continue,
}

#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub extension: String,
    pub layout: OutputLayout,
    pub failure_policy: FailurePolicy,
}

impl CompileOptions {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            layout: OutputLayout::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub source: PathBuf,
    pub output: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct CompileReport {
    pub compiled: Vec<Compiled>,
    pub failures: Vec<CompileError>,
}

impl CompileReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn bytes_written(&self) -> usize {
        self.compiled.iter().map(|compiled| compiled.bytes).sum()
    }

    /// Logs every collected failure and turns them into a single error. Returns the compiled
    /// files when nothing failed.
    pub fn finish(self) -> anyhow::Result<Vec<Compiled>> {
        if self.failures.is_empty() {
            return Ok(self.compiled);
        }

        let failed = self.failures.len();
        let total = self.compiled.len() + failed;
        for failure in self.failures {
            error!("{:#}", anyhow::Error::new(failure));
        }

        anyhow::bail!("{} of {} profiles failed to compile", failed, total)
    }
}

/// Lists every file under `input_root` whose extension is `extension`, recursing into
/// subdirectories. Entries are visited in file name order at each level.
pub fn discover(input_root: &Path, extension: &str) -> Result<Vec<PathBuf>, CompileError> {
    let extension = OsStr::new(extension.trim_start_matches('.'));

    let mut sources = vec![];
    for entry in WalkDir::new(input_root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(input_root).to_path_buf();
            CompileError::io(path, e.into())
        })?;

        if !entry.file_type().is_dir() && entry.path().extension() == Some(extension) {
            sources.push(entry.into_path());
        }
    }

    Ok(sources)
}

pub fn compile_file(source: &Path, output: &Path) -> Result<usize, CompileError> {
    let contents = fs::read(source).map_err(|e| CompileError::io(source, e))?;

    let profile = parse_text(&contents).map_err(|e| CompileError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;

    let encoded = serialize_binary(&profile).map_err(|e| CompileError::Encode {
        path: source.to_path_buf(),
        source: e,
    })?;

    fs::write(output, &encoded).map_err(|e| CompileError::io(output, e))?;

    Ok(encoded.len())
}

#[instrument(level = Level::DEBUG, skip(options), fields(input = %options.input_root.display()))]
pub fn compile_all(options: &CompileOptions) -> Result<CompileReport, CompileError> {
    let timer = std::time::Instant::now();

    let output_root = fs::metadata(&options.output_root)
        .map_err(|e| CompileError::io(&options.output_root, e))?;
    if !output_root.is_dir() {
        return Err(CompileError::io(
            &options.output_root,
            io::Error::other("output root is not a directory"),
        ));
    }

    let targets = discover(&options.input_root, &options.extension)?
        .into_iter()
        .map(|source| {
            let output = options
                .layout
                .output_path(&options.input_root, &options.output_root, &source);
            (source, output)
        })
        .collect_vec();
    debug!("Discovered {} profiles", targets.len());

    if options.layout != OutputLayout::Flat {
        check_collisions(&targets)?;
    }

    let mut report = CompileReport::default();
    for (source, output) in targets {
        match compile_target(options.layout, &source, &output) {
            Ok(bytes) => {
                debug!("{} -> {} ({} bytes)", source.display(), output.display(), bytes);
                report.compiled.push(Compiled {
                    source,
                    output,
                    bytes,
                });
            }
            Err(e) => match options.failure_policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::Continue => {
                    warn!("Skipping {}: {:?}", source.display(), e);
                    report.failures.push(e);
                }
            },
        }
    }

    info!(
        "Compiled {} profiles ({} failed) in {}ms",
        report.compiled.len(),
        report.failures.len(),
        timer.elapsed().as_millis()
    );

    Ok(report)
}

fn compile_target(
    layout: OutputLayout,
    source: &Path,
    output: &Path,
) -> Result<usize, CompileError> {
    if layout == OutputLayout::Mirror {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| CompileError::io(parent, e))?;
        }
    }

    compile_file(source, output)
}

/// Fails if two targets share an output path, or if one output path is a directory another
/// output lives under.
fn check_collisions(targets: &[(PathBuf, PathBuf)]) -> Result<(), CompileError> {
    let mut claimed: HashMap<&Path, &Path> = HashMap::with_capacity(targets.len());
    for (source, output) in targets {
        if let Some(first) = claimed.insert(output, source) {
            return Err(collision(output, first, source));
        }
    }

    for (source, output) in targets {
        for parent in output.ancestors().skip(1) {
            if let Some(first) = claimed.get(parent) {
                return Err(collision(parent, first, source));
            }
        }
    }

    Ok(())
}

fn collision(output: &Path, first: &Path, second: &Path) -> CompileError {
    CompileError::Collision {
        stem: output
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned(),
        first: first.to_path_buf(),
        second: second.to_path_buf(),
    }
}
