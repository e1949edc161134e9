use std::path::PathBuf;

use protobuf::text_format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("profile is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    TextFormat(#[from] text_format::ParseError),
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Parsing file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("Accessing path: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Encoding file: {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: protobuf::Error,
    },
    #[error(
        "{} and {} both compile to {:?}",
        first.display(),
        second.display(),
        stem
    )]
    Collision {
        stem: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl CompileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            CompileError::Parse { path, .. }
            | CompileError::Io { path, .. }
            | CompileError::Encode { path, .. } => path,
            CompileError::Collision { second, .. } => second,
        }
    }
}
