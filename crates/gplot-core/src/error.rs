// File: crates/gplot-core/src/error.rs
// Summary: Error type shared by plot construction, rendering and (de)serialization.

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GplotError>;

#[derive(Debug, thiserror::Error)]
pub enum GplotError {
    #[error("series length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("series has no data")]
    EmptySeries,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data file write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unknown {kind} '{value}'")]
    UnknownTag { kind: &'static str, value: String },

    #[error("gnuplot exited with {status}")]
    Gnuplot { status: std::process::ExitStatus },
}

impl GplotError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line, message: message.into() }
    }
}
