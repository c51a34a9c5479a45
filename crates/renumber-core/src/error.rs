use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run before any entry is touched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid directory path: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Failure for a single entry. The scan reports it and moves on.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("target '{}' already exists", .target.display())]
    Collision { target: PathBuf },

    #[error("rename to '{}' failed: {source}", .target.display())]
    Rename {
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read entry: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Why an entry was left alone. Not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Name lacks an underscore or a dot.
    NoSequencePattern,
    /// Name matched one of the configured ignore patterns.
    Ignored,
    NonUtf8Name,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoSequencePattern => write!(f, "no name_number.ext pattern"),
            SkipReason::Ignored => write!(f, "matches an ignore pattern"),
            SkipReason::NonUtf8Name => write!(f, "file name is not valid UTF-8"),
        }
    }
}
