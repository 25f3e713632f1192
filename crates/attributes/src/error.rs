use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when a glob cannot be compiled into a matcher.
#[derive(Debug, Error)]
#[error("failed to compile attribute pattern '{pattern}': {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: globset::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending glob.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Operation that failed on an attributes file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileAction {
    /// Reading the file.
    Read,
    /// Writing the file.
    Write,
}

impl FileAction {
    const fn verb(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// I/O failure while reading or writing an attributes file.
#[derive(Debug, Error)]
#[error("failed to {} attributes file '{}': {source}", .action.verb(), .path.display())]
pub struct AttributesFileError {
    action: FileAction,
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl AttributesFileError {
    pub(crate) fn new(action: FileAction, path: &Path, source: io::Error) -> Self {
        Self {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns which operation failed.
    #[must_use]
    pub const fn action(&self) -> FileAction {
        self.action
    }

    /// Returns the file the operation targeted.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
