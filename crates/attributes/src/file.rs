//! Locating, reading, and writing a repository's attributes file.
//!
//! The repository root is the nearest directory, starting from a given path
//! and walking towards the filesystem root, that contains a `.git` directory.
//! The attributes file lives directly inside that root. A missing root or
//! missing file is an ordinary outcome and is reported as `None` / `false`
//! rather than as an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::debug_attributes::{trace_file_loaded, trace_file_written};
use crate::error::FileAction;
use crate::{AttributeSet, AttributesFileError, ParseOptions, PatternMatcher};

/// Directory marking the root of a repository.
pub const REPOSITORY_MARKER: &str = ".git";

/// Name of the attributes file at the repository root.
pub const ATTRIBUTES_FILE_NAME: &str = ".gitattributes";

/// Returns the nearest ancestor of `start` (inclusive) containing
/// [`REPOSITORY_MARKER`].
#[must_use]
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(REPOSITORY_MARKER).is_dir())
        .map(Path::to_path_buf)
}

/// Returns the attributes file path for the repository containing `start`.
///
/// The file itself need not exist, so the result can also serve as a write
/// target. Returns `None` when `start` is not inside a repository.
#[must_use]
pub fn locate_attributes_file(start: &Path) -> Option<PathBuf> {
    find_repository_root(start).map(|root| root.join(ATTRIBUTES_FILE_NAME))
}

impl<M: PatternMatcher> AttributeSet<M> {
    /// Parses the file at `path` and appends its rules.
    ///
    /// Returns `Ok(false)` without touching the set when the file does not
    /// exist.
    pub fn read_file(
        &mut self,
        path: &Path,
        options: ParseOptions,
    ) -> Result<bool, AttributesFileError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(error) => return Err(AttributesFileError::new(FileAction::Read, path, error)),
        };

        let before = self.len();
        self.parse_with(&text, options);
        trace_file_loaded(path, self.len() - before);
        Ok(true)
    }

    /// Parses the attributes file of the repository containing `start`.
    ///
    /// Returns `Ok(false)` when there is no repository root or the root has
    /// no attributes file.
    pub fn read_repository_file(
        &mut self,
        start: &Path,
        options: ParseOptions,
    ) -> Result<bool, AttributesFileError> {
        match locate_attributes_file(start) {
            Some(path) => self.read_file(&path, options),
            None => Ok(false),
        }
    }

    /// Writes [`serialize`](Self::serialize) output to `path`, replacing any
    /// existing content.
    pub fn write_file(&self, path: &Path) -> Result<(), AttributesFileError> {
        let text = self.serialize();
        fs::write(path, &text)
            .map_err(|error| AttributesFileError::new(FileAction::Write, path, error))?;
        trace_file_written(path, text.len());
        Ok(())
    }

    /// Writes the rules to the attributes file of the repository containing
    /// `start`.
    ///
    /// Returns `Ok(false)` when `start` is not inside a repository.
    pub fn write_repository_file(&self, start: &Path) -> Result<bool, AttributesFileError> {
        match locate_attributes_file(start) {
            Some(path) => self.write_file(&path).map(|()| true),
            None => Ok(false),
        }
    }
}
