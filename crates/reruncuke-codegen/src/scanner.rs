// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rerun-list discovery
//!
//! A Cucumber run configured with the `rerun:` plugin leaves one `.txt`
//! file per execution thread in its result directory. The scanner lists
//! those files lazily, one directory entry at a time, without collecting
//! the whole directory up front.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CodegenError;

/// File-name suffix that marks a rerun list
pub const RERUN_LIST_SUFFIX: &str = ".txt";

/// Lists rerun-list files in a source directory
///
/// Entry order is whatever the filesystem yields; callers must not rely on
/// a stable cross-file order.
#[derive(Debug, Clone)]
pub struct RerunListScanner {
    source_dir: PathBuf,
}

impl RerunListScanner {
    /// Create a scanner over `source_dir`
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// The directory this scanner reads from
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Start a fresh scan over the source directory
    ///
    /// Returns a lazy iterator over the paths of rerun-list files. Calling
    /// `scan` again restarts from the beginning of the directory.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::DirectoryNotFound`] if the source directory
    /// does not exist, is not a directory, or cannot be opened.
    pub fn scan(&self) -> Result<impl Iterator<Item = PathBuf> + '_, CodegenError> {
        if !self.source_dir.is_dir() {
            return Err(CodegenError::DirectoryNotFound {
                path: self.source_dir.clone(),
            });
        }

        let entries = fs::read_dir(&self.source_dir).map_err(|source| {
            debug!(path = %self.source_dir.display(), %source, "failed to open source directory");
            CodegenError::DirectoryNotFound {
                path: self.source_dir.clone(),
            }
        })?;

        Ok(entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_rerun_list(path)))
    }
}

/// Whether a path names a rerun-list file
fn is_rerun_list(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(RERUN_LIST_SUFFIX))
}
