// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output directory preparation
//!
//! The output directory is fully regenerable: every run wipes whatever a
//! previous run (or anything else) left there before writing fresh
//! runners. Clearing is recursive, so stale nested content cannot survive
//! a regeneration.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CodegenError;

/// Ensure `dir` exists and is empty
///
/// Creates the directory (and missing parents) if absent; otherwise
/// removes every child entry, recursing into subdirectories.
///
/// # Errors
///
/// Returns [`CodegenError::OutputPrep`] when creation or clearing is
/// denied by the filesystem, including when `dir` exists but is a regular
/// file. This is fatal to the whole run.
pub fn prepare_output_dir(dir: &Path) -> Result<(), CodegenError> {
    let prep_failed = |source| CodegenError::OutputPrep {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(prep_failed)?;

    for entry in fs::read_dir(dir).map_err(prep_failed)? {
        let entry = entry.map_err(prep_failed)?;
        let path = entry.path();
        if entry.file_type().map_err(prep_failed)?.is_dir() {
            fs::remove_dir_all(&path).map_err(prep_failed)?;
        } else {
            fs::remove_file(&path).map_err(prep_failed)?;
        }
        debug!(path = %path.display(), "removed stale output entry");
    }

    Ok(())
}
