// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for reruncuke-codegen

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during runner generation
///
/// The fatal kinds (`DirectoryNotFound`, `OutputPrep`, `UnknownFlavor`)
/// abort a run before it writes anything. The remaining kinds are scoped to
/// one rerun list or one runner and are accumulated into the run's
/// [`GenerationReport`](crate::driver::GenerationReport) instead.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Rerun-list source directory missing or not a directory
    #[error("rerun-list directory not found: {path}")]
    DirectoryNotFound {
        /// The configured source directory
        path: PathBuf,
    },

    /// Output directory could not be created or cleared
    #[error("failed to prepare output directory {path}: {source}")]
    OutputPrep {
        /// The output directory being prepared
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Configured runner flavor not recognized
    #[error("unknown runner flavor {value:?}: expected JUNIT or SERENITY")]
    UnknownFlavor {
        /// The unrecognized configuration value
        value: String,
    },

    /// One rerun-list file could not be read
    #[error("failed to read rerun list {file}: {source}")]
    SourceRead {
        /// The unreadable rerun list
        file: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// One runner source failed to render or write
    #[error("failed to render runner {file}: {source}")]
    Render {
        /// The runner source file that could not be produced
        file: PathBuf,
        /// The underlying write error
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Whether this error aborts the whole run
    ///
    /// Non-fatal kinds are recorded per file/scenario and generation
    /// continues with the next unit of work.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. } | Self::OutputPrep { .. } | Self::UnknownFlavor { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_kinds_are_fatal() {
        let err = CodegenError::DirectoryNotFound {
            path: PathBuf::from("/missing"),
        };
        assert!(err.is_fatal());

        let err = CodegenError::UnknownFlavor {
            value: "TESTNG".to_string(),
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn per_unit_kinds_are_not_fatal() {
        let err = CodegenError::SourceRead {
            file: PathBuf::from("a.txt"),
            source: std::io::Error::other("denied"),
        };
        assert!(!err.is_fatal());

        let err = CodegenError::Render {
            file: PathBuf::from("FailedRunner0.java"),
            source: std::io::Error::other("disk full"),
        };
        assert!(!err.is_fatal());
    }

    #[test]
    fn messages_name_the_affected_path() {
        let err = CodegenError::SourceRead {
            file: PathBuf::from("target/cucumber-parallel/rerun1.txt"),
            source: std::io::Error::other("denied"),
        };
        let message = err.to_string();
        assert!(message.contains("rerun1.txt"), "got: {message}");
    }
}
