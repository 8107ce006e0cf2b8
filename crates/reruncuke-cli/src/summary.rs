// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Machine-readable run summaries
//!
//! Build tooling invoking `reruncuke --json` gets the run outcome on
//! stdout as a single JSON document and can decide for itself whether
//! recorded failures should fail the surrounding build.

use serde::Serialize;

use reruncuke_codegen::GenerationReport;

/// Summary of one generation run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Number of runner sources successfully written
    pub generated: usize,
    /// Failures recorded during the run, in order of occurrence
    pub errors: Vec<FailureSummary>,
}

/// One recorded failure
#[derive(Debug, Serialize)]
pub struct FailureSummary {
    /// The rerun list the failure is scoped to
    pub file: String,
    /// Human-readable cause
    pub message: String,
}

impl RunSummary {
    /// Build the summary for a completed run
    #[must_use]
    pub fn from_report(report: &GenerationReport) -> Self {
        Self {
            generated: report.generated,
            errors: report
                .errors
                .iter()
                .map(|failure| FailureSummary {
                    file: failure.file.display().to_string(),
                    message: failure.error.to_string(),
                })
                .collect(),
        }
    }
}
