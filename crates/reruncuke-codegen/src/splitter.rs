// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Scenario splitting
//!
//! One rerun list holds the scenarios that failed on one execution thread,
//! newline-separated. Splitting is pure text handling: every line is
//! trimmed, blank lines are dropped, and whatever remains is treated as an
//! opaque scenario identifier (typically a feature path with a line
//! suffix, e.g. `features/login.feature:12`).

/// Split one rerun list's text into scenario identifiers
///
/// Order is preserved from the file content. A file with no non-blank
/// lines yields an empty vector, not an error.
#[must_use]
pub fn split_scenarios(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
