//! Load diagnostics
//!
//! Loaders never abort a batch: they return partial results together
//! with the issues collected along the way, and the presentation layer
//! decides what to surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ScanError;

/// Severity of a load issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected and harmless, reported for completeness.
    Info,
    /// Something may render incompletely.
    Warning,
    /// A block or file was skipped.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What went wrong, typed so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IssueDetail {
    /// A block could not be scanned to completion.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The environment declares no paired variables file. Not a failure:
    /// the environment simply has an empty variable list.
    #[error("no variables file at `{expected}`")]
    MissingVariablesFile {
        /// Path where the paired file was looked up.
        expected: String,
    },
}

/// One issue encountered while loading a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadIssue {
    /// Path of the source the issue belongs to.
    pub path: String,

    /// Severity level.
    pub severity: Severity,

    /// Typed detail.
    pub detail: IssueDetail,
}

impl LoadIssue {
    /// Creates an error-severity issue from a scan failure.
    #[must_use]
    pub fn scan(path: impl Into<String>, error: ScanError) -> Self {
        Self {
            path: path.into(),
            severity: Severity::Error,
            detail: IssueDetail::Scan(error),
        }
    }

    /// Creates an info-severity issue for an absent paired variables
    /// file.
    #[must_use]
    pub fn missing_variables(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            severity: Severity::Info,
            detail: IssueDetail::MissingVariablesFile {
                expected: expected.into(),
            },
        }
    }

    /// Returns true for error-severity issues.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl std::fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.detail)
    }
}

/// Aggregate counts over a batch of issues.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IssueStats {
    /// Count of informational issues.
    pub info_count: usize,
    /// Count of warning-severity issues.
    pub warning_count: usize,
    /// Count of error-severity issues.
    pub error_count: usize,
}

impl IssueStats {
    /// Tallies a list of issues.
    #[must_use]
    pub fn from_issues(issues: &[LoadIssue]) -> Self {
        let mut stats = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Info => stats.info_count += 1,
                Severity::Warning => stats.warning_count += 1,
                Severity::Error => stats.error_count += 1,
            }
        }
        stats
    }

    /// Total count across all severities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info_count + self.warning_count + self.error_count
    }

    /// Returns true when any error-severity issue was collected.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
