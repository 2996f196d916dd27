//! Runtime status supplied by an external provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse health classification for a deployed module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// State is in sync and the latest apply succeeded.
    Healthy,
    /// Drift detected or no apply has happened yet.
    Warning,
    /// The module is in a failed state.
    Error,
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Status record for one module, obtained from a status provider.
///
/// `last_checked` is time-varying by nature and is excluded from the
/// pipeline's idempotence guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatus {
    /// Health classification.
    pub status: HealthState,

    /// When the provider last observed the module.
    pub last_checked: DateTime<Utc>,

    /// One-line human-readable summary.
    pub summary: String,
}

impl ModuleStatus {
    /// Creates a status record.
    #[must_use]
    pub fn new(
        status: HealthState,
        last_checked: DateTime<Utc>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            status,
            last_checked,
            summary: summary.into(),
        }
    }
}
