//! Deterministic mock status provider
//!
//! Stands in for live cloud polling until that integration exists. The
//! health value is a pure function of the module id, so repeated runs
//! over the same inputs render identically; only `last_checked` varies.

use chrono::{DateTime, Utc};
use tflens_application::StatusProvider;
use tflens_domain::{HealthState, ModuleStatus};

const HEALTHY_SUMMARY: &str = "State is in sync and the latest apply succeeded.";
const WARNING_SUMMARY: &str = "Awaiting initial apply or drift detected in mock data.";

/// Mock status provider deriving health from the module id length.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockStatusProvider {
    fixed_timestamp: Option<DateTime<Utc>>,
}

impl MockStatusProvider {
    /// Creates a mock provider that stamps `last_checked` with the
    /// current time.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixed_timestamp: None,
        }
    }

    /// Creates a mock provider with a frozen `last_checked` timestamp,
    /// for reproducible output in tests.
    #[must_use]
    pub const fn with_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            fixed_timestamp: Some(timestamp),
        }
    }
}

impl StatusProvider for MockStatusProvider {
    fn status(&self, module_id: &str) -> ModuleStatus {
        let status = if module_id.len() % 2 == 0 {
            HealthState::Healthy
        } else {
            HealthState::Warning
        };
        let summary = match status {
            HealthState::Healthy => HEALTHY_SUMMARY,
            HealthState::Warning | HealthState::Error => WARNING_SUMMARY,
        };

        ModuleStatus::new(
            status,
            self.fixed_timestamp.unwrap_or_else(Utc::now),
            summary,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn frozen() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn test_even_length_id_is_healthy() {
        let provider = MockStatusProvider::with_timestamp(frozen());
        let status = provider.status("rds8");
        assert_eq!(status.status, HealthState::Healthy);
        assert_eq!(status.summary, HEALTHY_SUMMARY);
    }

    #[test]
    fn test_odd_length_id_is_warning() {
        let provider = MockStatusProvider::with_timestamp(frozen());
        let status = provider.status("vpc");
        assert_eq!(status.status, HealthState::Warning);
        assert_eq!(status.summary, WARNING_SUMMARY);
    }

    #[test]
    fn test_fixed_timestamp_is_used_verbatim() {
        let provider = MockStatusProvider::with_timestamp(frozen());
        assert_eq!(provider.status("vpc").last_checked, frozen());
    }

    #[test]
    fn test_same_id_is_deterministic() {
        let provider = MockStatusProvider::with_timestamp(frozen());
        assert_eq!(provider.status("eks"), provider.status("eks"));
    }

    #[test]
    fn test_live_clock_produces_a_recent_timestamp() {
        let provider = MockStatusProvider::new();
        let status = provider.status("vpc");
        assert!(status.last_checked.timestamp() > 0);
    }
}
