//! Per-badge progress for a looked-up profile.
use serde::{Deserialize, Serialize};

use crate::catalog::{Badge, Catalog};
use crate::metrics::ProfileMetrics;
use crate::tiers::{TierProgress, evaluate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeProgress {
    pub badge: Badge,
    pub value: u64,
    pub progress: TierProgress,
}

impl BadgeProgress {
    #[must_use]
    pub fn target(&self) -> Option<u64> {
        self.progress.target()
    }
}

/// Evaluate one badge against a profile. Unmeasured metrics read as zero.
#[must_use]
pub fn evaluate_badge(badge: &Badge, metrics: &ProfileMetrics) -> BadgeProgress {
    let value = badge.metric_key.map_or(0, |key| metrics.value(key));
    BadgeProgress {
        badge: badge.clone(),
        value,
        progress: evaluate(&badge.tiers, value),
    }
}

/// Progress for every tiered badge whose metric the profile actually
/// reports, in catalog order. Badges the provider could not measure are
/// left out rather than shown at zero.
#[must_use]
pub fn progress_report(catalog: &Catalog, metrics: &ProfileMetrics) -> Vec<BadgeProgress> {
    catalog
        .badges()
        .iter()
        .filter(|badge| badge.has_tiers())
        .filter(|badge| badge.metric_key.is_some_and(|key| metrics.has(key)))
        .map(|badge| evaluate_badge(badge, metrics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricKey;

    #[test]
    fn report_skips_unmeasured_and_untiered_badges() {
        let metrics = ProfileMetrics::default()
            .with_metric(MetricKey::MergedPrs, 16)
            .with_metric(MetricKey::Stars, 3);
        let report = progress_report(&Catalog::load_from_static(), &metrics);
        let ids: Vec<&str> = report.iter().map(|p| p.badge.id.as_str()).collect();
        assert_eq!(ids, vec!["pull-shark", "starstruck"]);

        let shark = &report[0];
        assert_eq!(shark.value, 16);
        assert_eq!(
            shark.progress.current.as_ref().map(|t| t.name.as_str()),
            Some("Silver")
        );
        assert_eq!(shark.target(), Some(1024));
    }

    #[test]
    fn badge_without_metric_key_reads_zero() {
        let catalog = Catalog::load_from_static();
        let yolo = catalog.get("yolo").unwrap();
        let progress = evaluate_badge(yolo, &ProfileMetrics::default());
        assert_eq!(progress.value, 0);
        assert!(progress.progress.current.is_none());
        assert!(progress.progress.percent.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_profile_yields_empty_report() {
        let report = progress_report(&Catalog::load_from_static(), &ProfileMetrics::default());
        assert!(report.is_empty());
    }
}
