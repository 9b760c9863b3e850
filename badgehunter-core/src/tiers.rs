//! Tier evaluation: map a raw counter onto a badge's tier ladder.
//!
//! Tiers are walked in ascending threshold order whatever their list order;
//! equal thresholds keep their list order. Tiers without a threshold cannot
//! be measured and are skipped. Malformed ladders (repeated or decreasing thresholds) never
//! panic or divide by zero; a zero-width bracket counts as complete.

use serde::{Deserialize, Serialize};

use crate::catalog::Tier;
use crate::numbers::{clamp_percent, u64_to_f64};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TierProgress {
    /// Highest tier already reached, if any.
    pub current: Option<Tier>,
    /// Next tier to reach; `None` once the ladder is maxed.
    pub next: Option<Tier>,
    /// Progress through the current bracket, always within `[0, 100]`.
    pub percent: f64,
}

impl TierProgress {
    #[must_use]
    pub const fn is_maxed(&self) -> bool {
        self.current.is_some() && self.next.is_none()
    }

    /// Threshold the counter is heading toward. For a maxed ladder this is the
    /// top tier's threshold.
    #[must_use]
    pub fn target(&self) -> Option<u64> {
        self.next
            .as_ref()
            .or(self.current.as_ref())
            .and_then(|tier| tier.threshold)
    }
}

/// Evaluate `value` against a tier ladder.
#[must_use]
pub fn evaluate(tiers: &[Tier], value: u64) -> TierProgress {
    let mut ladder: Vec<(&Tier, u64)> = tiers
        .iter()
        .filter_map(|tier| tier.threshold.map(|threshold| (tier, threshold)))
        .collect();
    ladder.sort_by_key(|&(_, threshold)| threshold);

    let mut current: Option<(&Tier, u64)> = None;
    let mut next: Option<(&Tier, u64)> = None;

    for (tier, threshold) in ladder {
        if value >= threshold {
            current = Some((tier, threshold));
        } else {
            next = Some((tier, threshold));
            break;
        }
    }

    let percent = match (current, next) {
        (_, Some((_, target))) => {
            let floor = current.map_or(0, |(_, threshold)| threshold);
            bracket_percent(value, floor, target)
        }
        (Some(_), None) => 100.0,
        (None, None) => 0.0,
    };

    TierProgress {
        current: current.map(|(tier, _)| tier.clone()),
        next: next.map(|(tier, _)| tier.clone()),
        percent,
    }
}

fn bracket_percent(value: u64, floor: u64, target: u64) -> f64 {
    if target <= floor {
        return 100.0;
    }
    let span = u64_to_f64(target - floor);
    let progressed = u64_to_f64(value.saturating_sub(floor));
    clamp_percent(progressed / span * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(name: &str, threshold: u64) -> Tier {
        Tier {
            name: name.to_string(),
            criteria: format!("{threshold} things"),
            color: String::new(),
            threshold: Some(threshold),
        }
    }

    fn shark_ladder() -> Vec<Tier> {
        vec![tier("Bronze", 2), tier("Silver", 16), tier("Gold", 1024)]
    }

    fn name(t: Option<&Tier>) -> Option<&str> {
        t.map(|tier| tier.name.as_str())
    }

    #[test]
    fn value_on_a_threshold_starts_the_next_bracket() {
        let progress = evaluate(&shark_ladder(), 16);
        assert_eq!(name(progress.current.as_ref()), Some("Silver"));
        assert_eq!(name(progress.next.as_ref()), Some("Gold"));
        assert!(progress.percent.abs() < f64::EPSILON);
        assert_eq!(progress.target(), Some(1024));
    }

    #[test]
    fn top_threshold_is_maxed() {
        let progress = evaluate(&shark_ladder(), 1024);
        assert_eq!(name(progress.current.as_ref()), Some("Gold"));
        assert!(progress.next.is_none());
        assert!(progress.is_maxed());
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(progress.target(), Some(1024));

        let beyond = evaluate(&shark_ladder(), 50_000);
        assert!(beyond.is_maxed());
        assert!((beyond.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_is_below_every_tier() {
        let progress = evaluate(&shark_ladder(), 0);
        assert!(progress.current.is_none());
        assert_eq!(name(progress.next.as_ref()), Some("Bronze"));
        assert!(progress.percent.abs() < f64::EPSILON);
        assert!(!progress.is_maxed());
    }

    #[test]
    fn partial_progress_interpolates_from_current_threshold() {
        let progress = evaluate(&shark_ladder(), 9);
        assert_eq!(name(progress.current.as_ref()), Some("Bronze"));
        assert!((progress.percent - 50.0).abs() < 1e-9);

        let first = evaluate(&shark_ladder(), 1);
        assert!((first.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_thresholds_do_not_divide_by_zero() {
        let tiers = vec![tier("A", 5), tier("B", 5), tier("C", 10)];
        let at_five = evaluate(&tiers, 5);
        assert_eq!(name(at_five.current.as_ref()), Some("B"));
        assert_eq!(name(at_five.next.as_ref()), Some("C"));
        assert!(at_five.percent.abs() < f64::EPSILON);

        let zero_tier = vec![tier("Free", 0), tier("Paid", 0)];
        let progress = evaluate(&zero_tier, 0);
        assert!(progress.is_maxed());
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn descending_ladder_is_read_by_threshold() {
        let tiers = vec![tier("A", 10), tier("B", 5)];
        let above = evaluate(&tiers, 12);
        assert_eq!(name(above.current.as_ref()), Some("A"));
        assert!(above.is_maxed());

        let between = evaluate(&tiers, 7);
        assert_eq!(name(between.current.as_ref()), Some("B"));
        assert_eq!(name(between.next.as_ref()), Some("A"));
        assert!((between.percent - 40.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_bracket_counts_as_complete() {
        assert!((bracket_percent(7, 7, 7) - 100.0).abs() < f64::EPSILON);
        assert!((bracket_percent(7, 9, 3) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiers_without_threshold_are_ignored() {
        let mut tiers = shark_ladder();
        tiers.insert(
            1,
            Tier {
                name: "Honorary".to_string(),
                criteria: "granted by staff".to_string(),
                color: String::new(),
                threshold: None,
            },
        );
        let progress = evaluate(&tiers, 20);
        assert_eq!(name(progress.current.as_ref()), Some("Silver"));
        assert_eq!(name(progress.next.as_ref()), Some("Gold"));
    }

    #[test]
    fn empty_ladder_has_no_progress() {
        let progress = evaluate(&[], 42);
        assert_eq!(progress, TierProgress::default());
        assert!(progress.target().is_none());
    }

    #[test]
    fn percent_stays_in_range_and_rises_within_brackets() {
        let tiers = shark_ladder();
        let mut last: Option<(Option<String>, f64)> = None;
        for value in 0..=1100_u64 {
            let progress = evaluate(&tiers, value);
            assert!((0.0..=100.0).contains(&progress.percent), "value {value}");
            let bracket = progress.current.as_ref().map(|t| t.name.clone());
            if let Some((prev_bracket, prev_percent)) = &last {
                if *prev_bracket == bracket {
                    assert!(progress.percent >= *prev_percent, "value {value}");
                }
            }
            last = Some((bracket, progress.percent));
        }
    }
}
